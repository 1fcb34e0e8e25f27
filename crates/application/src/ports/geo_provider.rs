use std::net::IpAddr;

/// What a GeoIP lookup knows about an address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoLocation {
    /// ISO 3166-1 alpha-2 country code
    pub country_code: Option<String>,
    /// Second part of the ISO 3166-2 code of the most specific subdivision
    pub subdivision_code: Option<String>,
}

impl GeoLocation {
    pub fn country(code: impl Into<String>) -> Self {
        Self {
            country_code: Some(code.into()),
            subdivision_code: None,
        }
    }

    pub fn with_subdivision(mut self, code: impl Into<String>) -> Self {
        self.subdivision_code = Some(code.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeoLookup {
    Found(GeoLocation),
    NotFound,
}

/// Port for geolocating client addresses.
pub trait GeoProvider: Send + Sync {
    fn lookup(&self, ip: IpAddr) -> GeoLookup;
}
