use geowrr_application::ports::{GeoLocation, GeoLookup, GeoProvider};
use geowrr_domain::DomainError;
use maxminddb::{geoip2, MaxMindDBError, Reader};
use std::net::IpAddr;
use std::path::Path;
use tracing::{error, info};

/// GeoIP2/GeoLite2 City database reader.
pub struct MaxMindGeoProvider {
    reader: Reader<Vec<u8>>,
}

impl MaxMindGeoProvider {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let reader = Reader::open_readfile(path).map_err(|e| {
            DomainError::GeoDatabase(format!("Failed to open {}: {}", path.display(), e))
        })?;

        info!(
            path = %path.display(),
            database_type = %reader.metadata.database_type,
            "GeoIP database loaded"
        );
        Ok(Self { reader })
    }
}

fn to_location(city: &geoip2::City<'_>) -> GeoLocation {
    GeoLocation {
        country_code: city
            .country
            .as_ref()
            .and_then(|c| c.iso_code)
            .map(str::to_string),
        subdivision_code: city
            .subdivisions
            .as_ref()
            .and_then(|s| s.last())
            .and_then(|s| s.iso_code)
            .map(str::to_string),
    }
}

impl GeoProvider for MaxMindGeoProvider {
    fn lookup(&self, ip: IpAddr) -> GeoLookup {
        match self.reader.lookup::<geoip2::City>(ip) {
            Ok(city) => GeoLookup::Found(to_location(&city)),
            Err(MaxMindDBError::AddressNotFoundError(_)) => GeoLookup::NotFound,
            Err(e) => {
                error!(error = %e, address = %ip, "GeoIP lookup failed");
                GeoLookup::NotFound
            }
        }
    }
}
