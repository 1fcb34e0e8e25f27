//! Country/subdivision to zone label mapping.
//!
//! Loaded once at startup and read-only afterwards. On disk it is a mapping
//! whose keys are `default` or an ISO 3166-1 country code:
//!
//! ```yaml
//! default: eu
//! FR: eu
//! US:
//!   default: us-east
//!   CA: us-west
//! ```

use crate::DomainError;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

pub const DEFAULT_KEY: &str = "default";

/// Zones keyed by the second part of an ISO 3166-2 code, with a mandatory fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionZones {
    default: String,
    regions: HashMap<String, String>,
}

impl RegionZones {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            regions: HashMap::new(),
        }
    }

    pub fn with_region(mut self, code: impl Into<String>, zone: impl Into<String>) -> Self {
        self.regions.insert(code.into(), zone.into());
        self
    }

    pub fn default_zone(&self) -> &str {
        &self.default
    }

    pub fn zone_for(&self, region: Option<&str>) -> &str {
        region
            .and_then(|code| self.regions.get(code))
            .map(String::as_str)
            .unwrap_or(&self.default)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneEntry {
    Leaf(String),
    Nested(RegionZones),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawZoneEntry {
    Leaf(String),
    Nested(HashMap<String, String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneMap {
    default: String,
    countries: HashMap<String, ZoneEntry>,
}

impl ZoneMap {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            countries: HashMap::new(),
        }
    }

    pub fn with_country(mut self, code: impl Into<String>, entry: ZoneEntry) -> Self {
        self.countries.insert(code.into(), entry);
        self
    }

    pub fn default_zone(&self) -> &str {
        &self.default
    }

    pub fn country(&self, code: &str) -> Option<&ZoneEntry> {
        self.countries.get(code)
    }

    /// Zone for a geolocated client. An unknown or absent country falls back to
    /// the root default; an unknown or absent region to the country's default.
    pub fn zone_for(&self, country: Option<&str>, region: Option<&str>) -> &str {
        match country.and_then(|code| self.countries.get(code)) {
            Some(ZoneEntry::Leaf(zone)) => zone,
            Some(ZoneEntry::Nested(regions)) => regions.zone_for(region),
            None => &self.default,
        }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl<'de> Deserialize<'de> for ZoneMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, RawZoneEntry>::deserialize(deserializer)?;
        Self::from_raw(raw).map_err(serde::de::Error::custom)
    }
}

impl ZoneMap {
    fn from_raw(mut raw: HashMap<String, RawZoneEntry>) -> Result<Self, DomainError> {
        let default = match raw.remove(DEFAULT_KEY) {
            Some(RawZoneEntry::Leaf(zone)) => zone,
            Some(RawZoneEntry::Nested(_)) => {
                return Err(DomainError::InvalidZoneMap(
                    "root 'default' must be a zone label".to_string(),
                ))
            }
            None => {
                return Err(DomainError::InvalidZoneMap(
                    "missing root 'default' zone".to_string(),
                ))
            }
        };

        let mut countries = HashMap::with_capacity(raw.len());
        for (country, entry) in raw {
            let entry = match entry {
                RawZoneEntry::Leaf(zone) => ZoneEntry::Leaf(zone),
                RawZoneEntry::Nested(mut regions) => {
                    let nested_default = regions.remove(DEFAULT_KEY).ok_or_else(|| {
                        DomainError::InvalidZoneMap(format!(
                            "country '{}' has no 'default' zone",
                            country
                        ))
                    })?;
                    ZoneEntry::Nested(RegionZones {
                        default: nested_default,
                        regions,
                    })
                }
            };
            countries.insert(country, entry);
        }

        Ok(Self { default, countries })
    }
}
