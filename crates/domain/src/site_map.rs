//! Query name to weighted answer sets.
//!
//! ```yaml
//! www.example.com:
//!   IN:
//!     A:
//!       ttl: 300
//!       content:
//!         default:
//!           1.1.1.1: 20
//!           2.2.2.2: 80
//!         us:
//!           3.3.3.3: 100
//! '*.example.com':
//!   IN:
//!     A:
//!       content:
//!         default:
//!           1.1.1.1: 100
//! ```

use crate::zone_map::DEFAULT_KEY;
use crate::DomainError;
use serde::{Deserialize, Deserializer};
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_TTL: u32 = 3600;

/// Address to weight. Ordered so that weighted selection walks addresses in
/// ascending lexicographic order.
pub type WeightSet = BTreeMap<String, u32>;

/// Record type to record. Ordered so that `ANY` expands in ascending type order.
pub type TypeRecords = BTreeMap<String, SiteRecord>;

/// Class to records.
pub type ClassRecords = HashMap<String, TypeRecords>;

fn default_ttl() -> u32 {
    DEFAULT_TTL
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteRecord {
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    pub content: HashMap<String, WeightSet>,
}

impl SiteRecord {
    pub fn new(ttl: u32) -> Self {
        Self {
            ttl,
            content: HashMap::new(),
        }
    }

    pub fn with_zone<I, A>(mut self, zone: impl Into<String>, weights: I) -> Self
    where
        I: IntoIterator<Item = (A, u32)>,
        A: Into<String>,
    {
        let set = weights
            .into_iter()
            .map(|(address, weight)| (address.into(), weight))
            .collect();
        self.content.insert(zone.into(), set);
        self
    }

    /// Weight set for `zone`, or the record's `default` set.
    pub fn weights_for(&self, zone: &str) -> Option<&WeightSet> {
        self.content
            .get(zone)
            .or_else(|| self.content.get(DEFAULT_KEY))
    }
}

impl Default for SiteRecord {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

pub fn total_weight(weights: &WeightSet) -> u64 {
    weights.values().map(|w| u64::from(*w)).sum()
}

/// Walks `weights` in address order and returns the first address whose
/// cumulative weight reaches `draw`. `draw` is expected in `[1, total_weight]`.
pub fn pick_weighted(weights: &WeightSet, draw: u64) -> Option<&str> {
    let mut upto = 0u64;
    for (address, weight) in weights {
        upto += u64::from(*weight);
        if draw <= upto {
            return Some(address);
        }
    }
    None
}

/// `www.example.com` -> `*.example.com`. Names without a dot have no wildcard.
pub fn wildcard_of(name: &str) -> Option<String> {
    name.find('.').map(|dot| format!("*{}", &name[dot..]))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteMap {
    sites: HashMap<String, ClassRecords>,
}

impl SiteMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(
        mut self,
        name: &str,
        class: impl Into<String>,
        record_type: impl Into<String>,
        record: SiteRecord,
    ) -> Self {
        self.sites
            .entry(name.to_lowercase())
            .or_default()
            .entry(class.into())
            .or_default()
            .insert(record_type.into(), record);
        self
    }

    /// Literal match first, then the single-level wildcard. Returns the matched
    /// key with its classes.
    pub fn find(&self, name: &str) -> Option<(&str, &ClassRecords)> {
        if let Some((key, classes)) = self.sites.get_key_value(name) {
            return Some((key.as_str(), classes));
        }

        let wildcard = wildcard_of(name)?;
        self.sites
            .get_key_value(wildcard.as_str())
            .map(|(key, classes)| (key.as_str(), classes))
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Checks the invariants the resolver relies on: every record has a
    /// `default` weight set, a positive ttl, and only non-empty weight sets of
    /// positive weights.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (name, classes) in &self.sites {
            for (class, types) in classes {
                for (record_type, record) in types {
                    let path = format!("{} {} {}", name, class, record_type);

                    if record.ttl == 0 {
                        return Err(DomainError::InvalidSiteMap(format!(
                            "{}: ttl must be positive",
                            path
                        )));
                    }
                    if !record.content.contains_key(DEFAULT_KEY) {
                        return Err(DomainError::InvalidSiteMap(format!(
                            "{}: missing 'default' weight set",
                            path
                        )));
                    }
                    for (zone, weights) in &record.content {
                        if weights.is_empty() {
                            return Err(DomainError::InvalidSiteMap(format!(
                                "{}: zone '{}' has no addresses",
                                path, zone
                            )));
                        }
                        if let Some((address, _)) = weights.iter().find(|(_, w)| **w == 0) {
                            return Err(DomainError::InvalidSiteMap(format!(
                                "{}: zone '{}' address {} has zero weight",
                                path, zone, address
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for SiteMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, ClassRecords>::deserialize(deserializer)?;
        let sites = raw
            .into_iter()
            .map(|(name, classes)| (name.to_lowercase(), classes))
            .collect();
        let map = Self { sites };
        map.validate().map_err(serde::de::Error::custom)?;
        Ok(map)
    }
}
