//! Loads the zone and site maps from YAML. Both maps validate their
//! invariants while deserializing, so a map returned from here is safe to
//! hand to the resolvers.

use geowrr_domain::{DomainError, SiteMap, ZoneMap};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

fn load_yaml<T: DeserializeOwned>(
    path: &Path,
    invalid: fn(String) -> DomainError,
) -> Result<T, DomainError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| DomainError::IoError(format!("Failed to read {}: {}", path.display(), e)))?;

    serde_yaml::from_str(&contents).map_err(|e| invalid(format!("{}: {}", path.display(), e)))
}

pub fn load_zone_map(path: impl AsRef<Path>) -> Result<ZoneMap, DomainError> {
    let path = path.as_ref();
    let zones: ZoneMap = load_yaml(path, DomainError::InvalidZoneMap)?;

    info!(
        path = %path.display(),
        countries = zones.len(),
        default_zone = zones.default_zone(),
        "Zone map loaded"
    );
    Ok(zones)
}

pub fn load_site_map(path: impl AsRef<Path>) -> Result<SiteMap, DomainError> {
    let path = path.as_ref();
    let sites: SiteMap = load_yaml(path, DomainError::InvalidSiteMap)?;

    info!(path = %path.display(), sites = sites.len(), "Site map loaded");
    Ok(sites)
}
