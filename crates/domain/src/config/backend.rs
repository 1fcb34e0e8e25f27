use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Zone map (YAML)
    #[serde(default = "default_zones")]
    pub zones: String,

    /// Site map (YAML)
    #[serde(default = "default_sites")]
    pub sites: String,

    /// MaxMind GeoIP2/GeoLite2 City database
    #[serde(default = "default_geoip_database")]
    pub geoip_database: String,

    /// Text sent after `OK` when the handshake is accepted
    #[serde(default = "default_banner")]
    pub banner: String,

    /// Seed for weighted selection; unset means a fresh random source
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            zones: default_zones(),
            sites: default_sites(),
            geoip_database: default_geoip_database(),
            banner: default_banner(),
            seed: None,
        }
    }
}

fn default_zones() -> String {
    "/etc/geowrr/zones.yml".to_string()
}

fn default_sites() -> String {
    "/etc/geowrr/sites.yml".to_string()
}

fn default_geoip_database() -> String {
    "/usr/share/GeoIP/GeoLite2-City.mmdb".to_string()
}

fn default_banner() -> String {
    "[geowrr] Starting...".to_string()
}
