use crate::ports::{GeoLookup, GeoProvider};
use geowrr_domain::reserved_address::{is_reserved_ip, strip_prefix_length};
use geowrr_domain::ZoneMap;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Maps a client to a zone label.
///
/// The EDNS client subnet is preferred over the remote address. When neither
/// is a routable address, or the GeoIP database does not know the address,
/// the zone map's root `default` is returned.
pub struct ResolveZoneUseCase {
    geo: Arc<dyn GeoProvider>,
    zones: Arc<ZoneMap>,
}

impl ResolveZoneUseCase {
    pub fn new(geo: Arc<dyn GeoProvider>, zones: Arc<ZoneMap>) -> Self {
        Self { geo, zones }
    }

    pub fn execute(&self, remote_ip: &str, edns_subnet: &str) -> &str {
        let default_zone = self.zones.default_zone();

        let ip = match routable(strip_prefix_length(edns_subnet)).or_else(|| routable(remote_ip)) {
            Some(ip) => ip,
            None => {
                info!(remote_ip, edns_subnet, "Reserved address, using default zone");
                return default_zone;
            }
        };

        let location = match self.geo.lookup(ip) {
            GeoLookup::Found(location) => location,
            GeoLookup::NotFound => {
                warn!(address = %ip, "Address not found in GeoIP database");
                return default_zone;
            }
        };

        let zone = self.zones.zone_for(
            location.country_code.as_deref(),
            location.subdivision_code.as_deref(),
        );
        debug!(
            address = %ip,
            country = ?location.country_code,
            subdivision = ?location.subdivision_code,
            zone,
            "Zone resolved"
        );
        zone
    }
}

fn routable(address: &str) -> Option<IpAddr> {
    address
        .trim()
        .parse::<IpAddr>()
        .ok()
        .filter(|ip| !is_reserved_ip(*ip))
}
