use anyhow::Context;
use geowrr_application::ports::{GeoProvider, RandomSource};
use geowrr_application::use_cases::{HandlePipeQueryUseCase, PipeSession};
use geowrr_domain::Config;
use geowrr_infrastructure::geoip::MaxMindGeoProvider;
use geowrr_infrastructure::maps::{load_site_map, load_zone_map};
use geowrr_infrastructure::random::{SeededRandom, ThreadRandom};
use std::sync::Arc;
use tracing::info;

pub struct PipeServices {
    pub handler: Arc<HandlePipeQueryUseCase>,
    pub banner: String,
}

impl PipeServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let backend = &config.backend;

        let zones = load_zone_map(&backend.zones)
            .with_context(|| format!("loading zones from {}", backend.zones))?;
        let sites = load_site_map(&backend.sites)
            .with_context(|| format!("loading sites from {}", backend.sites))?;
        let geo: Arc<dyn GeoProvider> = Arc::new(
            MaxMindGeoProvider::open(&backend.geoip_database)
                .with_context(|| format!("opening GeoIP database {}", backend.geoip_database))?,
        );

        let random: Arc<dyn RandomSource> = match backend.seed {
            Some(seed) => {
                info!(seed, "Using seeded weighted selection");
                Arc::new(SeededRandom::new(seed))
            }
            None => Arc::new(ThreadRandom),
        };

        let handler = HandlePipeQueryUseCase::new(geo, Arc::new(zones), Arc::new(sites), random);

        Ok(Self {
            handler: Arc::new(handler),
            banner: backend.banner.clone(),
        })
    }

    pub fn session(&self) -> PipeSession {
        PipeSession::new(self.handler.clone(), self.banner.clone())
    }
}
