//! geowrr domain layer
pub mod config;
pub mod errors;
pub mod pipe_answer;
pub mod pipe_protocol;
pub mod pipe_query;
pub mod reserved_address;
pub mod site_map;
pub mod zone_map;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use pipe_answer::PipeAnswer;
pub use pipe_protocol::AbiVersion;
pub use pipe_query::{PipeQuery, ANY_TYPE};
pub use site_map::{SiteMap, SiteRecord, WeightSet, DEFAULT_TTL};
pub use zone_map::{RegionZones, ZoneEntry, ZoneMap};
