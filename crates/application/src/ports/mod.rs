mod geo_provider;
mod random_source;

pub use geo_provider::{GeoLocation, GeoLookup, GeoProvider};
pub use random_source::RandomSource;
