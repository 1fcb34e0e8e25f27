//! geowrr infrastructure: adapters for the application ports
pub mod geoip;
pub mod maps;
pub mod random;
