pub mod yaml_loader;

pub use yaml_loader::{load_site_map, load_zone_map};
