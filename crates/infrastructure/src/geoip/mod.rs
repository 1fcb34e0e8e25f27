pub mod maxmind;

pub use maxmind::MaxMindGeoProvider;
