use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unsupported pipe ABI handshake: {0:?}")]
    VersionMismatch(String),

    #[error("Malformed query line: {0}")]
    MalformedQuery(String),

    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),

    #[error("Record {name} {class} {record_type} has no 'default' weight set")]
    MissingDefaultWeightSet {
        name: String,
        class: String,
        record_type: String,
    },

    #[error("Weight set for zone '{zone}' of {name} {record_type} has no usable weight")]
    EmptyWeightSet {
        name: String,
        record_type: String,
        zone: String,
    },

    #[error("Invalid zone map: {0}")]
    InvalidZoneMap(String),

    #[error("Invalid site map: {0}")]
    InvalidSiteMap(String),

    #[error("GeoIP database error: {0}")]
    GeoDatabase(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
