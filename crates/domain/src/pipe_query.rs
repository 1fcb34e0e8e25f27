/// A decoded `Q` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeQuery {
    pub name: String,
    pub class: String,
    pub record_type: String,
    pub id: String,
    pub remote_ip: String,
    pub local_ip: String,
    pub edns_subnet: String,
}

impl PipeQuery {
    pub fn is_any(&self) -> bool {
        self.record_type == ANY_TYPE
    }
}

/// Wildcard query type, expanded to every configured type at resolution time.
pub const ANY_TYPE: &str = "ANY";
