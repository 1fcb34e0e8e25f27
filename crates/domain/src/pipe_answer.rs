/// One `DATA` record sent back to the host.
///
/// `ttl` and `id` are optional; the codec fills in `3600` and the `-1`
/// ("ignored") sentinel when they are unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeAnswer {
    pub scope_bits: u8,
    pub authoritative: bool,
    pub name: String,
    pub class: String,
    pub record_type: String,
    pub ttl: Option<u32>,
    pub id: Option<String>,
    pub content: String,
}

impl PipeAnswer {
    pub fn new(
        name: impl Into<String>,
        class: impl Into<String>,
        record_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            scope_bits: 0,
            authoritative: true,
            name: name.into(),
            class: class.into(),
            record_type: record_type.into(),
            ttl: None,
            id: None,
            content: content.into(),
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
