//! Line codec for the PowerDNS pipe backend protocol.
//!
//! Every message is one line of tab-separated fields:
//!
//! ```text
//! host -> backend   HELO\t3
//!                   Q\t<name>\t<class>\t<type>\t<id>\t<remote-ip>\t<local-ip>\t<edns-subnet>
//! backend -> host   OK\t<banner>
//!                   DATA\t<scopebits>\t<auth>\t<name>\t<class>\t<type>\t<ttl>\t<id>\t<content>
//!                   END | FAIL
//! ```

use crate::site_map::DEFAULT_TTL;
use crate::{DomainError, PipeAnswer, PipeQuery};

pub const FIELD_SEPARATOR: char = '\t';
pub const HANDSHAKE_MARKER: &str = "HELO";
pub const QUERY_MARKER: &str = "Q";
pub const QUERY_FIELD_COUNT: usize = 7;
pub const IGNORED_ID: &str = "-1";

const END: &str = "END\n";
const FAIL: &str = "FAIL\n";

/// Pipe ABI versions this backend speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbiVersion {
    /// Adds local-ip and the EDNS client subnet to every query.
    V3,
}

impl AbiVersion {
    pub const SUPPORTED: &'static [AbiVersion] = &[AbiVersion::V3];

    pub fn token(self) -> &'static str {
        match self {
            AbiVersion::V3 => "3",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        Self::SUPPORTED.iter().copied().find(|v| v.token() == token)
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n').unwrap_or(line)
}

/// Accepts exactly `HELO\t<version>` for a supported version, with or
/// without the trailing newline.
pub fn handshake(line: &str) -> Result<AbiVersion, DomainError> {
    let line = strip_line_ending(line);

    line.strip_prefix(HANDSHAKE_MARKER)
        .and_then(|rest| rest.strip_prefix(FIELD_SEPARATOR))
        .and_then(AbiVersion::from_token)
        .ok_or_else(|| DomainError::VersionMismatch(line.to_string()))
}

pub fn handshake_ok(banner: &str) -> String {
    format!("OK{}{}\n", FIELD_SEPARATOR, banner)
}

/// Decodes a `Q` line carrying exactly seven fields. The query name is folded
/// to lowercase; every other field is passed through untouched.
pub fn decode_query(line: &str) -> Result<PipeQuery, DomainError> {
    let line = line.trim_end_matches(['\r', '\n']);

    let fields = line
        .strip_prefix(QUERY_MARKER)
        .and_then(|rest| rest.strip_prefix(FIELD_SEPARATOR))
        .ok_or_else(|| DomainError::MalformedQuery("not a query line".to_string()))?;

    let parts: Vec<&str> = fields.split(FIELD_SEPARATOR).collect();
    let &[name, class, record_type, id, remote_ip, local_ip, edns_subnet] = parts.as_slice()
    else {
        return Err(DomainError::MalformedQuery(format!(
            "expected {} fields, got {}",
            QUERY_FIELD_COUNT,
            parts.len()
        )));
    };

    Ok(PipeQuery {
        name: name.to_lowercase(),
        class: class.to_string(),
        record_type: record_type.to_string(),
        id: id.to_string(),
        remote_ip: remote_ip.to_string(),
        local_ip: local_ip.to_string(),
        edns_subnet: edns_subnet.to_string(),
    })
}

pub fn encode_answer(answer: &PipeAnswer) -> Result<String, DomainError> {
    let required = [
        ("name", &answer.name),
        ("class", &answer.class),
        ("type", &answer.record_type),
        ("content", &answer.content),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
        return Err(DomainError::InvalidAnswer(format!("empty {}", field)));
    }

    Ok(format!(
        "DATA\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
        answer.scope_bits,
        u8::from(answer.authoritative),
        answer.name,
        answer.class,
        answer.record_type,
        answer.ttl.unwrap_or(DEFAULT_TTL),
        answer.id.as_deref().unwrap_or(IGNORED_ID),
        answer.content,
    ))
}

pub fn emit_end() -> &'static str {
    END
}

pub fn emit_fail() -> &'static str {
    FAIL
}
