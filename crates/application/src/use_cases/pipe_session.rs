use super::HandlePipeQueryUseCase;
use geowrr_domain::pipe_protocol::{emit_fail, handshake, handshake_ok};
use geowrr_domain::AbiVersion;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingHandshake,
    Serving(AbiVersion),
}

/// Protocol state for one host connection. Lines are handshake attempts until
/// one succeeds; every line after that is a query.
pub struct PipeSession {
    handler: Arc<HandlePipeQueryUseCase>,
    banner: String,
    state: SessionState,
}

impl PipeSession {
    pub fn new(handler: Arc<HandlePipeQueryUseCase>, banner: impl Into<String>) -> Self {
        Self {
            handler,
            banner: banner.into(),
            state: SessionState::AwaitingHandshake,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn handle_line(&mut self, line: &str) -> String {
        match self.state {
            SessionState::AwaitingHandshake => match handshake(line) {
                Ok(version) => {
                    info!(abi = version.token(), "Handshake accepted");
                    self.state = SessionState::Serving(version);
                    handshake_ok(&self.banner)
                }
                Err(e) => {
                    warn!(error = %e, "Handshake rejected");
                    emit_fail().to_string()
                }
            },
            SessionState::Serving(_) => self.handler.execute(line),
        }
    }
}
