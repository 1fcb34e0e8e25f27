pub mod handle_pipe_query;
pub mod pipe_session;
pub mod resolve_site;
pub mod resolve_zone;

pub use handle_pipe_query::HandlePipeQueryUseCase;
pub use pipe_session::{PipeSession, SessionState};
pub use resolve_site::{ResolveSiteUseCase, SiteAnswer};
pub use resolve_zone::ResolveZoneUseCase;
