use super::{ResolveSiteUseCase, ResolveZoneUseCase};
use crate::ports::{GeoProvider, RandomSource};
use geowrr_domain::pipe_protocol::{decode_query, emit_end, emit_fail, encode_answer};
use geowrr_domain::{PipeAnswer, SiteMap, ZoneMap};
use std::sync::Arc;
use tracing::{debug, error};

/// Turns one `Q` line into the full reply for the host: either every `DATA`
/// line followed by a single `END`, a bare `END`, or `FAIL`.
pub struct HandlePipeQueryUseCase {
    resolve_zone: ResolveZoneUseCase,
    resolve_site: ResolveSiteUseCase,
}

impl HandlePipeQueryUseCase {
    pub fn new(
        geo: Arc<dyn GeoProvider>,
        zones: Arc<ZoneMap>,
        sites: Arc<SiteMap>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            resolve_zone: ResolveZoneUseCase::new(geo, zones),
            resolve_site: ResolveSiteUseCase::new(sites, random),
        }
    }

    pub fn execute(&self, line: &str) -> String {
        let query = match decode_query(line) {
            Ok(query) => query,
            Err(e) => {
                error!(error = %e, line = line.trim_end(), "Cannot unpack query");
                return emit_fail().to_string();
            }
        };

        let zone = self
            .resolve_zone
            .execute(&query.remote_ip, &query.edns_subnet);

        let answers = match self.resolve_site.execute(
            &query.name,
            zone,
            &query.class,
            &query.record_type,
        ) {
            Ok(answers) => answers,
            Err(e) => {
                error!(error = %e, name = %query.name, "Site lookup failed");
                return emit_fail().to_string();
            }
        };

        if answers.is_empty() {
            return emit_end().to_string();
        }

        let mut reply = String::new();
        for answer in &answers {
            let data = PipeAnswer::new(
                &query.name,
                &query.class,
                &answer.record_type,
                &answer.content,
            )
            .with_ttl(answer.ttl);

            match encode_answer(&data) {
                Ok(encoded) => reply.push_str(&encoded),
                Err(e) => {
                    error!(error = %e, name = %query.name, "Bad answer");
                    return emit_fail().to_string();
                }
            }
        }
        reply.push_str(emit_end());

        debug!(name = %query.name, zone, records = answers.len(), "Query answered");
        reply
    }
}
