use crate::ports::RandomSource;
use geowrr_domain::site_map::{pick_weighted, total_weight};
use geowrr_domain::{DomainError, SiteMap, WeightSet, ANY_TYPE};
use std::sync::Arc;
use tracing::{debug, warn};

/// One resolved `(type, address, ttl)` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteAnswer {
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
}

/// Picks the answer set for a query by weighted random selection.
pub struct ResolveSiteUseCase {
    sites: Arc<SiteMap>,
    random: Arc<dyn RandomSource>,
}

impl ResolveSiteUseCase {
    pub fn new(sites: Arc<SiteMap>, random: Arc<dyn RandomSource>) -> Self {
        Self { sites, random }
    }

    /// Returns an empty list when the name, class or type is unknown. `ANY`
    /// expands to every configured type of the class, in ascending order.
    /// Errors only on configuration-invariant violations.
    pub fn execute(
        &self,
        name: &str,
        zone: &str,
        class: &str,
        record_type: &str,
    ) -> Result<Vec<SiteAnswer>, DomainError> {
        let Some((site, classes)) = self.sites.find(name) else {
            warn!(name, "No such site");
            return Ok(Vec::new());
        };

        let Some(types) = classes.get(class) else {
            warn!(site, class, record_type, "No match for class");
            return Ok(Vec::new());
        };

        let candidates: Vec<_> = if record_type == ANY_TYPE {
            types.iter().collect()
        } else {
            match types.get_key_value(record_type) {
                Some(entry) => vec![entry],
                None => {
                    warn!(site, class, record_type, "No match for type");
                    return Ok(Vec::new());
                }
            }
        };

        let mut answers = Vec::with_capacity(candidates.len());
        for (rtype, record) in candidates {
            let weights = record.weights_for(zone).ok_or_else(|| {
                DomainError::MissingDefaultWeightSet {
                    name: site.to_string(),
                    class: class.to_string(),
                    record_type: rtype.clone(),
                }
            })?;

            let content = self.select(weights).ok_or_else(|| DomainError::EmptyWeightSet {
                name: site.to_string(),
                record_type: rtype.clone(),
                zone: zone.to_string(),
            })?;

            debug!(site, zone, record_type = %rtype, content, ttl = record.ttl, "Site resolved");
            answers.push(SiteAnswer {
                record_type: rtype.clone(),
                content: content.to_string(),
                ttl: record.ttl,
            });
        }

        Ok(answers)
    }

    fn select<'w>(&self, weights: &'w WeightSet) -> Option<&'w str> {
        if weights.len() == 1 {
            return weights.keys().next().map(String::as_str);
        }

        let total = total_weight(weights);
        if total == 0 {
            return None;
        }
        pick_weighted(weights, self.random.draw(total))
    }
}
