use crate::core::{
    eligibility::has_full_coverage,
    similarity::{agreement_count, similarity_percent},
};
use crate::models::{Catalog, PairMatch, ParticipantAnswers, RankedMatch};

/// Maximum number of results returned by the single-participant query.
pub const RANKED_MATCH_LIMIT: usize = 5;

/// Matching engine - pure computation over catalog and population snapshots
///
/// # Query shapes
/// 1. `ranked_matches` - top matches for one participant
/// 2. `all_matches` - every comparable pair in the group
///
/// Both operate on data loaded by the caller and hold no state beyond the
/// ranked-result limit, so concurrent invocations are independent.
#[derive(Debug, Clone)]
pub struct Matcher {
    ranked_limit: usize,
}

impl Matcher {
    pub fn new(ranked_limit: usize) -> Self {
        Self { ranked_limit }
    }

    pub fn with_default_limit() -> Self {
        Self::new(RANKED_MATCH_LIMIT)
    }

    /// Rank the given participant against every other comparable participant.
    ///
    /// Participants without full catalog coverage are excluded from the
    /// results, and an unknown or not-fully-covered subject yields an empty
    /// list rather than an error. Results are ordered by identical answers
    /// descending; ties are broken by participant name ascending.
    ///
    /// # Arguments
    /// * `participant` - display name of the subject
    /// * `catalog` - the active question catalog, loaded at query time
    /// * `population` - every participant's stored answer set
    ///
    /// # Returns
    /// At most `ranked_limit` matches, best first.
    pub fn ranked_matches(
        &self,
        participant: &str,
        catalog: &Catalog,
        population: &[ParticipantAnswers],
    ) -> Vec<RankedMatch> {
        let Some(subject) = population.iter().find(|p| p.name == participant) else {
            return Vec::new();
        };

        if !has_full_coverage(catalog, &subject.answers) {
            return Vec::new();
        }

        let total = catalog.total_questions();

        let mut scored: Vec<(usize, &ParticipantAnswers)> = population
            .iter()
            .filter(|p| p.name != subject.name)
            .filter(|p| has_full_coverage(catalog, &p.answers))
            .map(|p| (agreement_count(catalog, &subject.answers, &p.answers), p))
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.name.cmp(&b.1.name)));
        scored.truncate(self.ranked_limit);

        scored
            .into_iter()
            .map(|(agreements, other)| RankedMatch {
                participant: other.name.clone(),
                similarity: similarity_percent(agreements, total),
                identical_answers: agreements,
                total_questions: total,
            })
            .collect()
    }

    /// Score every unordered pair of comparable participants.
    ///
    /// Each pair appears exactly once, with names in lexicographic order.
    /// Results are ordered by identical answers descending, ties by the
    /// ordered name pair ascending. Quadratic in the number of comparable
    /// participants; sized for small groups.
    pub fn all_matches(
        &self,
        catalog: &Catalog,
        population: &[ParticipantAnswers],
    ) -> Vec<PairMatch> {
        let total = catalog.total_questions();

        let mut eligible: Vec<&ParticipantAnswers> = population
            .iter()
            .filter(|p| has_full_coverage(catalog, &p.answers))
            .collect();
        eligible.sort_by(|a, b| a.name.cmp(&b.name));

        let mut pairs = Vec::with_capacity(eligible.len() * eligible.len().saturating_sub(1) / 2);

        for i in 0..eligible.len() {
            for j in (i + 1)..eligible.len() {
                let agreements = agreement_count(catalog, &eligible[i].answers, &eligible[j].answers);
                pairs.push(PairMatch {
                    participants: [eligible[i].name.clone(), eligible[j].name.clone()],
                    similarity: similarity_percent(agreements, total),
                    identical_answers: agreements,
                    total_questions: total,
                });
            }
        }

        pairs.sort_by(|a, b| {
            b.identical_answers
                .cmp(&a.identical_answers)
                .then_with(|| a.participants.cmp(&b.participants))
        });

        pairs
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_limit()
    }
}
