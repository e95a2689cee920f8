use crate::models::{AnswerSet, Catalog};

/// Check whether an answer set covers every question in the active catalog.
///
/// Only fully-covered participants are comparable: requiring full coverage
/// keeps the percentage metric well-defined across all pairs (a participant
/// with fewer answers would have fewer chances to disagree). An empty
/// catalog admits nobody, so both match queries degrade to empty results.
#[inline]
pub fn has_full_coverage(catalog: &Catalog, answers: &AnswerSet) -> bool {
    !catalog.is_empty() && catalog.question_ids.iter().all(|q| answers.contains_key(q))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnswerSet;

    fn answers(pairs: &[(i64, i32)]) -> AnswerSet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_full_coverage() {
        let catalog = Catalog::new(vec![1, 2, 3]);
        let set = answers(&[(1, 0), (2, 1), (3, 2)]);

        assert!(has_full_coverage(&catalog, &set));
    }

    #[test]
    fn test_missing_answer_fails_coverage() {
        let catalog = Catalog::new(vec![1, 2, 3]);
        let set = answers(&[(1, 0), (2, 1)]);

        assert!(!has_full_coverage(&catalog, &set));
    }

    #[test]
    fn test_stale_extra_answers_still_cover() {
        // An answer to a retired question does not break coverage.
        let catalog = Catalog::new(vec![1, 2]);
        let set = answers(&[(1, 0), (2, 1), (99, 0)]);

        assert!(has_full_coverage(&catalog, &set));
    }

    #[test]
    fn test_empty_catalog_admits_nobody() {
        let catalog = Catalog::new(vec![]);

        assert!(!has_full_coverage(&catalog, &answers(&[])));
        assert!(!has_full_coverage(&catalog, &answers(&[(1, 0)])));
    }
}
