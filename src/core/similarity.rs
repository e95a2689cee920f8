use crate::models::{AnswerSet, Catalog};

/// Count the catalog questions on which two answer sets chose the same
/// option index.
///
/// Only questions in the current catalog are considered; answers referencing
/// retired questions never contribute to the count. Option equality is exact
/// index equality, not label equality.
#[inline]
pub fn agreement_count(catalog: &Catalog, a: &AnswerSet, b: &AnswerSet) -> usize {
    catalog
        .question_ids
        .iter()
        .filter(|q| match (a.get(*q), b.get(*q)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        })
        .count()
}

/// Normalize an agreement count to a 0-100 percentage.
///
/// Rounding is `f64::round` (half away from zero), which for the
/// non-negative values here is round-half-up: 2/3 -> 67, 1/8 -> 13.
/// A zero-question catalog yields 0 rather than dividing by zero.
#[inline]
pub fn similarity_percent(agreements: usize, total_questions: usize) -> u8 {
    if total_questions == 0 {
        return 0;
    }

    ((agreements as f64 / total_questions as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnswerSet;

    fn answers(pairs: &[(i64, i32)]) -> AnswerSet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_agreement_count_partial_overlap() {
        let catalog = Catalog::new(vec![1, 2, 3]);
        let a = answers(&[(1, 0), (2, 1), (3, 0)]);
        let b = answers(&[(1, 0), (2, 1), (3, 1)]);

        assert_eq!(agreement_count(&catalog, &a, &b), 2);
    }

    #[test]
    fn test_agreement_count_is_symmetric() {
        let catalog = Catalog::new(vec![1, 2, 3, 4]);
        let a = answers(&[(1, 0), (2, 2), (3, 1), (4, 0)]);
        let b = answers(&[(1, 1), (2, 2), (3, 1), (4, 3)]);

        assert_eq!(
            agreement_count(&catalog, &a, &b),
            agreement_count(&catalog, &b, &a)
        );
    }

    #[test]
    fn test_agreement_ignores_retired_questions() {
        // Question 99 is no longer in the catalog; agreeing on it means nothing.
        let catalog = Catalog::new(vec![1, 2]);
        let a = answers(&[(1, 0), (2, 1), (99, 4)]);
        let b = answers(&[(1, 0), (2, 0), (99, 4)]);

        assert_eq!(agreement_count(&catalog, &a, &b), 1);
    }

    #[test]
    fn test_similarity_percent_two_thirds_rounds_up() {
        assert_eq!(similarity_percent(2, 3), 67);
    }

    #[test]
    fn test_similarity_percent_half_rounds_up() {
        // 1/8 = 12.5% -> 13
        assert_eq!(similarity_percent(1, 8), 13);
        // 3/8 = 37.5% -> 38
        assert_eq!(similarity_percent(3, 8), 38);
    }

    #[test]
    fn test_similarity_percent_bounds() {
        assert_eq!(similarity_percent(0, 5), 0);
        assert_eq!(similarity_percent(5, 5), 100);
    }

    #[test]
    fn test_similarity_percent_empty_catalog() {
        assert_eq!(similarity_percent(0, 0), 0);
    }
}
