// Unit tests for the survey matching primitives

use survey_match::core::{agreement_count, has_full_coverage, similarity_percent};
use survey_match::models::{AnswerSet, Catalog, Question};

fn answers(pairs: &[(i64, i32)]) -> AnswerSet {
    pairs.iter().copied().collect()
}

#[test]
fn test_agreement_count_partial_overlap() {
    let catalog = Catalog::new(vec![1, 2, 3]);
    let a = answers(&[(1, 0), (2, 1), (3, 0)]);
    let b = answers(&[(1, 0), (2, 1), (3, 2)]);

    assert_eq!(agreement_count(&catalog, &a, &b), 2);
}

#[test]
fn test_agreement_count_is_symmetric() {
    let catalog = Catalog::new(vec![1, 2, 3, 4]);
    let a = answers(&[(1, 0), (2, 3), (3, 0), (4, 1)]);
    let b = answers(&[(1, 1), (2, 3), (3, 0), (4, 2)]);

    assert_eq!(
        agreement_count(&catalog, &a, &b),
        agreement_count(&catalog, &b, &a)
    );
}

#[test]
fn test_agreement_ignores_answers_outside_catalog() {
    let catalog = Catalog::new(vec![1, 2]);

    // Both still hold an identical answer for retired question 9
    let a = answers(&[(1, 0), (2, 1), (9, 4)]);
    let b = answers(&[(1, 0), (2, 0), (9, 4)]);

    assert_eq!(agreement_count(&catalog, &a, &b), 1);
}

#[test]
fn test_similarity_rounds_half_up() {
    // 2/3 = 66.66… -> 67, 1/8 = 12.5 -> 13, 5/8 = 62.5 -> 63
    assert_eq!(similarity_percent(2, 3), 67);
    assert_eq!(similarity_percent(1, 8), 13);
    assert_eq!(similarity_percent(5, 8), 63);
}

#[test]
fn test_similarity_bounds() {
    assert_eq!(similarity_percent(0, 5), 0);
    assert_eq!(similarity_percent(5, 5), 100);
    assert_eq!(similarity_percent(0, 0), 0);

    for total in 1..=20usize {
        for agreements in 0..=total {
            let pct = similarity_percent(agreements, total);
            assert!(pct <= 100, "{}/{} gave {}", agreements, total, pct);
        }
    }
}

#[test]
fn test_full_coverage_requires_every_question() {
    let catalog = Catalog::new(vec![1, 2, 3]);

    assert!(has_full_coverage(&catalog, &answers(&[(1, 0), (2, 1), (3, 2)])));
    assert!(!has_full_coverage(&catalog, &answers(&[(1, 0), (2, 1)])));
    assert!(!has_full_coverage(&catalog, &answers(&[])));
}

#[test]
fn test_full_coverage_tolerates_stale_answers() {
    let catalog = Catalog::new(vec![1, 2]);

    // Answer for question 7 is left over from a previous catalog
    assert!(has_full_coverage(&catalog, &answers(&[(1, 0), (2, 1), (7, 3)])));
}

#[test]
fn test_empty_catalog_admits_nobody() {
    let catalog = Catalog::new(vec![]);

    assert!(!has_full_coverage(&catalog, &answers(&[])));
    assert!(!has_full_coverage(&catalog, &answers(&[(1, 0)])));
}

#[test]
fn test_question_construction() {
    let question = Question::new(1, "Pick one", &["a", "b", "c"]);

    assert_eq!(question.id, 1);
    assert_eq!(question.options.len(), 3);
    assert_eq!(question.options[2], "c");
}

#[test]
fn test_catalog_basics() {
    let catalog = Catalog::new(vec![3, 5, 8]);

    assert_eq!(catalog.total_questions(), 3);
    assert!(!catalog.is_empty());
    assert!(Catalog::new(vec![]).is_empty());
}
