// Criterion benchmarks for the matching engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use survey_match::core::{agreement_count, Matcher};
use survey_match::models::{AnswerSet, Catalog, ParticipantAnswers};

const QUESTION_COUNT: i64 = 10;

fn create_participant(id: usize) -> ParticipantAnswers {
    // Deterministic but varied answer pattern
    let answers: AnswerSet = (1..=QUESTION_COUNT)
        .map(|q| (q, ((id as i64 * 7 + q * 3) % 5) as i32))
        .collect();

    ParticipantAnswers {
        name: format!("participant{:04}", id),
        answers,
    }
}

fn create_population(count: usize) -> Vec<ParticipantAnswers> {
    (0..count).map(create_participant).collect()
}

fn bench_agreement_count(c: &mut Criterion) {
    let catalog = Catalog::new((1..=QUESTION_COUNT).collect());
    let a = create_participant(1);
    let b = create_participant(2);

    c.bench_function("agreement_count", |bench| {
        bench.iter(|| {
            agreement_count(
                black_box(&catalog),
                black_box(&a.answers),
                black_box(&b.answers),
            )
        });
    });
}

fn bench_ranked_matches(c: &mut Criterion) {
    let matcher = Matcher::with_default_limit();
    let catalog = Catalog::new((1..=QUESTION_COUNT).collect());

    let mut group = c.benchmark_group("ranked_matches");

    for population_count in [10, 50, 100, 500, 1000].iter() {
        let population = create_population(*population_count);
        let subject = population[0].name.clone();

        group.bench_with_input(
            BenchmarkId::new("population", population_count),
            population_count,
            |bench, _| {
                bench.iter(|| {
                    matcher.ranked_matches(
                        black_box(&subject),
                        black_box(&catalog),
                        black_box(&population),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_all_matches(c: &mut Criterion) {
    let matcher = Matcher::with_default_limit();
    let catalog = Catalog::new((1..=QUESTION_COUNT).collect());

    let mut group = c.benchmark_group("all_matches");

    // Quadratic in population size; keep inputs modest
    for population_count in [10, 50, 100, 200].iter() {
        let population = create_population(*population_count);

        group.bench_with_input(
            BenchmarkId::new("population", population_count),
            population_count,
            |bench, _| {
                bench.iter(|| matcher.all_matches(black_box(&catalog), black_box(&population)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_agreement_count,
    bench_ranked_matches,
    bench_all_matches
);

criterion_main!(benches);
