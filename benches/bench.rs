// Criterion benchmarks for Mixer Match

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use mixer_match::core::{Matcher, explain_matches, fuzzy_jaccard_similarity};
use mixer_match::models::{ExperienceLevel, MatchableProfile};

const KEYWORDS: &[&str] = &[
    "fundraising", "hiring", "product", "design", "sales", "marketing", "ai",
    "machine learning", "climate", "fintech", "health", "cofounder", "advisors",
    "engineering", "growth", "pricing", "partnerships", "legal", "ops", "data",
];

const LEVELS: &[ExperienceLevel] = &[
    ExperienceLevel::Early,
    ExperienceLevel::Mid,
    ExperienceLevel::Senior,
    ExperienceLevel::Executive,
    ExperienceLevel::Founder,
];

fn pick(id: usize, offset: usize, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| KEYWORDS[(id * 7 + offset + i * 3) % KEYWORDS.len()].to_string())
        .collect()
}

fn create_attendee(id: usize) -> MatchableProfile {
    MatchableProfile {
        id: format!("attendee-{:04}", id),
        seeking_keywords: pick(id, 0, 3),
        offering_keywords: pick(id, 5, 2),
        expertise: pick(id, 11, 2),
        topics_of_interest: pick(id, 17, 3),
        experience_level: if id % 6 == 0 { None } else { Some(LEVELS[id % LEVELS.len()]) },
        created_at: None,
    }
}

fn bench_fuzzy_jaccard(c: &mut Criterion) {
    let a = pick(1, 0, 5);
    let b = pick(2, 3, 5);

    c.bench_function("fuzzy_jaccard_similarity", |bench| {
        bench.iter(|| fuzzy_jaccard_similarity(black_box(&a), black_box(&b)));
    });
}

fn bench_generate_event_matches(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();

    let mut group = c.benchmark_group("generate_event_matches");

    for attendee_count in [10, 50, 100, 250].iter() {
        let attendees: Vec<MatchableProfile> = (0..*attendee_count).map(create_attendee).collect();

        group.bench_with_input(
            BenchmarkId::new("top_5", attendee_count),
            attendee_count,
            |b, _| {
                b.iter(|| matcher.generate_event_matches(black_box(&attendees), black_box(5)));
            },
        );
    }

    group.finish();
}

fn bench_explain_matches(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let attendees: Vec<MatchableProfile> = (0..100).map(create_attendee).collect();
    let matches = matcher.generate_event_matches(&attendees, 5);

    c.bench_function("explain_matches_100_attendees", |b| {
        b.iter(|| explain_matches(black_box(matches.clone()), black_box(&attendees)));
    });
}

criterion_group!(
    benches,
    bench_fuzzy_jaccard,
    bench_generate_event_matches,
    bench_explain_matches
);

criterion_main!(benches);
