// Criterion benchmarks for Resumatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use resumatch::core::{match_flow, normalize_experience, FlowMatcher};
use resumatch::models::{Candidate, FlowDefinition, StructuredResume};
use serde_json::json;

const SKILL_POOL: [&str; 6] = ["Python", "SQL", "AWS", "Rust", "Go", "Kubernetes"];

fn create_candidate(id: usize) -> Candidate<usize> {
    let skills: Vec<&str> = SKILL_POOL
        .iter()
        .enumerate()
        .filter(|(i, _)| (id + i) % 2 == 0)
        .map(|(_, s)| *s)
        .collect();

    let education = if id % 3 == 0 { "B.Sc in Computer Science" } else { "BA in History" };

    let data = json!({
        "name": format!("Candidate {}", id),
        "skills": skills,
        "total_experience": format!("{} years {} months", id % 8, id % 12),
        "education": education,
    });

    Candidate::new(id, Some(StructuredResume::from(data)))
}

fn create_flow() -> FlowDefinition {
    FlowDefinition {
        required_skills: vec!["python".to_string(), "sql".to_string()],
        min_experience_months: 12,
        education_keywords: vec!["computer science".to_string(), "engineering".to_string()],
    }
}

fn bench_normalize_experience(c: &mut Criterion) {
    c.bench_function("normalize_experience", |b| {
        b.iter(|| normalize_experience(black_box("Total: 4 years and 7 months of experience")));
    });
}

fn bench_check_single(c: &mut Criterion) {
    let matcher = FlowMatcher::new(&create_flow());
    let candidate = create_candidate(6);
    let resume = candidate.data.unwrap_or_default();

    c.bench_function("flow_check_single", |b| {
        b.iter(|| matcher.check(black_box(&resume)));
    });
}

fn bench_match_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_flow");
    let flow = create_flow();

    for size in [100usize, 1_000, 10_000].iter() {
        let candidates: Vec<Candidate<usize>> = (0..*size).map(create_candidate).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| match_flow(black_box(&flow), black_box(&candidates)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize_experience,
    bench_check_single,
    bench_match_flow
);
criterion_main!(benches);
