use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizsmith_core::filter::filter_relevant_content;
use quizsmith_core::parser::parse_questions;

fn generate_response(n: usize, noise_every: usize) -> String {
    let mut s = String::new();
    for i in 1..=n {
        if noise_every > 0 && i % noise_every == 0 {
            s.push_str("Some commentary the model added between questions.\n");
        }
        s.push_str(&format!(
            "{i}. The described process reaches equilibrium after stage {i} - {}\n",
            if i % 2 == 0 { "False" } else { "True" }
        ));
    }
    s
}

fn bench_parse_questions(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_questions");

    let clean_10 = generate_response(10, 0);
    let clean_100 = generate_response(100, 0);
    let noisy_100 = generate_response(100, 3);

    group.bench_function("10_clean_lines", |b| {
        b.iter(|| parse_questions(black_box(&clean_10)))
    });
    group.bench_function("100_clean_lines", |b| {
        b.iter(|| parse_questions(black_box(&clean_100)))
    });
    group.bench_function("100_noisy_lines", |b| {
        b.iter(|| parse_questions(black_box(&noisy_100)))
    });

    group.finish();
}

fn bench_content_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("content_filter");

    let mut page = String::new();
    for i in 0..500 {
        page.push_str(&format!("Page {i}\n"));
        page.push_str("A long paragraph line that easily clears the retention threshold.\n");
    }

    group.bench_function("500_line_pairs", |b| {
        b.iter(|| filter_relevant_content(black_box(&page)))
    });

    group.finish();
}

criterion_group!(benches, bench_parse_questions, bench_content_filter);
criterion_main!(benches);
