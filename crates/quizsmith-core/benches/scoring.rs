use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizsmith_core::model::{Answer, Question};
use quizsmith_core::session::QuizSession;

fn questions(n: usize) -> Vec<Question> {
    (0..n)
        .map(|i| {
            Question::new(
                format!("Statement {i} holds under the stated conditions"),
                if i % 2 == 0 { Answer::True } else { Answer::False },
            )
        })
        .collect()
}

fn play(questions: Vec<Question>) -> i32 {
    let mut session = QuizSession::new();
    let n = questions.len();
    session.load(questions);
    for i in 0..n {
        // Answer two thirds, alternating right and wrong; skip the rest.
        let choice = match i % 3 {
            0 => Some(Answer::True),
            1 => Some(Answer::True),
            _ => None,
        };
        session.advance(choice);
    }
    session.results().map(|r| r.score).unwrap_or(0)
}

fn bench_session_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_scoring");

    for &n in &[10usize, 100, 1000] {
        group.bench_function(format!("{n}_questions"), |b| {
            b.iter(|| play(black_box(questions(n))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_session_scoring);
criterion_main!(benches);
