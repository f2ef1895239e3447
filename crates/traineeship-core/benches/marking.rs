use criterion::{black_box, criterion_group, criterion_main, Criterion};

use traineeship_core::model::{Question, Quiz};
use traineeship_core::Marking;

fn make_quiz(total: usize, correct: usize) -> Quiz {
    let questions = (0..total)
        .map(|i| {
            let chosen = if i < correct { "A" } else { "B" };
            Question::new(format!("Question {i}"), chosen, "A")
        })
        .collect();
    Quiz::new("Bench Quiz", "multiple-choice", questions)
}

fn bench_mark(c: &mut Criterion) {
    let mut group = c.benchmark_group("mark");

    for (total, correct) in [(5, 3), (100, 37), (10_000, 4_999)] {
        let quiz = make_quiz(total, correct);
        group.bench_function(format!("n={total},c={correct}"), |b| {
            b.iter(|| Marking::new(black_box(&quiz)).mark())
        });
    }

    group.finish();
}

fn bench_generate_assessment(c: &mut Criterion) {
    let quiz = make_quiz(100, 67);
    c.bench_function("generate_assessment", |b| {
        b.iter(|| Marking::new(black_box(&quiz)).generate_assessment())
    });
}

criterion_group!(benches, bench_mark, bench_generate_assessment);
criterion_main!(benches);
