use criterion::{black_box, criterion_group, criterion_main, Criterion};

use flash_cards::layout::LayoutMetrics;
use flash_cards::problem::{Configuration, Operator, ProblemGenerator};

fn benchmark_generate(c: &mut Criterion) {
    for op in Operator::ALL {
        let config = Configuration::configure(0, 12, 0, 12, op);
        let mut generator = ProblemGenerator::seeded(1);
        c.bench_function(&format!("generate_{}", op.name().to_lowercase()), |b| {
            b.iter(|| black_box(generator.generate(black_box(&config))))
        });
    }
}

fn benchmark_answer_text(c: &mut Criterion) {
    c.bench_function("answer_text_large_operands", |b| {
        let config = Configuration::configure(0, 999_999, 0, 999_999, Operator::Multiply);
        let problem = ProblemGenerator::seeded(2).generate(&config);
        b.iter(|| black_box(problem.answer_text()))
    });
}

fn benchmark_fit(c: &mut Criterion) {
    c.bench_function("fit_font_size", |b| {
        let metrics = LayoutMetrics::new(19.3, 11);
        b.iter(|| black_box(metrics.fit_font_size(black_box(1917.0), black_box(1033.0))))
    });
}

criterion_group!(benches, benchmark_generate, benchmark_answer_text, benchmark_fit);
criterion_main!(benches);
