use criterion::{Criterion, black_box, criterion_group, criterion_main};

use tanager::eval::FMeasure;
use tanager::ngram::language_model::NGramLanguageModel;
use tanager::ngram::sequence::TokenSequence;
use tanager::span::Span;

fn corpus() -> Vec<TokenSequence> {
    let vocabulary = [
        "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "a", "and",
    ];
    (0..200)
        .map(|i| {
            TokenSequence::new((0..12).map(|j| vocabulary[(i * 7 + j * 3) % vocabulary.len()]))
        })
        .collect()
}

fn bench_language_model(c: &mut Criterion) {
    let corpus = corpus();

    c.bench_function("ngram_model_add", |b| {
        b.iter(|| {
            let mut model = NGramLanguageModel::new(3).unwrap();
            for sentence in &corpus {
                model.add(black_box(sentence), 1, 3).unwrap();
            }
            model
        })
    });

    let mut model = NGramLanguageModel::new(3).unwrap();
    for sentence in &corpus {
        model.add(sentence, 1, 3).unwrap();
    }

    c.bench_function("calculate_probability", |b| {
        b.iter(|| {
            for sentence in &corpus {
                black_box(model.calculate_probability(black_box(sentence)));
            }
        })
    });

    c.bench_function("predict_next_tokens", |b| {
        let context = TokenSequence::new(["the", "quick"]);
        b.iter(|| black_box(model.predict_next_tokens(black_box(&context))))
    });
}

fn bench_fmeasure(c: &mut Criterion) {
    let references: Vec<Span> = (0..50).map(|i| Span::new(i * 3, i * 3 + 2).unwrap()).collect();
    let predictions: Vec<Span> = (0..50)
        .map(|i| Span::new(i * 3, i * 3 + 1 + (i % 2)).unwrap())
        .collect();

    c.bench_function("fmeasure_update_scores", |b| {
        b.iter(|| {
            let mut fmeasure = FMeasure::new();
            fmeasure.update_scores(black_box(&references), black_box(&predictions));
            fmeasure.value()
        })
    });
}

criterion_group!(benches, bench_language_model, bench_fmeasure);
criterion_main!(benches);
