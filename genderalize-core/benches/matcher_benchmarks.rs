//! Benchmarks for lexicon matching and classification

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use genderalize_core::{
    analyze, rewrite, FineTag, Gender, GenderMatcher, Lexicon, PosTag, Sentence, Token,
};
use std::hint::black_box;

/// Generate a space separated sentence with the given number of words
fn generate_sentence(num_words: usize) -> Sentence {
    let words = [
        "The", "programmer", "put", "down", "his", "laptop", "and", "she", "thanked", "him",
    ];

    let mut tokens = Vec::with_capacity(num_words);
    let mut offset = 0;
    for (index, word) in words.iter().cycle().take(num_words).enumerate() {
        let tag = match *word {
            "his" => "PRP$",
            "she" | "him" => "PRP",
            _ => "NN",
        };
        let whitespace = if index + 1 < num_words { " " } else { "" };
        tokens.push(Token {
            text: word.to_string(),
            whitespace: whitespace.to_string(),
            index,
            offset,
            pos: if tag.starts_with("PRP") {
                PosTag::Pron
            } else {
                PosTag::Noun
            },
            tag: FineTag::from(tag),
        });
        offset += word.len() + whitespace.len();
    }

    let text = genderalize_core::reconstruct(&tokens);
    Sentence::new(text, tokens, Vec::new())
}

fn benchmark_annotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("annotate");
    let matcher = GenderMatcher::with_whitespace_split(&Lexicon::embedded());

    for size in [10, 100, 1000].iter() {
        let sentence = generate_sentence(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &sentence, |b, s| {
            b.iter(|| {
                let analyzed = analyze(black_box(s.clone()), &matcher);
                black_box(analyzed.is_gender_generalization())
            });
        });
    }

    group.finish();
}

fn benchmark_rewrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("rewrite");
    let matcher = GenderMatcher::with_whitespace_split(&Lexicon::embedded());

    for size in [10, 100, 1000].iter() {
        let analyzed = analyze(generate_sentence(*size), &matcher);

        group.bench_with_input(BenchmarkId::from_parameter(size), &analyzed, |b, a| {
            b.iter(|| rewrite(black_box(a), Gender::Feminine));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_annotate, benchmark_rewrite);
criterion_main!(benches);
