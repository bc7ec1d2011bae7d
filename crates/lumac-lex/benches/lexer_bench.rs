//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package lumac-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lumac_lex::{tokenize, LexOptions};

fn token_count(source: &str) -> usize {
    tokenize(source, LexOptions::default(), None)
        .expect("benchmark source must lex cleanly")
        .len()
}

fn bench_lexer_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "x = 42\nsquare = (n) -> n * n\nsquare(x)";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_assignment", |b| {
        b.iter(|| token_count(black_box("x = 42")))
    });

    group.bench_function("function_with_call", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
class Animal
  constructor: (@name) ->

  speak: ->
    "#{@name} makes a sound"

class Dog extends Animal
  speak: ->
    "#{@name} barks"

for own name, value of {a: 1, b: 2}
  if value > 1
    console.log "#{name}: #{value}"
  else
    console.log name

square = (x) -> x * x
result = square(5) + square(10)
"#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("class_and_loop", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("plain_string", |b| {
        b.iter(|| token_count(black_box(r#"s = "hello world""#)))
    });

    group.bench_function("interpolated_string", |b| {
        b.iter(|| token_count(black_box(r#"s = "hello #{name}, you are #{age} years old""#)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| b.iter(|| token_count(black_box("x = 123456"))));
    group.bench_function("float", |b| b.iter(|| token_count(black_box("x = 3.14159"))));
    group.bench_function("hex", |b| b.iter(|| token_count(black_box("x = 0xDEADBEEF"))));

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("short_ident", |b| b.iter(|| token_count(black_box("x = 42"))));

    group.bench_function("long_ident", |b| {
        b.iter(|| token_count(black_box("very_long_variable_name = 42")))
    });

    group.bench_function("many_idents", |b| {
        b.iter(|| token_count(black_box("a = 1\nb = 2\nc = 3\nd = 4\ne = 5")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_keywords,
    bench_lexer_complex,
    bench_lexer_strings,
    bench_lexer_numbers,
    bench_lexer_identifiers
);
criterion_main!(benches);
