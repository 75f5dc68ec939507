use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_ini::{from_str, to_json_string, to_string, Document, Entry, Section, Value};

fn build_document(sections: usize, entries: usize) -> Document {
    let mut doc = Document::new();
    for s in 0..sections {
        let mut section = Section::new(format!("Section{}", s));
        for e in 0..entries {
            let value = match e % 4 {
                0 => Value::from(format!("text value {}", e)),
                1 => Value::Char('x'),
                2 => Value::Int32(e as i32 * 7),
                _ => Value::Float64(e as f64 / 3.0),
            };
            section
                .push(Entry::new(format!("Key{}", e), value))
                .unwrap();
        }
        doc.push(section).unwrap();
    }
    doc
}

fn benchmark_render_simple(c: &mut Criterion) {
    let doc = build_document(1, 3);

    c.bench_function("render_simple_document", |b| {
        b.iter(|| to_string(black_box(&doc)))
    });
}

fn benchmark_parse_simple(c: &mut Criterion) {
    let text = "[User]\nName = \"Ann\"\nAge = 30\nInitial = 'A'";

    c.bench_function("parse_simple_document", |b| {
        b.iter(|| from_str(black_box(text)))
    });
}

fn benchmark_render_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_document");

    for size in [10, 50, 100, 500].iter() {
        let doc = build_document(*size / 10, 10);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| to_string(black_box(doc)))
        });
    }

    group.finish();
}

fn benchmark_parse_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    for size in [10, 50, 100, 500].iter() {
        let text = to_string(&build_document(*size / 10, 10));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }

    group.finish();
}

fn benchmark_value_inference(c: &mut Criterion) {
    let mut group = c.benchmark_group("infer_value");

    for literal in ["\"some text\"", "'c'", "12345", "9000000000", "3.14159"].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(literal), literal, |b, literal| {
            b.iter(|| Value::infer(black_box(literal)))
        });
    }

    group.finish();
}

fn benchmark_lookup(c: &mut Criterion) {
    let doc = build_document(50, 20);

    c.bench_function("lookup_by_name", |b| {
        b.iter(|| doc.value(black_box("Section49"), black_box("Key19")))
    });
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let doc = build_document(10, 10);
    let mut group = c.benchmark_group("comparison");

    group.bench_function("ini_render", |b| b.iter(|| to_string(black_box(&doc))));

    group.bench_function("json_export", |b| {
        b.iter(|| to_json_string(black_box(&doc)))
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let doc = build_document(5, 10);

    c.bench_function("roundtrip_document", |b| {
        b.iter(|| {
            let rendered = to_string(black_box(&doc));
            let _parsed = from_str(black_box(&rendered)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_render_simple,
    benchmark_parse_simple,
    benchmark_render_sizes,
    benchmark_parse_sizes,
    benchmark_value_inference,
    benchmark_lookup,
    benchmark_comparison_with_json,
    benchmark_roundtrip
);
criterion_main!(benches);
