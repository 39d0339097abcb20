use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tsheet_diff::{Comparator, NormalizationPolicy};
use tsheet_types::FieldSet;

fn term_sheet(fields: usize, salt: &str) -> FieldSet {
    FieldSet::from_pairs((0..fields).map(|i| {
        let value = if i % 5 == 0 {
            format!("Value {i} {salt}")
        } else {
            format!("  VALUE   {i} ")
        };
        (format!("field_{i:03}"), Some(value))
    }))
    .expect("generated keys are unique")
}

fn bench_compare(c: &mut Criterion) {
    let ideal = term_sheet(40, "ideal");
    let input = term_sheet(48, "input");

    let default = Comparator::default();
    c.bench_function("compare_40x48_default", |b| {
        b.iter(|| default.compare_sets(black_box(&ideal), black_box(&input)))
    });

    let strict = Comparator::new(NormalizationPolicy::strict());
    c.bench_function("compare_40x48_strict", |b| {
        b.iter(|| strict.compare_sets(black_box(&ideal), black_box(&input)))
    });
}

criterion_group!(benches, bench_compare);
criterion_main!(benches);
