//! Reinterpretation benchmarks.
//!
//! Covers the scanning front ends (`strtol`, `strtof`), `%f` rendering, and the
//! full text-to-text path through `Reinterpreter`.

use criterion::{Criterion, criterion_group, criterion_main};
use fipun_core::stdio::{FixedSpec, sprintf_f32};
use fipun_core::stdlib::{strtof, strtol};
use fipun_core::{FloatStyle, ParseMode, Reinterpreter};

fn bench_scanning(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    group.bench_function("strtol_decimal", |b| {
        b.iter(|| strtol(criterion::black_box(b"1065353216"), 10));
    });
    group.bench_function("strtof_decimal", |b| {
        b.iter(|| strtof(criterion::black_box(b"0.9")));
    });
    group.bench_function("strtof_long_mantissa", |b| {
        b.iter(|| strtof(criterion::black_box(b"1.00000005960464477550")));
    });
    group.bench_function("strtof_hex", |b| {
        b.iter(|| strtof(criterion::black_box(b"0x1.fffffep+127")));
    });
    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let raw = FixedSpec::printf_default();
    let trimmed = FixedSpec::trimmed();
    let mut group = c.benchmark_group("render");
    group.bench_function("fixed_one", |b| {
        b.iter(|| sprintf_f32(criterion::black_box(1.0), &raw));
    });
    group.bench_function("fixed_max", |b| {
        b.iter(|| sprintf_f32(criterion::black_box(f32::MAX), &raw));
    });
    group.bench_function("trimmed_tiny", |b| {
        b.iter(|| sprintf_f32(criterion::black_box(f32::from_bits(1)), &trimmed));
    });
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let lenient = Reinterpreter::new(ParseMode::Lenient);
    let strict = Reinterpreter::new(ParseMode::Strict);
    c.bench_function("int_to_float_lenient", |b| {
        b.iter(|| lenient.int_to_float(criterion::black_box("1065353216"), FloatStyle::Trimmed));
    });
    c.bench_function("float_to_int_strict", |b| {
        b.iter(|| strict.float_to_int(criterion::black_box("0.9")));
    });
}

criterion_group!(benches, bench_scanning, bench_rendering, bench_end_to_end);
criterion_main!(benches);
