use bidec::{Decimal128, Decimal32, Decimal64, Format};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{thread_rng, Rng};

macro_rules! bench_type {
    ($c:expr, $name:literal, $ty:ty, $bits:ty) => {{
        let mut group = $c.benchmark_group($name);

        let values: Vec<$ty> = {
            let mut rng = thread_rng();
            let mut out = Vec::with_capacity(1024);
            while out.len() < 1024 {
                let d = <$ty>::from_bits(rng.gen::<$bits>());
                if d.is_finite() {
                    out.push(d);
                }
            }
            out
        };

        let strings: Vec<String> = values.iter().map(|d| d.to_string()).collect();

        group.bench_function("to_chars/shortest", |b| {
            let mut buf = [0u8; 64];
            let mut i = 0;
            b.iter(|| {
                let d = values[i % values.len()];
                let _ = black_box(black_box(d).to_chars(&mut buf));
                i = i.wrapping_add(1);
            })
        });

        group.bench_function("to_chars/scientific6", |b| {
            let mut buf = [0u8; 64];
            let mut i = 0;
            b.iter(|| {
                let d = values[i % values.len()];
                let _ = black_box(black_box(d).to_chars_prec(
                    &mut buf,
                    Format::Scientific,
                    6,
                ));
                i = i.wrapping_add(1);
            })
        });

        group.bench_function("from_chars", |b| {
            let mut i = 0;
            b.iter(|| {
                let s = &strings[i % strings.len()];
                let _ = black_box(<$ty>::from_chars_general(black_box(s.as_bytes())));
                i = i.wrapping_add(1);
            })
        });

        group.bench_function("frexp10", |b| {
            let mut i = 0;
            b.iter(|| {
                let d = values[i % values.len()];
                let _ = black_box(black_box(d).frexp10());
                i = i.wrapping_add(1);
            })
        });

        group.finish();
    }};
}

fn bench_d32(c: &mut Criterion) {
    bench_type!(c, "d32", Decimal32, u32);
}

fn bench_d64(c: &mut Criterion) {
    bench_type!(c, "d64", Decimal64, u64);
}

fn bench_d128(c: &mut Criterion) {
    bench_type!(c, "d128", Decimal128, u128);
}

criterion_group!(benches, bench_d32, bench_d64, bench_d128);
criterion_main!(benches);
