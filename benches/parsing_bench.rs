use criterion::{black_box, criterion_group, criterion_main, Criterion};

use numplan::PHONE_NUMBER_UTIL;

/// A mix of national, international, vanity and carrier-dialled inputs,
/// so the benchmark covers the interesting parsing paths rather than a
/// single happy one.
fn setup_parsing_data() -> Vec<(&'static str, &'static str)> {
    vec![
        ("(650) 253-0000", "US"),
        ("+44 20 7946 0958", "GB"),
        ("020 7946 0958", "GB"),
        ("00 1 650 253 0000", "GB"),
        ("0111523456789", "AR"),
        ("02 3661 8300", "IT"),
        ("1800 six-flag", "US"),
        ("03 331 6005 ext 3456", "NZ"),
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let numbers_to_parse = setup_parsing_data();

    let mut group = c.benchmark_group("Parsing");

    group.bench_function("parse()", |b| {
        b.iter(|| {
            for (number, region) in &numbers_to_parse {
                let _ = PHONE_NUMBER_UTIL.parse(black_box(number), black_box(region));
            }
        })
    });

    group.bench_function("parse_and_keep_raw_input()", |b| {
        b.iter(|| {
            for (number, region) in &numbers_to_parse {
                let _ = PHONE_NUMBER_UTIL
                    .parse_and_keep_raw_input(black_box(number), black_box(region));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
