use criterion::{black_box, criterion_group, criterion_main, Criterion};

use numplan::{PhoneNumber, PhoneNumberFormat, PHONE_NUMBER_UTIL};

fn setup_numbers() -> Vec<PhoneNumber> {
    [
        ("(650) 253-0000", "US"),
        ("+44 20 7946 0958", "GB"),
        ("0111523456789", "AR"),
        ("02 3661 8300", "IT"),
        ("8 (495) 123-45-67", "RU"),
        ("03 331 6005 ext 3456", "NZ"),
    ]
    .iter()
    .map(|(number, region)| PHONE_NUMBER_UTIL.parse(number, region).unwrap())
    .collect()
}

fn formatting_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();

    let mut group = c.benchmark_group("Formatting");

    for format in [
        PhoneNumberFormat::E164,
        PhoneNumberFormat::International,
        PhoneNumberFormat::National,
        PhoneNumberFormat::RFC3966,
    ] {
        group.bench_function(format!("format({format:?})"), |b| {
            b.iter(|| {
                for number in &numbers {
                    PHONE_NUMBER_UTIL.format(black_box(number), black_box(format));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
