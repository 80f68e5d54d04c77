use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nomina::analysis::normalizer::Normalizer;
use nomina::analysis::policy::NameKind;
use nomina::batch::{NameRecord, training_pairs};
use nomina::pairing::match_name_pairs;
use nomina::similarity::similarity;

const RAW_NAMES: &[(&str, &str)] = &[
    ("John Paul Smith", "Jan Pavel Smythe"),
    ("Quitéria Da Conceição", "Quiteria da Conceicao"),
    ("de Ochoa de Gutierrez", "Ochoa y Gutierres"),
    ("Василий Смирнов", "Vasily Smirnoff"),
    ("Sir Jones King", "Jones"),
    ("Mary Ann St John", "Marianne Saint John"),
];

fn generate_records(count: usize) -> Vec<NameRecord> {
    (0..count)
        .map(|i| {
            let (name, alt_name) = RAW_NAMES[i % RAW_NAMES.len()];
            NameRecord::new(name, alt_name, (i % 7 + 1) as u64)
        })
        .collect()
}

fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");

    for (a, b) in [("smith", "smyth"), ("gutierrez", "gutierres"), ("daconceicao", "conceicao")] {
        group.bench_function(format!("{a}_{b}"), |bencher| {
            bencher.iter(|| black_box(similarity(black_box(a), black_box(b))))
        });
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let normalizer = Normalizer::with_defaults().unwrap();
    let mut group = c.benchmark_group("normalize");

    for kind in [NameKind::GivenName, NameKind::Surname] {
        group.bench_function(kind.to_string(), |b| {
            b.iter(|| {
                for (name, _) in RAW_NAMES {
                    let _ = black_box(normalizer.normalize(black_box(name), kind, false));
                }
            })
        });
    }

    group.finish();
}

fn bench_pairing(c: &mut Criterion) {
    let normalizer = Normalizer::with_defaults().unwrap();
    let pieces: Vec<(Vec<String>, Vec<String>)> = RAW_NAMES
        .iter()
        .map(|(name, alt)| (normalizer.normalize_field(name, false), normalizer.normalize_field(alt, false)))
        .collect();

    c.bench_function("match_name_pairs", |b| {
        b.iter(|| {
            for (name, alt) in &pieces {
                let _ = black_box(match_name_pairs(black_box(name), black_box(alt)));
            }
        })
    });

    let records = generate_records(10_000);
    c.bench_function("training_pairs_10k", |b| {
        b.iter(|| black_box(training_pairs(&normalizer, black_box(&records), NameKind::Surname)))
    });
}

criterion_group!(benches, bench_similarity, bench_normalize, bench_pairing);
criterion_main!(benches);
