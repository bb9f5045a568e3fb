use criterion::{Criterion, criterion_group, criterion_main};
use fuzzy_local_alignment::{AlignmentConfig, FuzzyMatcherBuilder, Query, local_alignment};
use std::hint::black_box;

fn benchmark_alignment(c: &mut Criterion) {
    let config = AlignmentConfig::product_search();
    let field = "ステンレス 六角ボルト M6×20 SUS304 全ねじ・並目";

    c.bench_function("local_alignment", |b| {
        b.iter(|| {
            let _ = local_alignment(black_box(field), black_box("六角ボルド"), Some(&config));
        });
    });
}

fn benchmark_matcher(c: &mut Criterion) {
    let matcher = FuzzyMatcherBuilder::new()
        .config(AlignmentConfig::product_search())
        .build()
        .unwrap();
    let query = Query::new("ステンレス ボルト M6");
    let fields = [
        "ステンレス六角ボルト",
        "ステンレス 六角ボルト M6×20 SUS304 全ねじ・並目",
        "SB-M6-0020",
        "締結部品",
    ];

    c.bench_function("is_match", |b| {
        b.iter(|| {
            let _ = matcher.is_match(black_box(fields), &query);
        });
    });
}

criterion_group!(benches, benchmark_alignment, benchmark_matcher);
criterion_main!(benches);
