use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use spanfix::{build, generate, locate, normalize, Category, RuleSet, SubstringCorrection};

const TEST_SIZES: &[(usize, &str)] = &[
    (100, "small"),
    (1000, "medium"),
    (10000, "large"),
];

fn generate_test_text(sentence_count: usize) -> String {
    let base_sentences = [
        "안녕 하세오.",
        "오늘 날씨가좋습니다.",
        "내일은 비가 온대요.",
        "우산을 챙기세요.",
        "날씨가 좋습니다.",
    ];

    let mut text = String::new();
    for idx in 0..sentence_count {
        text.push_str(base_sentences[idx % base_sentences.len()]);
        text.push(' ');
    }
    text
}

fn bench_rule_pipeline(c: &mut Criterion) {
    let rules = RuleSet::builtin().unwrap();

    for &(size, size_name) in TEST_SIZES {
        let text = generate_test_text(size);

        let mut group = c.benchmark_group(format!("rule_pipeline_{}", size_name));
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_function("generate", |b| {
            b.iter(|| generate(black_box(&text), &rules))
        });

        let generated = generate(&text, &rules);
        group.bench_function("normalize_and_build", |b| {
            b.iter(|| {
                let accepted = normalize(black_box(&text), &generated.spans);
                black_box(build(&text, &accepted).len());
            })
        });

        group.finish();
    }
}

fn bench_substring_locator(c: &mut Criterion) {
    let entries = vec![
        SubstringCorrection::new("하세오", "하세요", Category::Spelling),
        SubstringCorrection::new("날씨가좋습니다", "날씨가 좋습니다", Category::Spacing),
        SubstringCorrection::new("온대요", "온다고 해요", Category::Recommendation),
    ];

    let mut group = c.benchmark_group("substring_locator");
    for &(size, size_name) in TEST_SIZES {
        let text = generate_test_text(size);
        group.bench_function(size_name, |b| {
            b.iter(|| locate(black_box(&text), &entries).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rule_pipeline, bench_substring_locator);
criterion_main!(benches);
