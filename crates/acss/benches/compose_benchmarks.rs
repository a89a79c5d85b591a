use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use acss::modifiers::{media, pseudo};
use acss::utilities::{bg, flex, gap, p, rounded, text};
use acss::{Rule, Session, SessionConfig, css, generate_hash, when};

fn card() -> Vec<Rule> {
    vec![
        flex(),
        gap(4),
        p(6),
        rounded("lg"),
        bg("white"),
        text("sm"),
        when([pseudo::HOVER]).apply(&[bg("gray-50")]),
        when([media::MD]).apply(&[p(8)]),
    ]
}

fn bench_generate_hash(c: &mut Criterion) {
    let rule = when([media::MD, pseudo::HOVER]).apply(&[bg("blue-500"), p(4)]);
    c.bench_function("generate_hash", |b| {
        b.iter(|| generate_hash(black_box(&rule), black_box(42)))
    });
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    // Fresh rules every call: nothing is cached.
    for count in [8usize, 64, 512] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("unique", count), &count, |b, &count| {
            b.iter(|| {
                let mut session = Session::with_config(SessionConfig {
                    reuse_compositions: false,
                    ..SessionConfig::default()
                });
                let rules: Vec<Rule> = (0..count)
                    .map(|i| css([("margin", format!("{}px", i))]).wrap_with_selector(":hover"))
                    .collect();
                session.cx(black_box(rules))
            })
        });
    }

    let mut session = Session::new();
    session.cx(card());
    group.bench_function("repeat_card", |b| b.iter(|| session.cx(black_box(card()))));

    group.finish();
}

fn bench_generate_css(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_css");

    for cards in [1usize, 10, 100] {
        let mut session = Session::with_config(SessionConfig {
            reuse_compositions: false,
            ..SessionConfig::default()
        });
        for _ in 0..cards {
            session.cx(card());
        }
        group.throughput(Throughput::Elements(session.registry().len() as u64));
        group.bench_with_input(BenchmarkId::new("cards", cards), &session, |b, session| {
            b.iter(|| session.generate_css())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_hash, bench_compose, bench_generate_css);
criterion_main!(benches);
