use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use telex::{Engine, Mode};
use vi::methods::transform_buffer as vi_transform_buffer;

const CASES: &[(&str, &str)] = &[
    ("simple", "phoos"),
    ("sentence", "Tooi ddang gox Tieengs Vieejt "),
    ("mixed", "clear free pro "),
    ("uow", "huows"),
    ("cluster", "nghees"),
    ("ui", "guiwr tuis"),
];

fn type_seq(engine: &mut Engine, seq: &str) {
    engine.reset();
    for c in seq.chars() {
        black_box(engine.feed(c));
    }
}

fn type_seq_vi(def: &vi::Definition, out: &mut String, seq: &str) {
    out.clear();
    vi_transform_buffer(def, seq.chars(), out);
    black_box(&out);
}

fn bench_telex(c: &mut Criterion) {
    let mut group = c.benchmark_group("telex");

    for (name, seq) in CASES {
        group.bench_with_input(BenchmarkId::from_parameter(*name), seq, |b, input| {
            let mut e = Engine::new();
            b.iter(|| {
                type_seq(&mut e, input);
            })
        });
    }

    group.finish();
}

fn bench_process_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_string");

    for (name, seq) in CASES {
        group.bench_with_input(BenchmarkId::from_parameter(*name), seq, |b, input| {
            let mut e = Engine::new();
            b.iter(|| {
                e.process_string(input, Mode::FULL_TEXT);
                black_box(e.processed_string());
            })
        });
    }

    group.finish();
}

fn bench_compare_telex(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_telex");

    for (name, seq) in CASES {
        group.bench_with_input(BenchmarkId::new("telex", *name), seq, |b, input| {
            let mut e = Engine::new();
            b.iter(|| {
                type_seq(&mut e, input);
            })
        });

        group.bench_with_input(BenchmarkId::new("vi", *name), seq, |b, input| {
            let mut out = String::new();
            b.iter(|| {
                type_seq_vi(&vi::TELEX, &mut out, input);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_telex, bench_process_string, bench_compare_telex);
criterion_main!(benches);
