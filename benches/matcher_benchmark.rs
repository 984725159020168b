use std::{fs, sync::LazyLock, time::Duration};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tagged_fsm::{ExactTokenMatcher, Labels, MachineDescription, StateMachine};

const MATCHER_INPUT: &str = include_str!("../tests/data/expression.input");

static DESCRIPTION: LazyLock<MachineDescription<char, String, String>> = LazyLock::new(|| {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/expression.json");
    let file = fs::File::open(path).unwrap();
    MachineDescription::from_reader(file).unwrap()
});

static MACHINE: LazyLock<StateMachine<char, String, String>> =
    LazyLock::new(|| DESCRIPTION.clone().build());

static INPUT: LazyLock<Vec<char>> = LazyLock::new(|| MATCHER_INPUT.repeat(500).chars().collect());

// Every 'a' offers two identical continuations and the input ends with a token nothing accepts.
static BACKTRACKING_MACHINE: LazyLock<StateMachine<char, u8, bool>> = LazyLock::new(|| {
    StateMachine::builder(0, false)
        .add_matcher(0, ExactTokenMatcher::new('a', Labels::uniform(false)), [0, 0])
        .add_matcher(0, ExactTokenMatcher::new('b', Labels::uniform(false)), [1])
        .add_accepting_state(1, true)
        .build()
});

static BACKTRACKING_INPUT: LazyLock<Vec<char>> = LazyLock::new(|| {
    let mut input = vec!['a'; 10_000];
    input.push('c');
    input
});

fn builder_benchmark(c: &mut Criterion) {
    c.bench_function("builder_benchmark", |b| {
        b.iter(|| {
            black_box(DESCRIPTION.clone().build());
        });
    });
}

fn find_iter_benchmark(c: &mut Criterion) {
    c.bench_function("find_iter_benchmark", |b| {
        b.iter(|| {
            // Create a matches iterator
            let find_iter = MACHINE.find_iter(&INPUT);
            // Collect all matches
            for t in find_iter {
                black_box(t);
            }
        });
    });
}

fn backtracking_benchmark(c: &mut Criterion) {
    c.bench_function("backtracking_benchmark", |b| {
        b.iter(|| {
            black_box(BACKTRACKING_MACHINE.match_tokens(&BACKTRACKING_INPUT));
        });
    });
}

criterion_group! {
    name = benchesmatcher;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = find_iter_benchmark, backtracking_benchmark
}

criterion_group! {
    name = benchesbuilder;
    config = Criterion::default();
    targets = builder_benchmark
}

criterion_main!(benchesmatcher, benchesbuilder);
