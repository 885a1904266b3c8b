use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use innings_terminal::query::answer;
use innings_terminal::record::parse_batting_csv;
use innings_terminal::stats::{runs_by_opponent, sorted_by_date, summarize, top_group};

static INNINGS_CSV: &str = include_str!("../tests/fixtures/innings.csv");

fn large_csv() -> String {
    let mut csv = String::from("Match_No,runs,opponent,ground,date,match,total\n");
    for i in 0..5_000u32 {
        let day = (i % 27) + 1;
        let year = 2005 + (i % 18);
        csv.push_str(&format!(
            "{},{},Opponent {},Ground {},{day:02}Jan{year},ODI,{}\n",
            i + 1,
            (i * 37) % 184,
            i % 9,
            i % 14,
            150 + (i % 140),
        ));
    }
    csv
}

fn bench_parse_small(c: &mut Criterion) {
    c.bench_function("parse_small", |b| {
        b.iter(|| {
            let records = parse_batting_csv(black_box(INNINGS_CSV));
            black_box(records.len());
        })
    });
}

fn bench_parse_large(c: &mut Criterion) {
    let csv = large_csv();
    c.bench_function("parse_large", |b| {
        b.iter(|| {
            let records = parse_batting_csv(black_box(&csv));
            black_box(records.len());
        })
    });
}

fn bench_summarize(c: &mut Criterion) {
    let records = parse_batting_csv(&large_csv());
    c.bench_function("summarize", |b| {
        b.iter(|| {
            let summary = summarize(black_box(&records));
            black_box(summary.runs);
        })
    });
}

fn bench_group_and_top(c: &mut Criterion) {
    let records = parse_batting_csv(&large_csv());
    c.bench_function("group_and_top", |b| {
        b.iter(|| {
            let groups = runs_by_opponent(black_box(&records));
            black_box(top_group(&groups).is_some());
        })
    });
}

fn bench_sorted_by_date(c: &mut Criterion) {
    let records = parse_batting_csv(&large_csv());
    c.bench_function("sorted_by_date", |b| {
        b.iter(|| {
            let sorted = sorted_by_date(black_box(&records));
            black_box(sorted.len());
        })
    });
}

fn bench_answer(c: &mut Criterion) {
    let records = parse_batting_csv(&large_csv());
    c.bench_function("answer_question", |b| {
        b.iter(|| {
            let reply = answer(
                black_box("against which opponent did I score most runs"),
                black_box(&records),
            );
            black_box(reply.len());
        })
    });
}

criterion_group!(
    perf,
    bench_parse_small,
    bench_parse_large,
    bench_summarize,
    bench_group_and_top,
    bench_sorted_by_date,
    bench_answer
);
criterion_main!(perf);
