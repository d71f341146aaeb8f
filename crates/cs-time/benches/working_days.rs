use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cs_time::WorkingDayExt;

fn bench_add_working_days(c: &mut Criterion) {
    let monday = NaiveDate::from_ymd_opt(2016, 8, 1).unwrap();
    let saturday = NaiveDate::from_ymd_opt(2016, 8, 13).unwrap();
    c.bench_function("add_working_days +250", |b| {
        b.iter(|| black_box(monday).add_working_days(black_box(250)))
    });
    c.bench_function("add_working_days -250", |b| {
        b.iter(|| black_box(monday).add_working_days(black_box(-250)))
    });
    c.bench_function("add_working_days weekend 0", |b| {
        b.iter(|| black_box(saturday).add_working_days(black_box(0)))
    });
}

criterion_group!(benches, bench_add_working_days);
criterion_main!(benches);
