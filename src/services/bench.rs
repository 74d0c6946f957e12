//! 動的・静的ディスパッチ間の集計性能比較ベンチマーク
//!
//! 各バリアントに`MAX_THINGS`ペアを一度だけ投入し、`total()`の繰り返しを計測する

use crate::core::{DispatchVariant, MAX_THINGS};
use crate::services::driver::{populate_dynamic, populate_static};
use criterion::Criterion;
use std::time::Duration;

/// 1グループあたりの計測時間
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(10);

/// ベンチマークモードで使うCriterion設定
pub fn criterion_config() -> Criterion {
    Criterion::default().measurement_time(MEASUREMENT_TIME)
}

/// 集計のベンチマーク
pub fn benchmark_thing_sum(c: &mut Criterion) {
    benchmark_thing_sum_with(c, MAX_THINGS);
}

/// ペア数を指定して集計のベンチマークを登録
pub fn benchmark_thing_sum_with(c: &mut Criterion, pairs: usize) {
    let mut group = c.benchmark_group("Thing Sum");

    let dynamic = populate_dynamic(pairs);
    group.bench_function(DispatchVariant::Dynamic.bench_name(), |b| {
        b.iter(|| std::hint::black_box(dynamic.total()))
    });

    let fixed = populate_static(pairs);
    group.bench_function(DispatchVariant::Static.bench_name(), |b| {
        b.iter(|| std::hint::black_box(fixed.total()))
    });

    group.finish();
}
