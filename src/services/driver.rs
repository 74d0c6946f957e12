// 要素の投入とデモ実行
// 両バリアントに同じ要素列を投入し、集計結果を報告する

use crate::core::{DispatchResult, DispatchVariant, TotalReporter};
use crate::dynamic_dispatch::DynamicThingManager;
use crate::static_dispatch::StaticThingManager;
use crate::thing_buckets;
use crate::things::{OtherThing, SomeThing};

/// デモ・ベンチマークで使う静的ディスパッチ版の型
pub type StaticPairManager = StaticThingManager<thing_buckets![SomeThing, OtherThing]>;

/// `i in 0..pairs`について`SomeThing(i)`と`OtherThing(i)`を交互に格納する
pub fn populate_dynamic(pairs: usize) -> DynamicThingManager {
    let mut manager = DynamicThingManager::with_capacity(pairs.saturating_mul(2));
    for i in 0..pairs {
        manager.store::<SomeThing>(i as f64);
        manager.store::<OtherThing>(i as f32);
    }
    manager
}

/// `populate_dynamic`と同じ要素列を静的ディスパッチ版に格納する
pub fn populate_static(pairs: usize) -> StaticPairManager {
    let mut manager = StaticPairManager::new();
    for i in 0..pairs {
        manager.store(SomeThing::new(i as f64));
        manager.store(OtherThing::new(i as f32));
    }
    manager
}

/// 投入済みコレクションの合計（閉じた式）
///
/// 各ペアの識別子は`2i + 3i`なので合計は`5 * pairs * (pairs - 1) / 2`。
/// `3i`が`f32`で正確に表せる範囲（`i < 2^24 / 3`程度）で成り立つ
pub const fn expected_total(pairs: usize) -> usize {
    if pairs == 0 {
        return 0;
    }
    5 * (pairs * (pairs - 1) / 2)
}

/// 指定バリアントでコレクションを構築し、集計結果を報告する
pub fn run_demo<R>(variant: DispatchVariant, pairs: usize, reporter: &R) -> DispatchResult<usize>
where
    R: TotalReporter + ?Sized,
{
    let total = match variant {
        DispatchVariant::Dynamic => populate_dynamic(pairs).total(),
        DispatchVariant::Static => populate_static(pairs).total(),
    };

    reporter.report_total(variant, total)?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DispatchError, MockTotalReporter};
    use crate::services::monitoring::NoOpTotalReporter;
    use std::io;

    #[test]
    fn test_populate_sizes() {
        assert_eq!(populate_dynamic(10).len(), 20);

        let manager = populate_static(10);
        assert_eq!(manager.len(), 20);
        assert_eq!(manager.bucket::<SomeThing, _>().len(), 10);
        assert_eq!(manager.bucket::<OtherThing, _>().len(), 10);
    }

    #[test]
    fn test_expected_total_matches_both_variants() {
        for pairs in [0, 1, 2, 7, 1_000] {
            let expected = expected_total(pairs);
            assert_eq!(populate_dynamic(pairs).total(), expected, "pairs = {pairs}");
            assert_eq!(populate_static(pairs).total(), expected, "pairs = {pairs}");
        }
    }

    #[test]
    fn test_expected_total_for_default_count() {
        assert_eq!(expected_total(500_000), 624_998_750_000);
    }

    #[test]
    fn test_run_demo_reports_total_once() {
        let mut reporter = MockTotalReporter::new();
        reporter
            .expect_report_total()
            .withf(|variant, total| *variant == DispatchVariant::Dynamic && *total == 15)
            .times(1)
            .returning(|_, _| Ok(()));

        let total = run_demo(DispatchVariant::Dynamic, 3, &reporter).unwrap();
        assert_eq!(total, 15);
    }

    #[test]
    fn test_run_demo_propagates_report_error() {
        let mut reporter = MockTotalReporter::new();
        reporter.expect_report_total().times(1).returning(|variant, _| {
            Err(DispatchError::report(
                variant.name(),
                io::Error::from(io::ErrorKind::BrokenPipe),
            ))
        });

        let result = run_demo(DispatchVariant::Static, 3, &reporter);
        assert!(matches!(result, Err(DispatchError::Report { variant: "static", .. })));
    }

    #[test]
    fn test_run_demo_variants_agree() {
        let reporter = NoOpTotalReporter::new();
        let dynamic = run_demo(DispatchVariant::Dynamic, 250, &reporter).unwrap();
        let fixed = run_demo(DispatchVariant::Static, 250, &reporter).unwrap();
        assert_eq!(dynamic, fixed);
    }
}
