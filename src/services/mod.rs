// サービス層 - コレクションの外側で動く処理
// 要素の投入・デモ実行と、集計結果の報告を担当する

pub mod driver;
pub mod monitoring;

#[cfg(feature = "bench")]
pub mod bench;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use driver::{expected_total, populate_dynamic, populate_static, run_demo, StaticPairManager};
pub use monitoring::{ConsoleTotalReporter, NoOpTotalReporter};
