// 集計結果の報告機能
// デモ実行時の出力先を抽象化する

pub mod implementations;

// 公開API
pub use implementations::{write_total, ConsoleTotalReporter, NoOpTotalReporter};
