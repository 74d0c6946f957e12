// 集計結果報告の具象実装

use crate::core::{DispatchError, DispatchResult, DispatchVariant, TotalReporter};
use std::io::{self, Write};

/// 集計結果を1行の10進数として書き出す
pub fn write_total<W: Write>(
    writer: &mut W,
    variant: DispatchVariant,
    total: usize,
) -> DispatchResult<()> {
    writeln!(writer, "{total}")
        .and_then(|()| writer.flush())
        .map_err(|source| DispatchError::report(variant.name(), source))
}

/// 標準エラー出力による集計結果報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleTotalReporter {
    quiet: bool,
}

impl ConsoleTotalReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl TotalReporter for ConsoleTotalReporter {
    fn report_total(&self, variant: DispatchVariant, total: usize) -> DispatchResult<()> {
        if self.quiet {
            return Ok(());
        }
        write_total(&mut io::stderr().lock(), variant, total)
    }
}

/// 何もしない報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpTotalReporter;

impl NoOpTotalReporter {
    pub fn new() -> Self {
        Self
    }
}

impl TotalReporter for NoOpTotalReporter {
    fn report_total(&self, _variant: DispatchVariant, _total: usize) -> DispatchResult<()> {
        Ok(())
    }
}
