// 集計結果の出力に関するエラー型定義
// コアの操作（格納・集計）は全域関数なので、失敗しうるのは報告処理のみ

use thiserror::Error;

/// ディスパッチ比較ツールのエラー型
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("集計結果の報告エラー ({variant}): {source}")]
    Report {
        variant: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl DispatchError {
    /// 報告エラーの作成
    pub fn report(variant: &'static str, source: std::io::Error) -> Self {
        Self::Report { variant, source }
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// 出力先が閉じられている場合などは再試行しても結果は変わらない
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Report { source, .. } => matches!(
                source.kind(),
                std::io::ErrorKind::Interrupted | std::io::ErrorKind::WouldBlock
            ),
        }
    }
}

/// 比較ツールの結果型
pub type DispatchResult<T> = std::result::Result<T, DispatchError>;
