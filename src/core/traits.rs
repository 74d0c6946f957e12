// 比較ツールのトレイト定義
// 要素の識別子アクセサと、集計結果の報告を抽象化する

use super::error::DispatchResult;
use super::types::DispatchVariant;
use mockall::automock;

/// 識別子アクセサを持つ要素の共通インターフェース
///
/// オブジェクトセーフなので、動的ディスパッチ版では`Box<dyn Thing>`として、
/// 静的ディスパッチ版ではジェネリック境界として同じトレイトを使う
#[automock]
pub trait Thing {
    /// 保持している値から導出される識別子
    fn id(&self) -> usize;
}

// Thing for Box<T>（Box<dyn Thing>を含む）
impl<T: Thing + ?Sized> Thing for Box<T> {
    fn id(&self) -> usize {
        self.as_ref().id()
    }
}

impl<T: Thing + ?Sized> Thing for &T {
    fn id(&self) -> usize {
        (**self).id()
    }
}

/// 集計結果の報告を抽象化するトレイト
#[automock]
pub trait TotalReporter {
    /// 集計結果を報告
    fn report_total(&self, variant: DispatchVariant, total: usize) -> DispatchResult<()>;
}

// TotalReporter for Box<dyn TotalReporter>
impl TotalReporter for Box<dyn TotalReporter> {
    fn report_total(&self, variant: DispatchVariant, total: usize) -> DispatchResult<()> {
        self.as_ref().report_total(variant, total)
    }
}
