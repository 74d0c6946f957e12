// 比較ツール全体で共有されるデータ型

use std::fmt;

/// 比較対象のディスパッチ方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchVariant {
    /// 動的ディスパッチ（トレイトオブジェクト経由の間接呼び出し）
    Dynamic,
    /// 静的ディスパッチ（型ごとのバケットに対する直接呼び出し）
    Static,
}

impl DispatchVariant {
    /// 全バリアント（ベンチマークの登録順）
    pub const ALL: [DispatchVariant; 2] = [DispatchVariant::Dynamic, DispatchVariant::Static];

    /// バリアント名を取得
    pub const fn name(&self) -> &'static str {
        match self {
            DispatchVariant::Dynamic => "dynamic",
            DispatchVariant::Static => "static",
        }
    }

    /// ベンチマーク関数名を取得
    pub const fn bench_name(&self) -> &'static str {
        match self {
            DispatchVariant::Dynamic => "virtual_sum",
            DispatchVariant::Static => "non_virtual_sum",
        }
    }
}

impl fmt::Display for DispatchVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
