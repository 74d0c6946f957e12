//! 集計対象の要素
//!
//! 2種類の要素はどちらも浮動小数点値を1つ保持し、そこから識別子を導出する。
//! 両方のコレクションで同じ型を使うので、識別子の計算式は常に共通になる

use crate::core::Thing;

/// 倍精度の値を保持する要素（識別子 = ⌊2d⌋）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SomeThing {
    d: f64,
}

impl SomeThing {
    pub const fn new(d: f64) -> Self {
        Self { d }
    }

    pub const fn value(&self) -> f64 {
        self.d
    }
}

impl Thing for SomeThing {
    // `as`は飽和キャスト: 負値とNaNは0になる
    #[inline]
    fn id(&self) -> usize {
        (2.0 * self.d) as usize
    }
}

impl From<f64> for SomeThing {
    fn from(d: f64) -> Self {
        Self::new(d)
    }
}

/// 単精度の値を保持する要素（識別子 = ⌊3f⌋）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OtherThing {
    f: f32,
}

impl OtherThing {
    pub const fn new(f: f32) -> Self {
        Self { f }
    }

    pub const fn value(&self) -> f32 {
        self.f
    }
}

impl Thing for OtherThing {
    #[inline]
    fn id(&self) -> usize {
        (3.0 * self.f) as usize
    }
}

impl From<f32> for OtherThing {
    fn from(f: f32) -> Self {
        Self::new(f)
    }
}
