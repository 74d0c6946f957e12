//! 型レベルのバケットリスト
//!
//! `Bucket<K1, Bucket<K2, Nil>>`のように種類ごとの`Vec`を型で連結する。
//! 格納先のバケットは型レベルのインデックス（`Here` / `There<I>`）で
//! コンパイル時に選択される

use crate::core::Thing;
use std::marker::PhantomData;

/// リストの終端
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Nil;

/// 種類`T`専用のバケットと、残りのバケットリスト
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket<T, Rest> {
    things: Vec<T>,
    rest: Rest,
}

impl<T, Rest: Default> Default for Bucket<T, Rest> {
    fn default() -> Self {
        Self {
            things: Vec::new(),
            rest: Rest::default(),
        }
    }
}

/// 先頭のバケットを指すインデックス
pub enum Here {}

/// 残りのリスト内のバケットを指すインデックス
pub struct There<I>(PhantomData<I>);

/// バケットリスト全体に対する操作
pub trait BucketList: Default {
    /// 宣言された種類の数
    const KINDS: usize;

    /// 宣言順に各バケットの識別子を`sum`へ加算する
    fn accumulate(&self, sum: usize) -> usize;

    /// 全バケットの要素数の合計
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BucketList for Nil {
    const KINDS: usize = 0;

    #[inline]
    fn accumulate(&self, sum: usize) -> usize {
        sum
    }

    fn len(&self) -> usize {
        0
    }
}

impl<T: Thing, Rest: BucketList> BucketList for Bucket<T, Rest> {
    const KINDS: usize = 1 + Rest::KINDS;

    // T は具象型なので T::id は単相化され直接呼び出される
    #[inline]
    fn accumulate(&self, sum: usize) -> usize {
        let sum = self
            .things
            .iter()
            .fold(sum, |sum, thing| sum.wrapping_add(thing.id()));
        self.rest.accumulate(sum)
    }

    fn len(&self) -> usize {
        self.things.len() + self.rest.len()
    }
}

/// 種類`T`のバケットを選択する
///
/// 宣言されていない種類には実装が存在しないため、格納はコンパイルエラーになる
pub trait Selector<T, I> {
    fn select(&self) -> &Vec<T>;

    fn select_mut(&mut self) -> &mut Vec<T>;
}

impl<T, Rest> Selector<T, Here> for Bucket<T, Rest> {
    fn select(&self) -> &Vec<T> {
        &self.things
    }

    fn select_mut(&mut self) -> &mut Vec<T> {
        &mut self.things
    }
}

impl<T, Head, Rest, I> Selector<T, There<I>> for Bucket<Head, Rest>
where
    Rest: Selector<T, I>,
{
    fn select(&self) -> &Vec<T> {
        self.rest.select()
    }

    fn select_mut(&mut self) -> &mut Vec<T> {
        self.rest.select_mut()
    }
}

/// 種類の並びからバケットリストの型を組み立てる
///
/// `thing_buckets![A, B]`は`Bucket<A, Bucket<B, Nil>>`に展開される
#[macro_export]
macro_rules! thing_buckets {
    () => {
        $crate::static_dispatch::Nil
    };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::static_dispatch::Bucket<$head, $crate::thing_buckets!($($tail),*)>
    };
}
