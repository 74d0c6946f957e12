//! 静的ディスパッチ版コレクション
//!
//! 扱う種類の集合を型パラメータで固定し、種類ごとのバケットに分けて保持する。
//! 集計はバケットの宣言順、各バケット内は挿入順に走査し、`id()`は直接呼び出される。
//!
//! ```
//! use thing_dispatch::{thing_buckets, OtherThing, SomeThing, StaticThingManager};
//!
//! let mut manager = StaticThingManager::<thing_buckets![SomeThing, OtherThing]>::new();
//! manager.store(SomeThing::new(2.5));
//! manager.store(OtherThing::new(1.0));
//! assert_eq!(manager.total(), 8);
//! ```
//!
//! 宣言されていない種類は格納できない:
//!
//! ```compile_fail
//! use thing_dispatch::{thing_buckets, OtherThing, SomeThing, StaticThingManager};
//!
//! let mut manager = StaticThingManager::<thing_buckets![SomeThing]>::new();
//! manager.store(OtherThing::new(1.0));
//! ```
//!
//! スレッドセーフではない。複数スレッドから使う場合は外部で同期すること

pub mod buckets;

pub use buckets::{Bucket, BucketList, Here, Nil, Selector, There};

/// 種類ごとのバケットで要素を保持するコレクション
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StaticThingManager<B: BucketList> {
    buckets: B,
}

impl<B: BucketList> StaticThingManager<B> {
    /// 全バケットが空のコレクションを作成
    pub fn new() -> Self {
        Self {
            buckets: B::default(),
        }
    }

    /// 要素を種類`T`のバケットの末尾へ移動する
    pub fn store<T, I>(&mut self, thing: T)
    where
        B: Selector<T, I>,
    {
        self.buckets.select_mut().push(thing);
    }

    /// `store`の値渡し版（初期要素を連ねて構築する用途）
    ///
    /// ```
    /// use thing_dispatch::{thing_buckets, OtherThing, SomeThing, StaticThingManager};
    ///
    /// let manager = StaticThingManager::<thing_buckets![SomeThing, OtherThing]>::new()
    ///     .with(OtherThing::new(1.0))
    ///     .with(SomeThing::new(2.5));
    /// assert_eq!(manager.len(), 2);
    /// ```
    pub fn with<T, I>(mut self, thing: T) -> Self
    where
        B: Selector<T, I>,
    {
        self.store(thing);
        self
    }

    /// 同じ種類の要素をまとめて格納
    pub fn store_all<T, I>(&mut self, things: impl IntoIterator<Item = T>)
    where
        B: Selector<T, I>,
    {
        self.buckets.select_mut().extend(things);
    }

    /// 種類`T`のバケット（挿入順）
    pub fn bucket<T, I>(&self) -> &[T]
    where
        B: Selector<T, I>,
    {
        self.buckets.select()
    }

    /// 全要素の識別子の合計
    pub fn total(&self) -> usize {
        self.buckets.accumulate(0)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// 宣言された種類の数
    pub const fn kind_count(&self) -> usize {
        B::KINDS
    }
}
