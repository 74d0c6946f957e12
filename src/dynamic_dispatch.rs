//! 動的ディスパッチ版コレクション
//!
//! 全要素を`Box<dyn Thing>`の単一シーケンスで所有する。新しい種類を追加しても
//! コレクション側の変更は不要だが、集計時には要素ごとに間接呼び出しが発生する。
//!
//! スレッドセーフではない。複数スレッドから使う場合は外部で同期すること

use crate::core::Thing;

/// トレイトオブジェクトで要素を保持するコレクション
#[derive(Default)]
pub struct DynamicThingManager {
    things: Vec<Box<dyn Thing>>,
}

impl DynamicThingManager {
    /// 空のコレクションを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 容量を確保した空のコレクションを作成
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            things: Vec::with_capacity(capacity),
        }
    }

    /// 種類`T`の要素をコンストラクタ引数から構築して末尾に追加
    ///
    /// ```
    /// use thing_dispatch::{DynamicThingManager, OtherThing, SomeThing};
    ///
    /// let mut manager = DynamicThingManager::new();
    /// manager.store::<SomeThing>(2.5);
    /// manager.store::<OtherThing>(1.0f32);
    /// assert_eq!(manager.total(), 8);
    /// ```
    pub fn store<T>(&mut self, args: impl Into<T>)
    where
        T: Thing + 'static,
    {
        self.things.push(Box::new(args.into()));
    }

    /// 構築済みの要素を末尾に追加
    pub fn push(&mut self, thing: Box<dyn Thing>) {
        self.things.push(thing);
    }

    /// 全要素の識別子の合計
    ///
    /// 挿入順に走査し、各要素の`id()`をトレイト経由で呼び出す
    pub fn total(&self) -> usize {
        self.things
            .iter()
            .fold(0usize, |sum, thing| sum.wrapping_add(thing.id()))
    }

    pub fn len(&self) -> usize {
        self.things.len()
    }

    pub fn is_empty(&self) -> bool {
        self.things.is_empty()
    }

    /// 挿入順に要素を走査
    pub fn iter(&self) -> impl Iterator<Item = &dyn Thing> + '_ {
        self.things.iter().map(|thing| thing.as_ref())
    }
}

impl FromIterator<Box<dyn Thing>> for DynamicThingManager {
    fn from_iter<I: IntoIterator<Item = Box<dyn Thing>>>(iter: I) -> Self {
        Self {
            things: iter.into_iter().collect(),
        }
    }
}

impl Extend<Box<dyn Thing>> for DynamicThingManager {
    fn extend<I: IntoIterator<Item = Box<dyn Thing>>>(&mut self, iter: I) {
        self.things.extend(iter);
    }
}

impl std::fmt::Debug for DynamicThingManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicThingManager")
            .field("len", &self.things.len())
            .finish()
    }
}

/// 任意の種類の要素を並べて`DynamicThingManager`を構築する
///
/// ```
/// use thing_dispatch::{dynamic_things, OtherThing, SomeThing};
///
/// let manager = dynamic_things![OtherThing::new(1.0), SomeThing::new(2.5)];
/// assert_eq!(manager.len(), 2);
/// ```
#[macro_export]
macro_rules! dynamic_things {
    () => {
        $crate::dynamic_dispatch::DynamicThingManager::new()
    };
    ($($thing:expr),+ $(,)?) => {{
        let mut manager = $crate::dynamic_dispatch::DynamicThingManager::new();
        $(
            manager.push(::std::boxed::Box::new($thing));
        )+
        manager
    }};
}
