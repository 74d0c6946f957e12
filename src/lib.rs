//! 動的ディスパッチと静的ディスパッチの比較
//!
//! 2種類の要素を持つ異種コレクションを、トレイトオブジェクトで保持する版と
//! 種類ごとのバケットで保持する版の2通りで実装し、識別子の合計を求める

pub mod core;
pub mod dynamic_dispatch;
pub mod services;
pub mod static_dispatch;
pub mod things;

pub use crate::core::{
    DispatchError, DispatchResult, DispatchVariant, Thing, TotalReporter, MAX_THINGS,
};
pub use dynamic_dispatch::DynamicThingManager;
pub use static_dispatch::StaticThingManager;
pub use things::{OtherThing, SomeThing};
