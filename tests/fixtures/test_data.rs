// テストデータと構築ヘルパー

#![allow(dead_code)]

use proptest::prelude::*;
use thing_dispatch::services::StaticPairManager;
use thing_dispatch::{DynamicThingManager, OtherThing, SomeThing};

/// 種類と値の組（両バリアント共通の要素表現）
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThingSpec {
    Some(f64),
    Other(f32),
}

impl ThingSpec {
    /// 識別子の計算式を直接適用した値
    pub fn formula_id(&self) -> usize {
        match *self {
            ThingSpec::Some(d) => (2.0 * d).floor() as usize,
            ThingSpec::Other(f) => (3.0 * f).floor() as usize,
        }
    }
}

/// 動的ディスパッチ版に要素列を投入
pub fn build_dynamic(specs: &[ThingSpec]) -> DynamicThingManager {
    let mut manager = DynamicThingManager::new();
    for spec in specs {
        match *spec {
            ThingSpec::Some(d) => manager.store::<SomeThing>(d),
            ThingSpec::Other(f) => manager.store::<OtherThing>(f),
        }
    }
    manager
}

/// 静的ディスパッチ版に要素列を投入
pub fn build_static(specs: &[ThingSpec]) -> StaticPairManager {
    let mut manager = StaticPairManager::new();
    for spec in specs {
        match *spec {
            ThingSpec::Some(d) => manager.store(SomeThing::new(d)),
            ThingSpec::Other(f) => manager.store(OtherThing::new(f)),
        }
    }
    manager
}

/// 計算式による合計
pub fn formula_sum(specs: &[ThingSpec]) -> usize {
    specs.iter().map(ThingSpec::formula_id).sum()
}

/// 非負の有限値を持つ要素
pub fn arb_thing_spec() -> impl Strategy<Value = ThingSpec> {
    prop_oneof![
        (0.0f64..1_000_000.0).prop_map(ThingSpec::Some),
        (0.0f32..1_000_000.0).prop_map(ThingSpec::Other),
    ]
}

/// 要素列
pub fn arb_thing_specs() -> impl Strategy<Value = Vec<ThingSpec>> {
    prop::collection::vec(arb_thing_spec(), 0..128)
}
