// テストユーティリティ
// 両バリアントに同じ要素列を投入するためのヘルパー

pub mod test_data;

// 公開API
pub use test_data::*;
