// コアレイヤー - 基盤となるトレイト、型、エラー定義、ビルド時設定
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// 公開API - 明示的にエクスポートして曖昧性を回避
pub use config::{DEFAULT_MAX_THINGS, MAX_THINGS};
pub use error::{DispatchError, DispatchResult};
pub use traits::{MockThing, MockTotalReporter, Thing, TotalReporter};
pub use types::DispatchVariant;
