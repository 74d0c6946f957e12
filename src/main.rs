// 実行モードはビルド時にcargoのfeatureで1つだけ選択する:
//   bench         - criterionで両バリアントの集計を計測
//   dynamic-demo  - 動的ディスパッチ版の合計を標準エラー出力へ1行出力
//   static-demo   - 静的ディスパッチ版の合計を標準エラー出力へ1行出力（デフォルト）

#[cfg(not(any(
    feature = "bench",
    feature = "dynamic-demo",
    feature = "static-demo"
)))]
compile_error!(
    "no run mode selected: enable exactly one of the `bench`, `dynamic-demo`, `static-demo` features"
);

#[cfg(any(
    all(feature = "bench", feature = "dynamic-demo"),
    all(feature = "bench", feature = "static-demo"),
    all(feature = "dynamic-demo", feature = "static-demo")
))]
compile_error!(
    "multiple run modes selected: enable exactly one of the `bench`, `dynamic-demo`, `static-demo` features (use --no-default-features)"
);

#[cfg(feature = "bench")]
criterion::criterion_group! {
    name = benches;
    config = thing_dispatch::services::bench::criterion_config();
    targets = thing_dispatch::services::bench::benchmark_thing_sum
}

#[cfg(feature = "bench")]
criterion::criterion_main!(benches);

#[cfg(not(feature = "bench"))]
fn main() -> anyhow::Result<()> {
    use thing_dispatch::{
        services::{run_demo, ConsoleTotalReporter},
        DispatchVariant, MAX_THINGS,
    };

    #[cfg(feature = "dynamic-demo")]
    const VARIANT: DispatchVariant = DispatchVariant::Dynamic;
    #[cfg(not(feature = "dynamic-demo"))]
    const VARIANT: DispatchVariant = DispatchVariant::Static;

    run_demo(VARIANT, MAX_THINGS, &ConsoleTotalReporter::new())?;
    Ok(())
}
