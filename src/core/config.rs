//! ビルド時設定
//!
//! 実行時の設定項目は持たない。要素数はビルド時の環境変数
//! `THING_DISPATCH_MAX_THINGS` で上書きでき、不正な値はビルドエラーになる

/// 要素数のデフォルト値
pub const DEFAULT_MAX_THINGS: usize = 500_000;

/// 挿入する要素ペア（各種類1つずつ）の数
pub const MAX_THINGS: usize = match option_env!("THING_DISPATCH_MAX_THINGS") {
    Some(value) => parse_count(value),
    None => DEFAULT_MAX_THINGS,
};

/// 10進数の要素数をコンパイル時に解釈する
///
/// `_`による桁区切りを許可する（例: `500_000`）
pub const fn parse_count(value: &str) -> usize {
    let bytes = value.as_bytes();
    if bytes.is_empty() {
        panic!("THING_DISPATCH_MAX_THINGS must not be empty");
    }

    let mut count: usize = 0;
    let mut digits = 0;
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        i += 1;
        if byte == b'_' {
            continue;
        }
        if !byte.is_ascii_digit() {
            panic!("THING_DISPATCH_MAX_THINGS must be a decimal number");
        }
        count = match count.checked_mul(10) {
            Some(shifted) => match shifted.checked_add((byte - b'0') as usize) {
                Some(next) => next,
                None => panic!("THING_DISPATCH_MAX_THINGS is too large"),
            },
            None => panic!("THING_DISPATCH_MAX_THINGS is too large"),
        };
        digits += 1;
    }

    if digits == 0 {
        panic!("THING_DISPATCH_MAX_THINGS must contain at least one digit");
    }
    count
}
