/// 非負整数をラップする値オブジェクトを定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`$Inner` をラップ）
/// - `derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)`
/// - `new()`: 検証済みの数値から作成
/// - `parse()`: クエリ文字列から作成（数値として解釈できなければ `Validation`）
/// - `value()`: 内部の数値を取得
///
/// `parse()` は 10 進数字のみの正規表記だけを受け付ける。
/// 前後の空白、符号（`"+45"`）、先頭ゼロ（`"007"`）、小数表記（`"1.0"`）はエラー。
/// そのため値は入力どおりの文字列で表示し直せる。
///
/// # 使用例
///
/// ```rust
/// use fitness_domain::activity::Duration;
///
/// let duration = Duration::parse("30").unwrap();
/// assert_eq!(duration.value(), 30);
/// assert!(Duration::parse("thirty").is_err());
/// assert!(Duration::parse("+30").is_err());
/// ```
macro_rules! define_numeric_value {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident($Inner:ty) {
            label: $label:literal $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            derive_more::Display,
        )]
        #[display("{_0}")]
        $vis struct $Name($Inner);

        impl $Name {
            /// 検証済みの数値から作成する
            pub fn new(value: $Inner) -> Self {
                Self(value)
            }

            /// クエリ文字列から作成する
            pub fn parse(value: &str) -> Result<Self, $crate::DomainError> {
                let invalid = || {
                    $crate::DomainError::Validation(format!(
                        "{} は 0 以上の整数である必要があります: {:?}",
                        $label, value
                    ))
                };

                let canonical = !value.is_empty()
                    && value.bytes().all(|b| b.is_ascii_digit())
                    && (value == "0" || !value.starts_with('0'));
                if !canonical {
                    return Err(invalid());
                }

                value.parse::<$Inner>().map(Self).map_err(|_| invalid())
            }

            /// 内部の数値を取得する
            pub fn value(&self) -> $Inner {
                self.0
            }
        }
    };
}
