/// UUID v4 ベースの ID 型を定義する宣言型マクロ
///
/// 以下を一括生成する:
/// - Newtype 構造体（`Uuid` をラップ）
/// - `derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)`
/// - `new()`: UUID v4 を生成
/// - `from_uuid()` / `as_uuid()`
/// - `parse_v4()`: 小文字ハイフン区切りの UUID v4 文字列のみ受け付けるパーサ
macro_rules! define_uuid_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[display("{_0}")]
        $vis struct $Name(uuid::Uuid);

        impl $Name {
            /// 新しい ID を生成する（UUID v4）
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            /// 既存の UUID から ID を作成する
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// 内部の UUID 参照を取得する
            pub fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }

            /// 外部入力の文字列を UUID v4 として解釈する
            ///
            /// 受け付けるのは 36 文字の小文字ハイフン区切り形式で、
            /// バージョン 4 かつ RFC 4122 バリアントのもののみ。
            pub fn parse_v4(value: &str) -> Result<Self, $crate::DomainError> {
                let invalid = || {
                    $crate::DomainError::Validation(format!(
                        "{} は UUID v4 形式である必要があります",
                        stringify!($Name)
                    ))
                };

                if value.len() != 36 || value.chars().any(|c| c.is_ascii_uppercase()) {
                    return Err(invalid());
                }
                let uuid = uuid::Uuid::parse_str(value).map_err(|_| invalid())?;
                if uuid.get_version() != Some(uuid::Version::Random)
                    || uuid.get_variant() != uuid::Variant::RFC4122
                {
                    return Err(invalid());
                }

                Ok(Self(uuid))
            }
        }

        impl Default for $Name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

/// バリデーション付き String Newtype の共通メソッド
macro_rules! _validated_string_common {
    ($Name:ident, $label:expr) => {
        impl $Name {
            /// 空文字のみを拒否し、値は入力のまま保持する
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
                let value = value.into();

                if value.is_empty() {
                    return Err($crate::DomainError::Validation(format!(
                        "{}は必須です",
                        $label
                    )));
                }

                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}

/// バリデーション付き String Newtype を定義する宣言型マクロ
///
/// `pii: true` を指定すると `Debug` 出力を `[REDACTED]` にマスクし、
/// `Display` を生成しない。住所や電話番号など、ログに平文で出してはいけない値に使う。
macro_rules! define_validated_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr,
            pii: true $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, PartialEq, Eq,
            serde::Serialize, serde::Deserialize,
        )]
        $vis struct $Name(String);

        impl std::fmt::Debug for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($Name)).field(&"[REDACTED]").finish()
            }
        }

        _validated_string_common!($Name, $label);
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq,
            serde::Serialize, serde::Deserialize,
        )]
        $vis struct $Name(String);

        _validated_string_common!($Name, $label);

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
