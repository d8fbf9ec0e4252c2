//! # Kokyaku ドメイン層
//!
//! 顧客と退会（アカウント削除）申請のドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! customer-service → infra → domain
//!        ↘                     ↑
//!          ────────────────────
//! ```
//!
//! ドメイン層はインフラ層（DB）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`customer`] - 顧客エンティティ（参照のみ）
//! - [`deletion_request`] - 退会申請エンティティと申請者情報の値オブジェクト
//! - [`clock`] - 時刻プロバイダ
//! - [`error`] - ドメインエラー
//!
//! ## 使用例
//!
//! ```rust
//! use kokyaku_domain::{DomainError, customer::CustomerId};
//!
//! let id = CustomerId::parse_v4("733f1ba6-1f62-4495-bf33-6f181fdf1030").unwrap();
//! assert_eq!(id.to_string(), "733f1ba6-1f62-4495-bf33-6f181fdf1030");
//!
//! assert!(matches!(
//!     CustomerId::parse_v4("not-a-uuid"),
//!     Err(DomainError::Validation(_))
//! ));
//! ```

#[macro_use]
mod macros;

pub mod clock;
pub mod customer;
pub mod deletion_request;
pub mod error;

pub use error::DomainError;
