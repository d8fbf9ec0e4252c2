//! # ユースケース層
//!
//! Customer Service のビジネスロジックを実装する。
//!
//! - リポジトリとトランザクション管理は `Arc<dyn Trait>` で外部から注入
//! - ハンドラは薄く保ち、ロジックはユースケースに集約

pub mod delete_account;

pub use delete_account::{DeleteAccountInput, DeleteAccountUseCaseImpl};
