//! # Kokyaku インフラ層
//!
//! PostgreSQL との接続・通信を担当する。
//!
//! ## 責務
//!
//! - **データベース接続**: 接続プールとマイグレーション（[`db`]）
//! - **トランザクション**: [`db::TxContext`] と [`db::TransactionManager`]
//! - **リポジトリ実装**: 顧客ストアと退会申請ストア（[`repository`]）
//! - **テスト用モック**: `test-utils` feature で公開（[`mock`]）
//!
//! ## 依存関係
//!
//! ```text
//! customer-service → infra → domain
//! ```
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use kokyaku_infra::{db, repository::PostgresCustomerRepository};
//!
//! let pool = db::create_pool("postgres://localhost/customer_db").await?;
//! db::run_migrations(&pool).await?;
//! let customers = PostgresCustomerRepository::new(pool);
//! ```

pub mod db;
pub mod error;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::{InfraError, InfraErrorKind};
