//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//! 各ハンドラはサブモジュールに配置し、ここで re-export する。

pub mod customer;
pub mod health;

pub use customer::{DeleteAccountState, request_account_deletion};
pub use health::{HealthState, health_check};
