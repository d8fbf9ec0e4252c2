//! # Kokyaku 共有ユーティリティ
//!
//! 顧客管理サービス群で共通利用する型と初期化処理を提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, customer-service）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（HTTP レスポンス変換は各サービスの責務）

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::{CheckStatus, HealthResponse, HealthStatus};
