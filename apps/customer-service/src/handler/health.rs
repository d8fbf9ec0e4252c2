//! # ヘルスチェックハンドラ
//!
//! ロードバランサーやコンテナオーケストレーターから稼働状態を確認するための
//! エンドポイント。
//!
//! ```text
//! GET /health
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "checks": { "database": "ok" }
//! }
//! ```
//!
//! いずれかのチェックが失敗した場合は `503 Service Unavailable`。

use std::{collections::BTreeMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use kokyaku_infra::db;
use kokyaku_shared::{CheckStatus, HealthResponse};
use sqlx::PgPool;

/// DB 疎通確認のタイムアウト
const DATABASE_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// ヘルスチェック用の State
pub struct HealthState {
   pub pool: PgPool,
}

/// ヘルスチェックエンドポイント
#[tracing::instrument(skip_all)]
pub async fn health_check(State(state): State<Arc<HealthState>>) -> impl IntoResponse {
   let mut checks = BTreeMap::new();
   checks.insert("database".to_string(), check_database(&state.pool).await);

   let response = HealthResponse::from_checks(env!("CARGO_PKG_VERSION"), checks);
   let status = if response.is_healthy() {
      StatusCode::OK
   } else {
      StatusCode::SERVICE_UNAVAILABLE
   };

   (status, Json(response))
}

/// DB に `SELECT 1` を発行して疎通を確認する（タイムアウト: 5 秒）
async fn check_database(pool: &PgPool) -> CheckStatus {
   match tokio::time::timeout(DATABASE_CHECK_TIMEOUT, db::ping(pool)).await {
      Ok(Ok(())) => CheckStatus::Ok,
      Ok(Err(e)) => {
         tracing::warn!(error = %e, "health check: database ping failed");
         CheckStatus::Error
      }
      Err(_) => {
         tracing::warn!("health check: database check timed out");
         CheckStatus::Error
      }
   }
}
