//! # Customer Service ライブラリ
//!
//! 設定、ユースケース、ハンドラ、ルーター構築を公開する。
//! `main.rs` と統合テストの両方から利用する。

pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;

use std::{sync::Arc, time::Duration};

use axum::{
   Router,
   http::StatusCode,
   middleware,
   response::{IntoResponse, Response},
   routing::{get, post},
};
use kokyaku_shared::observability::make_request_span;
use tower::ServiceBuilder;
use tower_http::{
   request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
   timeout::TimeoutLayer,
   trace::TraceLayer,
};

use crate::{
   error::CoreError,
   handler::{DeleteAccountState, HealthState, health_check, request_account_deletion},
};

/// ルーターを構築する
///
/// - `GET /health`
/// - `POST /api/{api_version}/customers/{id}/delete-account`
///
/// 全ルートに request-id の付与とトレース、`request_timeout` のタイムアウトを適用する。
pub fn build_router(
   api_version: &str,
   delete_account_state: Arc<DeleteAccountState>,
   health_state: Arc<HealthState>,
   request_timeout: Duration,
) -> Router {
   let routes = Router::new()
      .route("/health", get(health_check))
      .with_state(health_state)
      .route(
         &format!("/api/{api_version}/customers/{{id}}/delete-account"),
         post(request_account_deletion),
      )
      .with_state(delete_account_state);

   with_middleware(routes, request_timeout)
}

fn with_middleware(router: Router, request_timeout: Duration) -> Router {
   router.layer(
      ServiceBuilder::new()
         .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
         .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
         .layer(PropagateRequestIdLayer::x_request_id())
         .layer(middleware::map_response(fill_timeout_body))
         .layer(TimeoutLayer::new(request_timeout)),
   )
}

/// タイムアウトで打ち切られたレスポンスに共通のエラーボディを付ける
///
/// `TimeoutLayer` はボディなしの 408 を返すため、ここで差し替える。
async fn fill_timeout_body(response: Response) -> Response {
   if response.status() == StatusCode::REQUEST_TIMEOUT {
      return CoreError::RequestTimeout.into_response();
   }
   response
}
