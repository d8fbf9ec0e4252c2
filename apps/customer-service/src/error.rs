//! # Customer Service エラー定義
//!
//! Customer Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | バリアント | ステータス | message |
//! |-----------|-----------|---------|
//! | `BadRequest` | 400 | `invalid request` |
//! | `CustomerNotFound` | 404 | `customer not found` |
//! | `RequestTimeout` | 408 | `request timeout` |
//! | `DeletionRequestAlreadyCreated` | 409 | `deletion request already created` |
//! | `RequestNotValid` | 422 | `validation error` |
//! | `Database` | 500 | `internal error deleting customer` |

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use kokyaku_infra::InfraError;
use kokyaku_shared::ErrorResponse;
use thiserror::Error;

const CUSTOMER_NOT_FOUND_MESSAGE: &str = "customer not found";
const CUSTOMER_NOT_FOUND_DETAILS: &str = "customer not found, please check the id";
const ALREADY_CREATED_MESSAGE: &str = "deletion request already created";
const ALREADY_CREATED_DETAILS: &str = "a deletion request for this customer is already pending";
const INTERNAL_ERROR_MESSAGE: &str = "internal error deleting customer";

/// Customer Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
   /// 入力値が検証を通らない
   #[error("リクエストの値が不正です")]
   RequestNotValid,

   /// 顧客が存在しない
   #[error("顧客が見つかりません: {0}")]
   CustomerNotFound(String),

   /// 未実行の退会申請が既にある
   #[error("退会申請は既に作成されています")]
   DeletionRequestAlreadyCreated,

   /// リクエストボディをデコードできない
   #[error("不正なリクエスト: {0}")]
   BadRequest(String),

   /// 処理が制限時間内に終わらなかった
   #[error("リクエストがタイムアウトしました")]
   RequestTimeout,

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),
}

impl CoreError {
   /// 業務エラー（クライアント起因）かどうか
   ///
   /// `false` の場合はサーバー側の障害として扱う。
   pub fn is_business(&self) -> bool {
      !matches!(self, CoreError::Database(_))
   }

   fn status(&self) -> StatusCode {
      match self {
         CoreError::RequestNotValid => StatusCode::UNPROCESSABLE_ENTITY,
         CoreError::CustomerNotFound(_) => StatusCode::NOT_FOUND,
         CoreError::DeletionRequestAlreadyCreated => StatusCode::CONFLICT,
         CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
         CoreError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
         CoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
      }
   }

   fn to_error_response(&self) -> ErrorResponse {
      match self {
         CoreError::RequestNotValid => ErrorResponse::validation_error(),
         CoreError::CustomerNotFound(_) => {
            ErrorResponse::not_found(CUSTOMER_NOT_FOUND_MESSAGE, CUSTOMER_NOT_FOUND_DETAILS)
         }
         CoreError::DeletionRequestAlreadyCreated => {
            ErrorResponse::conflict(ALREADY_CREATED_MESSAGE, ALREADY_CREATED_DETAILS)
         }
         CoreError::BadRequest(details) => ErrorResponse::bad_request(details.as_str()),
         CoreError::RequestTimeout => ErrorResponse::request_timeout(),
         CoreError::Database(e) => ErrorResponse::internal_error(INTERNAL_ERROR_MESSAGE, e.to_string()),
      }
   }
}

impl IntoResponse for CoreError {
   fn into_response(self) -> Response {
      match &self {
         CoreError::Database(e) => {
            tracing::error!(
               error = %e,
               span_trace = %e.span_trace(),
               "データベースエラー"
            );
         }
         CoreError::RequestTimeout => {
            tracing::warn!("リクエストがタイムアウトしました");
         }
         business => {
            tracing::info!(error = %business, "業務エラー");
         }
      }

      (self.status(), Json(self.to_error_response())).into_response()
   }
}
