//! # 顧客ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /api/{version}/customers/{id}/delete-account` - 退会申請
//!
//! ## リクエスト例
//!
//! ```json
//! {
//!   "name": "John Doe",
//!   "address": "Av. Brasil, 1000",
//!   "phone": "1122334455"
//! }
//! ```
//!
//! 成功時は `204 No Content`。エラー時のボディは [`kokyaku_shared::ErrorResponse`]。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State, rejection::JsonRejection},
   http::StatusCode,
   response::IntoResponse,
};
use serde::Deserialize;

use crate::{
   error::CoreError,
   usecase::{DeleteAccountInput, DeleteAccountUseCaseImpl},
};

/// 退会申請 API の共有状態
pub struct DeleteAccountState {
   pub usecase: DeleteAccountUseCaseImpl,
}

/// 退会申請リクエスト
///
/// 欠けているフィールドは空文字として扱い、ユースケースの検証で弾く。
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteAccountRequest {
   pub name:    String,
   pub address: String,
   pub phone:   String,
}

/// POST /api/{version}/customers/{id}/delete-account
///
/// ボディを JSON としてデコードできない場合は 400 を返す。
pub async fn request_account_deletion(
   State(state): State<Arc<DeleteAccountState>>,
   Path(customer_id): Path<String>,
   payload: Result<Json<DeleteAccountRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
   let Json(req) = payload.map_err(|rejection| CoreError::BadRequest(rejection.body_text()))?;

   state
      .usecase
      .request_deletion(DeleteAccountInput {
         customer_id,
         name: req.name,
         address: req.address,
         phone: req.phone,
      })
      .await?;

   Ok(StatusCode::NO_CONTENT)
}
