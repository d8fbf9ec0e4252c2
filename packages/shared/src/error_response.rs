//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンスボディを提供する。
//!
//! ```json
//! {
//!   "code": 422,
//!   "message": "validation error",
//!   "details": "request not valid, please check the fields"
//! }
//! ```
//!
//! - `code` は HTTP ステータスコードと同じ値
//! - `message` はエラー種別ごとの固定文言（クライアントの分岐用）
//! - `details` は人間向けの補足。内部エラーの場合は原因のエラー文字列

use serde::{Deserialize, Serialize};

/// バリデーションエラー時の固定 details
pub const VALIDATION_ERROR_DETAILS: &str = "request not valid, please check the fields";

/// エラーレスポンスボディ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   pub code:    u16,
   pub message: String,
   pub details: String,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   pub fn new(code: u16, message: impl Into<String>, details: impl Into<String>) -> Self {
      Self {
         code,
         message: message.into(),
         details: details.into(),
      }
   }

   /// 400 Bad Request（リクエストボディのデコード失敗）
   pub fn bad_request(details: impl Into<String>) -> Self {
      Self::new(400, "invalid request", details)
   }

   /// 404 Not Found
   pub fn not_found(message: impl Into<String>, details: impl Into<String>) -> Self {
      Self::new(404, message, details)
   }

   /// 408 Request Timeout
   pub fn request_timeout() -> Self {
      Self::new(
         408,
         "request timeout",
         "the request did not complete before the deadline",
      )
   }

   /// 409 Conflict
   pub fn conflict(message: impl Into<String>, details: impl Into<String>) -> Self {
      Self::new(409, message, details)
   }

   /// 422 Unprocessable Entity
   ///
   /// details は固定値。どのフィールドが不正だったかはクライアントに返さない。
   pub fn validation_error() -> Self {
      Self::new(422, "validation error", VALIDATION_ERROR_DETAILS)
   }

   /// 500 Internal Server Error
   pub fn internal_error(message: impl Into<String>, details: impl Into<String>) -> Self {
      Self::new(500, message, details)
   }
}
