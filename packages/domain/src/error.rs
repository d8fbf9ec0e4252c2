//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 422 Unprocessable Entity | 入力値の検証失敗 |
//!
//! 存在確認や一意性違反はリポジトリ層 (`InfraError`) で検出し、
//! HTTP ステータスへの変換は customer-service の `CoreError` が担当する。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 必須フィールドの未入力や不正なフォーマットなど。
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
