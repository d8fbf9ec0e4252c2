//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターン:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別
//!
//! `From<sqlx::Error>` や convenience constructor で生成した時点の
//! スパン情報（リポジトリの `instrument` スパン等）が自動的に記録される。
//!
//! ## 「見つからない」の扱い
//!
//! ストアの `get` 系メソッドは 0 行を空の成功値ではなく
//! [`InfraErrorKind::NotFound`] として返す。呼び出し側は
//! [`InfraError::is_not_found`] でクエリ失敗と区別する。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// データベースエラー
    ///
    /// SQL の実行失敗、接続エラー、プールのタイムアウトなど。
    #[error("データベースエラー: {0}")]
    Database(#[source] sqlx::Error),

    /// 該当する行が存在しない
    #[error("{entity} が見つかりません: {id}")]
    NotFound {
        /// エンティティ名（例: "Customer"）
        entity: &'static str,
        /// 検索に使用した識別子
        id:     String,
    },

    /// 一意制約違反
    ///
    /// 退会申請の「未実行は顧客ごとに 1 件」制約に違反した場合など。
    #[error("競合が発生しました: {entity}(id={id})")]
    Conflict {
        /// エンティティ名（例: "DeletionRequest"）
        entity: &'static str,
        /// 競合したキー
        id:     String,
    },

    /// 予期しないエラー
    ///
    /// DB に保存済みの値がドメインの制約を満たさない場合など。
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

impl InfraError {
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// 該当行なしを表すエラーかどうか
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, InfraErrorKind::NotFound { .. })
    }

    /// Conflict の場合、entity と id を返す
    pub fn as_conflict(&self) -> Option<(&str, &str)> {
        match &self.kind {
            InfraErrorKind::Conflict { entity, id } => Some((entity, id)),
            _ => None,
        }
    }

    // ===== Convenience constructors =====

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::capture(InfraErrorKind::NotFound {
            entity,
            id: id.into(),
        })
    }

    pub fn conflict(entity: &'static str, id: impl Into<String>) -> Self {
        Self::capture(InfraErrorKind::Conflict {
            entity,
            id: id.into(),
        })
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::capture(InfraErrorKind::Unexpected(msg.into()))
    }

    fn capture(kind: InfraErrorKind) -> Self {
        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

impl From<sqlx::Error> for InfraError {
    fn from(source: sqlx::Error) -> Self {
        Self::capture(InfraErrorKind::Database(source))
    }
}

/// sqlx のエラーが指定した制約への一意制約違反かどうか
pub(crate) fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation() && db.constraint() == Some(constraint))
}
