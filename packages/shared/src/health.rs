//! # ヘルスチェック共通型
//!
//! `GET /health` のレスポンス型。依存先（データベース）ごとの
//! チェック結果を `checks` に格納する。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 個別チェックの結果ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// チェック成功
    Ok,
    /// チェック失敗
    Error,
}

/// サービス全体の稼働状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// 全依存先が利用可能
    Healthy,
    /// いずれかの依存先が利用不可
    Unhealthy,
}

/// ヘルスチェックレスポンス
///
/// ```
/// use std::collections::BTreeMap;
///
/// use kokyaku_shared::{CheckStatus, HealthResponse, HealthStatus};
///
/// let mut checks = BTreeMap::new();
/// checks.insert("database".to_string(), CheckStatus::Ok);
/// let response = HealthResponse::from_checks("0.1.0", checks);
/// assert_eq!(response.status, HealthStatus::Healthy);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 稼働状態
    pub status:  HealthStatus,
    /// アプリケーションバージョン（Cargo.toml から取得）
    pub version: String,
    /// 個別チェック結果（キー: チェック名）
    pub checks:  BTreeMap<String, CheckStatus>,
}

impl HealthResponse {
    /// 個別チェック結果から全体ステータスを導出して組み立てる
    ///
    /// すべて `Ok` の場合のみ `Healthy`。
    pub fn from_checks(version: impl Into<String>, checks: BTreeMap<String, CheckStatus>) -> Self {
        let status = if checks.values().all(|s| *s == CheckStatus::Ok) {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        };

        Self {
            status,
            version: version.into(),
            checks,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}
