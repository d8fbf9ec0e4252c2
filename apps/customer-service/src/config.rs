//! # Customer Service 設定
//!
//! 環境変数から Customer Service サーバーの設定を読み込む。

use std::{env, time::Duration};

use thiserror::Error;

/// リクエストタイムアウトのデフォルト（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   /// 必須の環境変数が未設定
   #[error("{0} が設定されていません")]
   Missing(&'static str),

   /// 値の形式が不正
   #[error("{name} の値が不正です: {value}")]
   Invalid { name: &'static str, value: String },
}

/// Customer Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerServiceConfig {
   /// バインドアドレス
   pub host:            String,
   /// ポート番号
   pub port:            u16,
   /// API バージョン（URL パスの `/api/{version}` 部分）
   pub api_version:     String,
   /// データベース接続 URL
   pub database_url:    String,
   /// 1 リクエストあたりの処理時間の上限
   pub request_timeout: Duration,
}

impl CustomerServiceConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の取得関数から設定を読み込む
   ///
   /// テストではプロセスの環境変数を書き換えずに済むよう、この関数を直接使う。
   pub fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
      let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

      let port_raw = required("CUSTOMER_PORT")?;
      let port = port_raw.parse().map_err(|_| ConfigError::Invalid {
         name:  "CUSTOMER_PORT",
         value: port_raw.clone(),
      })?;

      let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
         Some(raw) => match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
               return Err(ConfigError::Invalid {
                  name:  "REQUEST_TIMEOUT_SECS",
                  value: raw,
               });
            }
         },
         None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
      };

      Ok(Self {
         host: lookup("CUSTOMER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
         port,
         api_version: lookup("API_VERSION").unwrap_or_else(|| "v1".to_string()),
         database_url: required("DATABASE_URL")?,
         request_timeout,
      })
   }
}

#[cfg(test)]
mod tests {
   use std::collections::HashMap;

   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
      let map: HashMap<&'static str, String> =
         pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
      move |name| map.get(name).cloned()
   }

   #[test]
   fn test_必須項目のみでデフォルト値が補われる() {
      let config = CustomerServiceConfig::from_lookup(lookup_from(&[
         ("CUSTOMER_PORT", "8080"),
         ("DATABASE_URL", "postgres://localhost/kokyaku"),
      ]))
      .unwrap();

      assert_eq!(
         config,
         CustomerServiceConfig {
            host:            "0.0.0.0".to_string(),
            port:            8080,
            api_version:     "v1".to_string(),
            database_url:    "postgres://localhost/kokyaku".to_string(),
            request_timeout: Duration::from_secs(10),
         }
      );
   }

   #[test]
   fn test_任意項目を上書きできる() {
      let config = CustomerServiceConfig::from_lookup(lookup_from(&[
         ("CUSTOMER_HOST", "127.0.0.1"),
         ("CUSTOMER_PORT", "3000"),
         ("API_VERSION", "v2"),
         ("DATABASE_URL", "postgres://db/kokyaku"),
         ("REQUEST_TIMEOUT_SECS", "3"),
      ]))
      .unwrap();

      assert_eq!(config.host, "127.0.0.1");
      assert_eq!(config.api_version, "v2");
      assert_eq!(config.request_timeout, Duration::from_secs(3));
   }

   #[rstest]
   #[case::ポート未設定(&[("DATABASE_URL", "postgres://db")], ConfigError::Missing("CUSTOMER_PORT"))]
   #[case::db_url未設定(&[("CUSTOMER_PORT", "8080")], ConfigError::Missing("DATABASE_URL"))]
   #[case::ポートが数値でない(
      &[("CUSTOMER_PORT", "http"), ("DATABASE_URL", "postgres://db")],
      ConfigError::Invalid { name: "CUSTOMER_PORT", value: "http".to_string() },
   )]
   #[case::タイムアウトが0秒(
      &[("CUSTOMER_PORT", "8080"), ("DATABASE_URL", "postgres://db"), ("REQUEST_TIMEOUT_SECS", "0")],
      ConfigError::Invalid { name: "REQUEST_TIMEOUT_SECS", value: "0".to_string() },
   )]
   fn test_不正な設定はconfig_errorになる(
      #[case] pairs: &[(&'static str, &str)],
      #[case] expected: ConfigError,
   ) {
      let result = CustomerServiceConfig::from_lookup(lookup_from(pairs));

      assert_eq!(result, Err(expected));
   }
}
