//! # Customer Service サーバー
//!
//! 顧客の退会申請を受け付け、履行プロセス向けに記録するサービス。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `CUSTOMER_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `CUSTOMER_PORT` | **Yes** | ポート番号 |
//! | `API_VERSION` | No | URL の API バージョン（デフォルト: `v1`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `REQUEST_TIMEOUT_SECS` | No | リクエストのタイムアウト秒数（デフォルト: `10`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,kokyaku=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! CUSTOMER_PORT=8080 DATABASE_URL=postgres://... cargo run -p kokyaku-customer-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use kokyaku_customer_service::{
   build_router,
   config::CustomerServiceConfig,
   handler::{DeleteAccountState, HealthState},
   usecase::DeleteAccountUseCaseImpl,
};
use kokyaku_domain::clock::SystemClock;
use kokyaku_infra::{
   db::{self, PgTransactionManager},
   repository::{PostgresCustomerRepository, PostgresDeletionRequestRepository},
};
use kokyaku_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Customer Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   let _app_span = init_tracing(&TracingConfig::from_env("customer-service")).entered();

   let config = CustomerServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

   tracing::info!(
      "Customer Service サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   let pool = db::create_pool(&config.database_url)
      .await
      .context("データベース接続に失敗しました")?;
   tracing::info!("データベースに接続しました");

   db::run_migrations(&pool)
      .await
      .context("マイグレーションの適用に失敗しました")?;
   tracing::info!("マイグレーションを適用しました");

   let usecase = DeleteAccountUseCaseImpl::new(
      Arc::new(PostgresCustomerRepository::new(pool.clone())),
      Arc::new(PostgresDeletionRequestRepository::new(pool.clone())),
      Arc::new(PgTransactionManager::new(pool.clone())),
      Arc::new(SystemClock),
   );

   let app = build_router(
      &config.api_version,
      Arc::new(DeleteAccountState { usecase }),
      Arc::new(HealthState { pool }),
      config.request_timeout,
   );

   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .context("アドレスのパースに失敗しました")?;

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("Customer Service サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
