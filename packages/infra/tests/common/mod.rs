//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するシードデータ定数・
//! エンティティ生成ヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use kokyaku_domain::{
    customer::CustomerId,
    deletion_request::{
        DeletionRequest,
        DeletionRequestId,
        NewDeletionRequest,
        RequesterAddress,
        RequesterName,
        RequesterPhone,
    },
};
use sqlx::PgPool;

/// 存在する顧客として投入する ID
pub fn existing_customer_id() -> CustomerId {
    CustomerId::parse_v4("733f1ba6-1f62-4495-bf33-6f181fdf1030").unwrap()
}

/// どのテストでも投入しない顧客 ID
pub fn unknown_customer_id() -> CustomerId {
    CustomerId::parse_v4("e5ccb0dc-f1e9-4ed7-aa8d-49bbac60786e").unwrap()
}

/// テスト用の固定日時
pub fn test_now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

/// 顧客行を投入する
pub async fn insert_customer(pool: &PgPool, id: &CustomerId) {
    sqlx::query(
        r#"
        INSERT INTO customers (id, document_id, password, is_anonymous, created_at, updated_at)
        VALUES ($1, $2, $3, false, $4, $4)
        "#,
    )
    .bind(id.as_uuid())
    .bind("12345678900")
    .bind("$argon2id$dummy")
    .bind(test_now())
    .execute(pool)
    .await
    .expect("顧客の投入に失敗");
}

/// デフォルトの連絡先で未実行の退会申請を作成する
pub fn create_test_request(customer_id: &CustomerId) -> DeletionRequest {
    DeletionRequest::new(NewDeletionRequest {
        id:          DeletionRequestId::new(),
        customer_id: customer_id.clone(),
        name:        RequesterName::new("John Doe").unwrap(),
        address:     RequesterAddress::new("Av. Brasil, 1000").unwrap(),
        phone:       RequesterPhone::new("1122334455").unwrap(),
        now:         test_now(),
    })
}

/// 顧客の退会申請を実行済みにする（外部の履行プロセスの代わり）
pub async fn mark_executed(pool: &PgPool, customer_id: &CustomerId) {
    sqlx::query("UPDATE customer_deletion_requests SET executed = true WHERE customer_id = $1")
        .bind(customer_id.as_uuid())
        .execute(pool)
        .await
        .expect("退会申請の更新に失敗");
}

/// 顧客の退会申請の件数を数える
pub async fn count_requests(pool: &PgPool, customer_id: &CustomerId) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM customer_deletion_requests WHERE customer_id = $1")
        .bind(customer_id.as_uuid())
        .fetch_one(pool)
        .await
        .expect("件数の取得に失敗")
}
