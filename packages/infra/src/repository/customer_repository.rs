//! # CustomerRepository
//!
//! 顧客情報の参照と削除を担当するリポジトリ。
//!
//! 顧客の作成は外部の登録プロセスが行うため、ここでは扱わない。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kokyaku_domain::customer::{CredentialHash, Customer, CustomerId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::InfraError;

const ENTITY: &str = "Customer";

/// 顧客リポジトリトレイト
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// ID で顧客を取得する
    ///
    /// 該当行がない場合は `NotFound` エラーを返す。
    async fn get(&self, id: &CustomerId) -> Result<Customer, InfraError>;

    /// ID で顧客を削除する
    ///
    /// 削除対象がない場合は `NotFound` エラーを返す。
    async fn delete(&self, id: &CustomerId) -> Result<(), InfraError>;
}

/// PostgreSQL 実装の CustomerRepository
#[derive(Debug, Clone)]
pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id:           Uuid,
    document_id:  String,
    password:     String,
    is_anonymous: bool,
    created_at:   DateTime<Utc>,
    updated_at:   DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer::from_db(
            CustomerId::from_uuid(row.id),
            row.document_id,
            CredentialHash::new(row.password),
            row.is_anonymous,
            row.created_at,
            row.updated_at,
        )
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn get(&self, id: &CustomerId) -> Result<Customer, InfraError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT
                id,
                document_id,
                password,
                is_anonymous,
                created_at,
                updated_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Customer::from)
            .ok_or_else(|| InfraError::not_found(ENTITY, id.to_string()))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &CustomerId) -> Result<(), InfraError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(InfraError::not_found(ENTITY, id.to_string()));
        }

        Ok(())
    }
}
