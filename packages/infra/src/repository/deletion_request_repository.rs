//! # DeletionRequestRepository
//!
//! 退会申請の永続化を担当するリポジトリ。
//!
//! ## 一意性
//!
//! 「顧客ごとに未実行の申請は最大 1 件」は部分一意インデックス
//! `customer_deletion_requests_one_active_per_customer` で保証する。
//! 同時に 2 件の挿入が走った場合、後からコミットしようとした側は
//! [`InfraErrorKind::Conflict`](crate::InfraErrorKind::Conflict) を受け取る。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kokyaku_domain::{
    DomainError,
    customer::CustomerId,
    deletion_request::{
        DeletionRequest,
        DeletionRequestId,
        DeletionRequestRecord,
        RequesterAddress,
        RequesterName,
        RequesterPhone,
    },
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::TxContext,
    error::{InfraError, is_unique_violation},
};

const ENTITY: &str = "DeletionRequest";

/// 未実行の申請を顧客ごとに 1 件に制限する部分一意インデックス
pub const ONE_ACTIVE_PER_CUSTOMER_INDEX: &str = "customer_deletion_requests_one_active_per_customer";

/// 退会申請リポジトリトレイト
#[async_trait]
pub trait DeletionRequestRepository: Send + Sync {
    /// 顧客の未実行（`executed = false`）の退会申請を取得する
    ///
    /// 該当がない場合は `NotFound` エラーを返す。
    async fn get_active_by_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<DeletionRequest, InfraError>;

    /// 退会申請を挿入する
    ///
    /// 同一顧客の未実行申請が既にある場合は `Conflict` エラーを返す。
    async fn insert(
        &self,
        tx: &mut TxContext,
        request: &DeletionRequest,
    ) -> Result<(), InfraError>;
}

/// PostgreSQL 実装の DeletionRequestRepository
#[derive(Debug, Clone)]
pub struct PostgresDeletionRequestRepository {
    pool: PgPool,
}

impl PostgresDeletionRequestRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DeletionRequestRow {
    id:          Uuid,
    customer_id: Uuid,
    name:        String,
    address:     String,
    phone:       String,
    executed:    bool,
    created_at:  DateTime<Utc>,
    updated_at:  DateTime<Utc>,
}

impl TryFrom<DeletionRequestRow> for DeletionRequest {
    type Error = InfraError;

    fn try_from(row: DeletionRequestRow) -> Result<Self, Self::Error> {
        let corrupted = |e: DomainError| {
            InfraError::unexpected(format!("退会申請 {} の値が不正です: {e}", row.id))
        };

        Ok(DeletionRequest::from_db(DeletionRequestRecord {
            id:          DeletionRequestId::from_uuid(row.id),
            customer_id: CustomerId::from_uuid(row.customer_id),
            name:        RequesterName::new(row.name.as_str()).map_err(corrupted)?,
            address:     RequesterAddress::new(row.address.as_str()).map_err(corrupted)?,
            phone:       RequesterPhone::new(row.phone.as_str()).map_err(corrupted)?,
            executed:    row.executed,
            created_at:  row.created_at,
            updated_at:  row.updated_at,
        }))
    }
}

#[async_trait]
impl DeletionRequestRepository for PostgresDeletionRequestRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(%customer_id))]
    async fn get_active_by_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<DeletionRequest, InfraError> {
        let row = sqlx::query_as::<_, DeletionRequestRow>(
            r#"
            SELECT
                id,
                customer_id,
                name,
                address,
                phone,
                executed,
                created_at,
                updated_at
            FROM customer_deletion_requests
            WHERE customer_id = $1
              AND executed = false
            "#,
        )
        .bind(customer_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => DeletionRequest::try_from(row),
            None => Err(InfraError::not_found(ENTITY, customer_id.to_string())),
        }
    }

    #[tracing::instrument(
        skip_all,
        level = "debug",
        fields(id = %request.id(), customer_id = %request.customer_id())
    )]
    async fn insert(
        &self,
        tx: &mut TxContext,
        request: &DeletionRequest,
    ) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            INSERT INTO customer_deletion_requests (
                id, customer_id, name, address, phone, executed, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(request.id().as_uuid())
        .bind(request.customer_id().as_uuid())
        .bind(request.name().as_str())
        .bind(request.address().as_str())
        .bind(request.phone().as_str())
        .bind(request.executed())
        .bind(request.created_at())
        .bind(request.updated_at())
        .execute(tx.conn()?)
        .await
        .map_err(|e| {
            if is_unique_violation(&e, ONE_ACTIVE_PER_CUSTOMER_INDEX) {
                InfraError::conflict(ENTITY, request.customer_id().to_string())
            } else {
                InfraError::from(e)
            }
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PostgresDeletionRequestRepository>();
        assert_send_sync::<Box<dyn DeletionRequestRepository>>();
    }

    #[test]
    fn test_不正な連絡先を持つ行はunexpectedエラーになる() {
        let row = DeletionRequestRow {
            id:          Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            name:        String::new(),
            address:     "Av. Brasil, 1000".to_string(),
            phone:       "1122334455".to_string(),
            executed:    false,
            created_at:  Utc::now(),
            updated_at:  Utc::now(),
        };

        let err = DeletionRequest::try_from(row).unwrap_err();

        assert!(matches!(err.kind(), crate::InfraErrorKind::Unexpected(_)));
    }
}
