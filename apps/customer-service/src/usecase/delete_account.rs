//! # 退会申請ユースケース
//!
//! 顧客からのアカウント削除（退会）申請を受け付け、履行プロセス向けに記録する。
//!
//! ## 処理の流れ
//!
//! 1. 入力値を検証（ストアにはアクセスしない）
//! 2. 顧客の存在を確認
//! 3. 未実行の退会申請がないことを確認
//! 4. 退会申請を作成し、トランザクション内で挿入してコミット
//!
//! 3 と 4 の間に同じ顧客の申請が割り込んだ場合は、DB の部分一意インデックスが
//! 挿入を拒否し、`DeletionRequestAlreadyCreated` として返る。

use std::sync::Arc;

use kokyaku_domain::{
   DomainError,
   clock::Clock,
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
use kokyaku_infra::{
   InfraError,
   db::TransactionManager,
   repository::{CustomerRepository, DeletionRequestRepository},
};

use crate::error::CoreError;

/// 退会申請の入力
///
/// HTTP 境界でデコードしたままの未検証の値。
#[derive(Debug, Clone)]
pub struct DeleteAccountInput {
   pub customer_id: String,
   pub name:        String,
   pub address:     String,
   pub phone:       String,
}

/// 検証済みの入力
struct ValidatedInput {
   customer_id: CustomerId,
   name:        RequesterName,
   address:     RequesterAddress,
   phone:       RequesterPhone,
}

impl TryFrom<DeleteAccountInput> for ValidatedInput {
   type Error = CoreError;

   fn try_from(input: DeleteAccountInput) -> Result<Self, Self::Error> {
      Self::parse(input).map_err(|e| {
         tracing::debug!(reason = %e, "退会申請の入力が不正です");
         CoreError::RequestNotValid
      })
   }
}

impl ValidatedInput {
   fn parse(input: DeleteAccountInput) -> Result<Self, DomainError> {
      Ok(Self {
         customer_id: CustomerId::parse_v4(&input.customer_id)?,
         name:        RequesterName::new(input.name)?,
         address:     RequesterAddress::new(input.address)?,
         phone:       RequesterPhone::new(input.phone)?,
      })
   }
}

/// 退会申請ユースケース
pub struct DeleteAccountUseCaseImpl {
   customer_repository:         Arc<dyn CustomerRepository>,
   deletion_request_repository: Arc<dyn DeletionRequestRepository>,
   tx_manager:                  Arc<dyn TransactionManager>,
   clock:                       Arc<dyn Clock>,
}

impl DeleteAccountUseCaseImpl {
   pub fn new(
      customer_repository: Arc<dyn CustomerRepository>,
      deletion_request_repository: Arc<dyn DeletionRequestRepository>,
      tx_manager: Arc<dyn TransactionManager>,
      clock: Arc<dyn Clock>,
   ) -> Self {
      Self {
         customer_repository,
         deletion_request_repository,
         tx_manager,
         clock,
      }
   }

   /// 退会申請を受け付ける
   ///
   /// # エラー
   ///
   /// - `RequestNotValid`: ID が UUID v4 でない、または連絡先が空
   /// - `CustomerNotFound`: 顧客が存在しない
   /// - `DeletionRequestAlreadyCreated`: 未実行の申請が既にある
   /// - `Database`: ストアの障害
   #[tracing::instrument(skip_all, fields(customer_id = %input.customer_id))]
   pub async fn request_deletion(&self, input: DeleteAccountInput) -> Result<(), CoreError> {
      let input = ValidatedInput::try_from(input)?;

      self.ensure_customer_exists(&input.customer_id).await?;
      self.ensure_no_active_request(&input.customer_id).await?;

      let request = DeletionRequest::new(NewDeletionRequest {
         id:          DeletionRequestId::new(),
         customer_id: input.customer_id,
         name:        input.name,
         address:     input.address,
         phone:       input.phone,
         now:         self.clock.now(),
      });

      self.create(&request).await?;

      tracing::info!(
         customer_id = %request.customer_id(),
         deletion_request_id = %request.id(),
         "退会申請を作成しました"
      );
      Ok(())
   }

   async fn ensure_customer_exists(&self, customer_id: &CustomerId) -> Result<(), CoreError> {
      match self.customer_repository.get(customer_id).await {
         Ok(_) => Ok(()),
         Err(e) if e.is_not_found() => Err(CoreError::CustomerNotFound(customer_id.to_string())),
         Err(e) => Err(CoreError::Database(e)),
      }
   }

   async fn ensure_no_active_request(&self, customer_id: &CustomerId) -> Result<(), CoreError> {
      match self
         .deletion_request_repository
         .get_active_by_customer(customer_id)
         .await
      {
         Ok(_) => Err(CoreError::DeletionRequestAlreadyCreated),
         Err(e) if e.is_not_found() => Ok(()),
         Err(e) => Err(CoreError::Database(e)),
      }
   }

   /// トランザクションを開始して挿入し、コミットする
   async fn create(&self, request: &DeletionRequest) -> Result<(), CoreError> {
      let mut tx = self.tx_manager.begin().await?;
      self.deletion_request_repository
         .insert(&mut tx, request)
         .await
         .map_err(map_insert_error)?;
      tx.commit().await?;
      Ok(())
   }
}

/// 一意制約違反は「申請済み」として扱う（同時申請で後れを取った側）
fn map_insert_error(e: InfraError) -> CoreError {
   if e.as_conflict().is_some() {
      CoreError::DeletionRequestAlreadyCreated
   } else {
      CoreError::Database(e)
   }
}
