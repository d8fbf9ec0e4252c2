//! # テスト用モックリポジトリ
//!
//! ユースケーステストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! kokyaku-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! 各モックは呼び出し回数を記録する。入力が不正な場合に
//! ストアへ一切アクセスしないことの検証に使う。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kokyaku_domain::{
   customer::{Customer, CustomerId},
   deletion_request::DeletionRequest,
};

use crate::{
   db::{TransactionManager, TxContext},
   error::InfraError,
   repository::{CustomerRepository, DeletionRequestRepository},
};

// ===== MockCustomerRepository =====

#[derive(Clone, Default)]
pub struct MockCustomerRepository {
   customers: Arc<Mutex<Vec<Customer>>>,
   failure:   Arc<Mutex<Option<String>>>,
   get_calls: Arc<Mutex<usize>>,
}

impl MockCustomerRepository {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn add_customer(&self, customer: Customer) {
      self.customers.lock().unwrap().push(customer);
   }

   /// 以降の呼び出しをすべて `Unexpected` エラーにする
   pub fn fail_with(&self, message: impl Into<String>) {
      *self.failure.lock().unwrap() = Some(message.into());
   }

   pub fn get_calls(&self) -> usize {
      *self.get_calls.lock().unwrap()
   }

   fn check_failure(&self) -> Result<(), InfraError> {
      match self.failure.lock().unwrap().as_ref() {
         Some(message) => Err(InfraError::unexpected(message.clone())),
         None => Ok(()),
      }
   }
}

#[async_trait]
impl CustomerRepository for MockCustomerRepository {
   async fn get(&self, id: &CustomerId) -> Result<Customer, InfraError> {
      *self.get_calls.lock().unwrap() += 1;
      self.check_failure()?;

      self
         .customers
         .lock()
         .unwrap()
         .iter()
         .find(|c| c.id() == id)
         .cloned()
         .ok_or_else(|| InfraError::not_found("Customer", id.to_string()))
   }

   async fn delete(&self, id: &CustomerId) -> Result<(), InfraError> {
      self.check_failure()?;

      let mut customers = self.customers.lock().unwrap();
      let before = customers.len();
      customers.retain(|c| c.id() != id);
      if customers.len() == before {
         return Err(InfraError::not_found("Customer", id.to_string()));
      }
      Ok(())
   }
}

// ===== MockDeletionRequestRepository =====

#[derive(Clone, Default)]
pub struct MockDeletionRequestRepository {
   requests:     Arc<Mutex<Vec<DeletionRequest>>>,
   failure:      Arc<Mutex<Option<String>>>,
   stale_reads:  Arc<Mutex<bool>>,
   get_calls:    Arc<Mutex<usize>>,
   insert_calls: Arc<Mutex<usize>>,
}

impl MockDeletionRequestRepository {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn add_request(&self, request: DeletionRequest) {
      self.requests.lock().unwrap().push(request);
   }

   /// 以降の呼び出しをすべて `Unexpected` エラーにする
   pub fn fail_with(&self, message: impl Into<String>) {
      *self.failure.lock().unwrap() = Some(message.into());
   }

   /// `get_active_by_customer` が常に `NotFound` を返すようにする
   ///
   /// 同時リクエストがどちらも「未申請」を読んだ状況を再現する。
   /// `insert` の一意性チェックは有効なまま。
   pub fn with_stale_reads(self) -> Self {
      *self.stale_reads.lock().unwrap() = true;
      self
   }

   pub fn requests(&self) -> Vec<DeletionRequest> {
      self.requests.lock().unwrap().clone()
   }

   pub fn get_calls(&self) -> usize {
      *self.get_calls.lock().unwrap()
   }

   pub fn insert_calls(&self) -> usize {
      *self.insert_calls.lock().unwrap()
   }

   fn check_failure(&self) -> Result<(), InfraError> {
      match self.failure.lock().unwrap().as_ref() {
         Some(message) => Err(InfraError::unexpected(message.clone())),
         None => Ok(()),
      }
   }
}

#[async_trait]
impl DeletionRequestRepository for MockDeletionRequestRepository {
   async fn get_active_by_customer(
      &self,
      customer_id: &CustomerId,
   ) -> Result<DeletionRequest, InfraError> {
      *self.get_calls.lock().unwrap() += 1;
      self.check_failure()?;

      let not_found = || InfraError::not_found("DeletionRequest", customer_id.to_string());
      if *self.stale_reads.lock().unwrap() {
         return Err(not_found());
      }

      self
         .requests
         .lock()
         .unwrap()
         .iter()
         .find(|r| r.customer_id() == customer_id && r.is_active())
         .cloned()
         .ok_or_else(not_found)
   }

   async fn insert(
      &self,
      _tx: &mut TxContext,
      request: &DeletionRequest,
   ) -> Result<(), InfraError> {
      *self.insert_calls.lock().unwrap() += 1;
      self.check_failure()?;

      let mut requests = self.requests.lock().unwrap();
      let duplicated = requests
         .iter()
         .any(|r| r.customer_id() == request.customer_id() && r.is_active());
      if request.is_active() && duplicated {
         return Err(InfraError::conflict(
            "DeletionRequest",
            request.customer_id().to_string(),
         ));
      }
      requests.push(request.clone());
      Ok(())
   }
}

// ===== MockTransactionManager =====

/// 常に Mock TxContext を返す TransactionManager
#[derive(Clone, Default)]
pub struct MockTransactionManager {
   begin_calls:    Arc<Mutex<usize>>,
   commit_failure: Arc<Mutex<Option<String>>>,
}

impl MockTransactionManager {
   pub fn new() -> Self {
      Self::default()
   }

   /// 以降に払い出す TxContext のコミットをすべて失敗させる
   pub fn fail_commit_with(&self, message: impl Into<String>) {
      *self.commit_failure.lock().unwrap() = Some(message.into());
   }

   pub fn begin_calls(&self) -> usize {
      *self.begin_calls.lock().unwrap()
   }
}

#[async_trait]
impl TransactionManager for MockTransactionManager {
   async fn begin(&self) -> Result<TxContext, InfraError> {
      *self.begin_calls.lock().unwrap() += 1;
      match self.commit_failure.lock().unwrap().clone() {
         Some(message) => Ok(TxContext::mock_failing_commit(message)),
         None => Ok(TxContext::mock()),
      }
   }
}
