//! # リポジトリ実装
//!
//! 顧客と退会申請の永続化を担当するリポジトリを提供する。
//!
//! - 読み取りメソッドはプールから直接クエリする
//! - 書き込みメソッドは [`TxContext`](crate::db::TxContext) を必須引数に取る
//! - 0 行は [`InfraErrorKind::NotFound`](crate::InfraErrorKind::NotFound) として返す

pub mod customer_repository;
pub mod deletion_request_repository;

pub use customer_repository::{CustomerRepository, PostgresCustomerRepository};
pub use deletion_request_repository::{
   DeletionRequestRepository,
   PostgresDeletionRequestRepository,
};
