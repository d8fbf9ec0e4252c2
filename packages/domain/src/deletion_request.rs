//! # 退会申請
//!
//! 顧客のアカウント削除（退会）申請を表すエンティティ。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`DeletionRequest`] | 退会申請 | 顧客 1 人につき未実行のものは最大 1 件 |
//! | [`RequesterName`] / [`RequesterAddress`] / [`RequesterPhone`] | 申請者連絡先 | 顧客プロフィールとは独立した、申請時に入力された連絡先 |
//!
//! ## ライフサイクル
//!
//! ```text
//! (作成: executed = false) ──履行プロセス──▶ (executed = true)
//! ```
//!
//! このサービスは作成のみ行う。`executed` の更新は外部の履行プロセスが担う。
//!
//! ## 不変条件
//!
//! - 同一顧客について `executed = false` の申請は最大 1 件
//!   （DB の部分一意インデックスでも保証する）

use chrono::{DateTime, Utc};

use crate::customer::CustomerId;

define_uuid_id! {
    /// 退会申請 ID（作成時に UUID v4 で採番）
    pub struct DeletionRequestId;
}

define_validated_string! {
    /// 申請者名
    pub struct RequesterName {
        label: "申請者名",
    }
}

define_validated_string! {
    /// 申請者住所
    pub struct RequesterAddress {
        label: "住所",
        pii: true,
    }
}

define_validated_string! {
    /// 申請者電話番号
    pub struct RequesterPhone {
        label: "電話番号",
        pii: true,
    }
}

/// 退会申請の新規作成パラメータ
pub struct NewDeletionRequest {
    pub id:          DeletionRequestId,
    pub customer_id: CustomerId,
    pub name:        RequesterName,
    pub address:     RequesterAddress,
    pub phone:       RequesterPhone,
    pub now:         DateTime<Utc>,
}

/// DB の行から復元する際のパラメータ
pub struct DeletionRequestRecord {
    pub id:          DeletionRequestId,
    pub customer_id: CustomerId,
    pub name:        RequesterName,
    pub address:     RequesterAddress,
    pub phone:       RequesterPhone,
    pub executed:    bool,
    pub created_at:  DateTime<Utc>,
    pub updated_at:  DateTime<Utc>,
}

/// 退会申請エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionRequest {
    id:          DeletionRequestId,
    customer_id: CustomerId,
    name:        RequesterName,
    address:     RequesterAddress,
    phone:       RequesterPhone,
    executed:    bool,
    created_at:  DateTime<Utc>,
    updated_at:  DateTime<Utc>,
}

impl DeletionRequest {
    /// 未実行の退会申請を作成する
    ///
    /// `created_at` と `updated_at` はどちらも `now` になる。
    pub fn new(params: NewDeletionRequest) -> Self {
        Self {
            id:          params.id,
            customer_id: params.customer_id,
            name:        params.name,
            address:     params.address,
            phone:       params.phone,
            executed:    false,
            created_at:  params.now,
            updated_at:  params.now,
        }
    }

    pub fn from_db(record: DeletionRequestRecord) -> Self {
        Self {
            id:          record.id,
            customer_id: record.customer_id,
            name:        record.name,
            address:     record.address,
            phone:       record.phone,
            executed:    record.executed,
            created_at:  record.created_at,
            updated_at:  record.updated_at,
        }
    }

    pub fn id(&self) -> &DeletionRequestId {
        &self.id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn name(&self) -> &RequesterName {
        &self.name
    }

    pub fn address(&self) -> &RequesterAddress {
        &self.address
    }

    pub fn phone(&self) -> &RequesterPhone {
        &self.phone
    }

    pub fn executed(&self) -> bool {
        self.executed
    }

    /// 履行待ち（未実行）かどうか
    pub fn is_active(&self) -> bool {
        !self.executed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::DomainError;

    fn test_now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn new_request() -> DeletionRequest {
        DeletionRequest::new(NewDeletionRequest {
            id:          DeletionRequestId::new(),
            customer_id: CustomerId::parse_v4("733f1ba6-1f62-4495-bf33-6f181fdf1030").unwrap(),
            name:        RequesterName::new("John Doe").unwrap(),
            address:     RequesterAddress::new("Av. Brasil, 1000").unwrap(),
            phone:       RequesterPhone::new("1122334455").unwrap(),
            now:         test_now(),
        })
    }

    #[test]
    fn test_newで作成した申請は未実行である() {
        let request = new_request();

        assert!(!request.executed());
        assert!(request.is_active());
    }

    #[test]
    fn test_newで作成日時と更新日時が同じになる() {
        let request = new_request();

        assert_eq!(request.created_at(), test_now());
        assert_eq!(request.updated_at(), test_now());
    }

    #[test]
    fn test_from_dbで実行済みの申請はアクティブではない() {
        let base = new_request();
        let restored = DeletionRequest::from_db(DeletionRequestRecord {
            id:          base.id().clone(),
            customer_id: base.customer_id().clone(),
            name:        base.name().clone(),
            address:     base.address().clone(),
            phone:       base.phone().clone(),
            executed:    true,
            created_at:  base.created_at(),
            updated_at:  test_now(),
        });

        assert!(!restored.is_active());
    }

    #[test]
    fn test_連絡先フィールドは入力された値をそのまま保持する() {
        let name = RequesterName::new("  John Doe \n").unwrap();
        let address = RequesterAddress::new("   ").unwrap();

        assert_eq!(name.as_str(), "  John Doe \n");
        assert_eq!(address.as_str(), "   ");
    }

    #[test]
    fn test_連絡先フィールドが空文字ならバリデーションエラー() {
        let input = "";

        assert!(matches!(
            RequesterName::new(input),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            RequesterAddress::new(input),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            RequesterPhone::new(input),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_連絡先フィールドに文字数の上限はない() {
        let long = "あ".repeat(300);

        let address = RequesterAddress::new(long.clone()).unwrap();

        assert_eq!(address.as_str(), long);
    }

    #[test]
    fn test_住所と電話番号のdebug出力はマスクされる() {
        let request = new_request();

        let debug = format!("{request:?}");

        assert!(!debug.contains("Av. Brasil"));
        assert!(!debug.contains("1122334455"));
        assert!(debug.contains("John Doe"));
    }
}
