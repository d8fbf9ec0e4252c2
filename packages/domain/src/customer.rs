//! # 顧客
//!
//! 顧客エンティティを定義する。
//!
//! 顧客は外部の登録プロセスで作成され、このサービスでは参照のみ行う。
//! 退会申請が履行された後は、履行プロセスによって行ごと削除されうる。

use chrono::{DateTime, Utc};

define_uuid_id! {
    /// 顧客 ID
    ///
    /// 不変かつ一意。外部入力（URL パス）から受け取る場合は
    /// [`CustomerId::parse_v4`] で検証する。
    pub struct CustomerId;
}

/// 認証情報のハッシュ値
///
/// `Debug` 出力はマスクする。
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialHash(String);

impl CredentialHash {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for CredentialHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CredentialHash").field(&"[REDACTED]").finish()
    }
}

/// 顧客エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id:              CustomerId,
    document_id:     String,
    credential_hash: CredentialHash,
    is_anonymous:    bool,
    created_at:      DateTime<Utc>,
    updated_at:      DateTime<Utc>,
}

impl Customer {
    /// DB の行から復元する
    pub fn from_db(
        id: CustomerId,
        document_id: String,
        credential_hash: CredentialHash,
        is_anonymous: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            document_id,
            credential_hash,
            is_anonymous,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    /// 本人確認書類の番号
    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn credential_hash(&self) -> &CredentialHash {
        &self.credential_hash
    }

    pub fn is_anonymous(&self) -> bool {
        self.is_anonymous
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
    use rstest::rstest;

    use super::*;
    use crate::DomainError;

    #[test]
    fn test_parse_v4_正しいuuid_v4を受け付ける() {
        let id = CustomerId::parse_v4("733f1ba6-1f62-4495-bf33-6f181fdf1030").unwrap();

        assert_eq!(id.to_string(), "733f1ba6-1f62-4495-bf33-6f181fdf1030");
    }

    #[rstest]
    #[case::空文字("")]
    #[case::uuidではない("not-a-uuid")]
    #[case::バージョン1("c232ab00-9414-11ec-b3c8-9f6bdeced846")]
    #[case::バージョン7("01890a5d-ac96-774b-bcce-b302099a8057")]
    #[case::ハイフンなし("733f1ba61f624495bf336f181fdf1030")]
    #[case::波括弧付き("{733f1ba6-1f62-4495-bf33-6f181fdf1030}")]
    #[case::バリアント不正("733f1ba6-1f62-4495-cf33-6f181fdf1030")]
    #[case::大文字("733F1BA6-1F62-4495-BF33-6F181FDF1030")]
    fn test_parse_v4_不正な形式はバリデーションエラー(#[case] input: &str) {
        let result = CustomerId::parse_v4(input);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_newで生成したidはuuid_v4である() {
        let id = CustomerId::new();

        assert_eq!(id.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_credential_hashのdebug出力はマスクされる() {
        let hash = CredentialHash::new("$argon2id$v=19$secret");

        let debug = format!("{hash:?}");

        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret"));
    }
}
