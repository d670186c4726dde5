//! Todo サービスのドメイン型
//!
//! ワイヤ形式と同一の最小レコードと、バックエンド非依存の
//! 不透明な識別子を定義します。永続化の詳細はここには置きません。

use serde::{Deserialize, Serialize};

/// バックエンドが採番する不透明な識別子
///
/// DynamoDB バックエンドは ULID（26 文字の Crockford Base32）、
/// インメモリバックエンドは連番整数の 10 進文字列を格納します。
/// 形式の検証規則は採番したバックエンド側が持ちます。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// 生文字列から識別子を作ります（形式検証は行いません）。
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 唯一の永続レコード
///
/// `body` は作成時に非空であること（HTTP 層が検証）、
/// `id` は採番後に不変であることが不変条件です。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub completed: bool,
    pub body: String,
}
