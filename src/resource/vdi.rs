//! VDI: a virtual desktop endpoint owned by an account.

use super::{Account, Resource};
use serde::{Deserialize, Serialize};

/// A virtual desktop record from `/api/v1/vdis/`.
///
/// `address` is required; a payload without it fails to decode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vdi {
    /// Server identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Owning account (read-only on the server).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Account>,
    /// Host name or IP of the desktop.
    pub address: String,
    /// Login user on the desktop.
    #[serde(default)]
    pub user: String,
    /// Windows domain.
    #[serde(default)]
    pub domain: String,
    /// Login password, only present when the server echoes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Creation timestamp (server-assigned).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp (server-assigned).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Vdi {
    /// Create an unsaved record.
    pub fn new(address: impl Into<String>, user: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            id: None,
            author: None,
            address: address.into(),
            user: user.into(),
            domain: domain.into(),
            password: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Username of the owning account, if known.
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().map(|a| a.username.as_str())
    }
}

/// Create payload for `POST /api/v1/vdis/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VdiDraft {
    /// Host name or IP.
    pub address: String,
    /// Login user.
    pub user: String,
    /// Login password.
    pub password: String,
    /// Windows domain.
    pub domain: String,
}

impl Resource for Vdi {
    const KIND: &'static str = "VDI";
    const TITLE: &'static str = "VDI";
    const COLLECTION: &'static str = "vdis";

    type Draft = VdiDraft;

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn weight_text(&self) -> &str {
        &self.address
    }

    fn from_draft(draft: &VdiDraft, author: Option<&Account>) -> Self {
        Self {
            author: author.cloned(),
            password: Some(draft.password.clone()),
            ..Self::new(draft.address.clone(), draft.user.clone(), draft.domain.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_server_payload() {
        let vdi: Vdi = serde_json::from_value(json!({
            "id": 4,
            "author": {"id": 1, "username": "jdoe", "email": "jdoe@corp.local"},
            "address": "10.1.2.3",
            "user": "administrator",
            "domain": "CORP",
            "password": "secret",
            "created_at": "2015-06-01T10:00:00Z",
            "updated_at": "2015-06-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(vdi.id, Some(4));
        assert_eq!(vdi.author_name(), Some("jdoe"));
        assert_eq!(vdi.weight_text(), "10.1.2.3");
    }

    #[test]
    fn test_decode_requires_address() {
        let result = serde_json::from_value::<Vdi>(json!({"id": 1, "user": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_draft_carries_author() {
        let draft = VdiDraft {
            address: "desk-7".to_string(),
            user: "ops".to_string(),
            password: "pw".to_string(),
            domain: "LAB".to_string(),
        };
        let vdi = Vdi::from_draft(&draft, Some(&Account::named("alice")));
        assert_eq!(vdi.id, None);
        assert_eq!(vdi.author_name(), Some("alice"));
        assert_eq!(vdi.domain, "LAB");
    }

    #[test]
    fn test_encode_skips_unset_fields() {
        let value = serde_json::to_value(Vdi::new("h", "u", "d")).unwrap();
        assert_eq!(value, json!({"address": "h", "user": "u", "domain": "d"}));
    }
}
