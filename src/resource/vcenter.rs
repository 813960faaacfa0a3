//! VCenter: a virtual center attached to a VDI.

use super::{Account, Resource, Vdi};
use serde::{Deserialize, Serialize};

/// A virtual center record from `/api/v1/vcenters/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VCenter {
    /// Server identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Parent desktop (read-only on the server).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vdi: Option<Vdi>,
    /// Host name or IP of the virtual center.
    pub address: String,
    /// Login user.
    #[serde(default)]
    pub user: String,
    /// Login password; may be blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Creation timestamp (server-assigned).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp (server-assigned).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl VCenter {
    /// Create an unsaved record.
    pub fn new(address: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            id: None,
            vdi: None,
            address: address.into(),
            user: user.into(),
            password: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Create payload for `POST /api/v1/vcenters/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VCenterDraft {
    /// Host name or IP.
    pub address: String,
    /// Login user.
    pub user: String,
    /// Login password.
    #[serde(default)]
    pub password: String,
}

impl Resource for VCenter {
    const KIND: &'static str = "VCenter";
    const TITLE: &'static str = "Virtual Center";
    const COLLECTION: &'static str = "vcenters";

    type Draft = VCenterDraft;

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn weight_text(&self) -> &str {
        &self.address
    }

    // VCenters carry no author of their own.
    fn from_draft(draft: &VCenterDraft, _author: Option<&Account>) -> Self {
        Self {
            password: Some(draft.password.clone()),
            ..Self::new(draft.address.clone(), draft.user.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_nested_vdi() {
        let vcenter: VCenter = serde_json::from_value(json!({
            "id": 2,
            "vdi": {"id": 4, "address": "10.1.2.3", "user": "u", "domain": "D"},
            "address": "vc01.corp.local",
            "user": "root",
            "password": ""
        }))
        .unwrap();

        assert_eq!(vcenter.vdi.as_ref().and_then(|v| v.id), Some(4));
        assert_eq!(vcenter.weight_text(), "vc01.corp.local");
        assert_eq!(vcenter.password.as_deref(), Some(""));
    }

    #[test]
    fn test_draft_without_password() {
        let draft: VCenterDraft =
            serde_json::from_value(json!({"address": "vc", "user": "root"})).unwrap();
        assert_eq!(draft.password, "");
        let local = VCenter::from_draft(&draft, None);
        assert_eq!(local.id(), None);
        assert_eq!(local.address, "vc");
    }
}
