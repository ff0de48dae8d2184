use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{lenient, lenient_id};
use crate::normalize::{normalize_one, SESSION_KEYS};

/// The signed-in account, as reported by the session endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub role: Option<String>,
}

impl SessionUser {
    /// Reads the session endpoint's payload. A payload without a user id,
    /// such as `{ "success": false, "message": ... }`, means nobody is
    /// signed in.
    pub fn from_payload(raw: &Value) -> Option<Self> {
        normalize_one::<SessionUser>(raw, SESSION_KEYS).filter(|user| !user.id.is_empty())
    }

    pub fn is_farmer(&self) -> bool {
        self.role.as_deref() == Some("farmer")
    }
}
