//! Current-user record, read from localStorage by the login flow's key.
//!
//! The record is opaque to this code: only the id is inspected, everything
//! else is carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The actor presumed logged in.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Remaining fields of the stored record, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CurrentUser {
    /// The id bookings are attributed to; "guest" when missing or empty.
    pub fn user_id(&self) -> &str {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => "guest",
        }
    }
}
