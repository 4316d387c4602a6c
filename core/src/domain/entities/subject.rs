//! Subject entity: the identity a token is issued for.
//!
//! Subjects live in an external identity store; the token engine only ever
//! carries their id. The HTTP layer resolves the id back to a `Subject`
//! after a token has been validated.

use serde::{Deserialize, Serialize};

/// Default role for newly registered subjects
pub const DEFAULT_ROLE: &str = "user";

/// A subject known to the identity store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Opaque subject identifier, the value embedded in access token claims
    pub id: String,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Authorization role
    #[serde(default = "default_role")]
    pub role: String,
}

impl Subject {
    /// Creates a subject with the default role
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: default_role(),
        }
    }

    /// Sets the role
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }
}

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}
