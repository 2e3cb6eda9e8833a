//! User record type.

use serde::{Deserialize, Serialize};

/// A user identity record. Users are created by a separate collaborator;
/// the core only ever resolves them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}
