//! Identity capture — who the application is submitted as.
//!
//! The portal does not collect a name or email yet. `PlaceholderIdentity` stands in
//! for that step and keeps the multipart `name`/`email` fields populated.

pub const PLACEHOLDER_NAME: &str = "Test Candidate";
pub const PLACEHOLDER_EMAIL: &str = "test@example.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateIdentity {
    pub name: String,
    pub email: String,
}

/// Supplies the identity fields sent with every application.
pub trait IdentityProvider: Send + Sync {
    fn capture(&self) -> CandidateIdentity;
}

/// Fixed identity, optionally overridden through configuration.
#[derive(Debug, Clone)]
pub struct PlaceholderIdentity {
    identity: CandidateIdentity,
}

impl PlaceholderIdentity {
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self {
            identity: CandidateIdentity {
                name: name.unwrap_or_else(|| PLACEHOLDER_NAME.to_string()),
                email: email.unwrap_or_else(|| PLACEHOLDER_EMAIL.to_string()),
            },
        }
    }
}

impl Default for PlaceholderIdentity {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl IdentityProvider for PlaceholderIdentity {
    fn capture(&self) -> CandidateIdentity {
        self.identity.clone()
    }
}
