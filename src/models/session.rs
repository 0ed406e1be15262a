use super::role::{Capabilities, classify};
use crate::errors::{AppError, AppResult};

/// Session context read once per command and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: Option<String>,
    pub role: Option<String>,
    pub branch_scope: String,
    pub capabilities: Capabilities,
}

impl Session {
    pub fn new(username: Option<String>, role: Option<String>, branch_scope: String) -> Self {
        let capabilities = classify(role.as_deref());
        Self {
            username,
            role,
            branch_scope,
            capabilities,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.role.is_some()
    }

    pub fn require_login(&self) -> AppResult<&Capabilities> {
        if self.is_logged_in() {
            Ok(&self.capabilities)
        } else {
            Err(AppError::NotLoggedIn)
        }
    }

    pub fn require_admin(&self) -> AppResult<()> {
        if self.require_login()?.is_admin {
            Ok(())
        } else {
            Err(AppError::Unauthorized("admin role required".to_string()))
        }
    }

    pub fn require_branch(&self) -> AppResult<()> {
        if self.require_login()?.is_branch {
            Ok(())
        } else {
            Err(AppError::Unauthorized(
                "shifts are tracked for branch users only".to_string(),
            ))
        }
    }
}
