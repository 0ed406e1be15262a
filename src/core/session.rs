use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::models::user::{User, find_user};
use crate::storage::{KEY_BRANCH, KEY_BRANCH_LEGACY, KEY_ROLE, KEY_USERNAME, KeyValueStore};

/// Reads and writes the persisted session values.
pub struct SessionState;

impl SessionState {
    /// Check the credentials and persist role and username.
    /// Nothing is written on failure.
    pub fn login<S: KeyValueStore>(
        store: &mut S,
        username: &str,
        password: &str,
    ) -> AppResult<&'static User> {
        let user = find_user(username, password).ok_or(AppError::InvalidCredentials)?;

        store.set(KEY_ROLE, user.role)?;
        store.set(KEY_USERNAME, user.username)?;
        Ok(user)
    }

    /// Wipe the whole store, in-progress shift included.
    pub fn logout<S: KeyValueStore>(store: &mut S) -> AppResult<()> {
        store.clear()
    }

    pub fn set_branch<S: KeyValueStore>(store: &mut S, branch: &str) -> AppResult<()> {
        if branch.is_empty() {
            return Err(AppError::Validation("branch name cannot be empty".to_string()));
        }
        store.set(KEY_BRANCH, branch)
    }

    /// Build the session context. The branch falls back to the legacy key
    /// and then to `default_branch`.
    pub fn load<S: KeyValueStore>(store: &S, default_branch: &str) -> AppResult<Session> {
        let role = store.get(KEY_ROLE)?;
        let username = store.get(KEY_USERNAME)?;

        let branch = match store.get(KEY_BRANCH)? {
            Some(b) => b,
            None => store
                .get(KEY_BRANCH_LEGACY)?
                .unwrap_or_else(|| default_branch.to_string()),
        };

        Ok(Session::new(username, role, branch))
    }
}
