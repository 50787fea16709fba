use std::sync::Arc;

use crate::domain::entities::role::Role;
use crate::usecase::ports::repo::{PreferenceStore, RepoError};

pub struct RoleSelection {
    store: Arc<dyn PreferenceStore>,
    current: Role,
}

impl RoleSelection {
    /// Reads the stored role. A missing or unreadable value falls back to
    /// the default role.
    pub fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let current = match store.load_role() {
            Ok(Some(role)) => role,
            Ok(None) => Role::default(),
            Err(err) => {
                log::warn!("failed to load stored role, using default: {err}");
                Role::default()
            }
        };
        Self { store, current }
    }

    pub fn current(&self) -> Role {
        self.current
    }

    /// Switches role and persists it. The in-memory role only changes once
    /// the store accepted it.
    pub fn select(&mut self, role: Role) -> Result<(), RepoError> {
        if role == self.current {
            return Ok(());
        }
        self.store.save_role(role)?;
        log::info!("role changed from {} to {role}", self.current);
        self.current = role;
        Ok(())
    }
}
