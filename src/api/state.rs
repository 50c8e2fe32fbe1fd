//! Shared application state for the calculator API.

use std::sync::Arc;

use crate::access::AdminPolicy;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration and the admin policy derived from it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    admin_policy: Arc<AdminPolicy>,
}

impl AppState {
    /// Creates the application state from a loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        let admin_policy = AdminPolicy::from(config.config().access());
        Self {
            config: Arc::new(config),
            admin_policy: Arc::new(admin_policy),
        }
    }

    /// Returns the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the admin access policy.
    pub fn admin_policy(&self) -> &AdminPolicy {
        &self.admin_policy
    }
}
