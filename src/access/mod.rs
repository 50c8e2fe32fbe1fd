//! Admin area authorization by corporate email domain.

use crate::config::AccessConfig;
use crate::error::{EngineError, EngineResult};

/// Decides who may enter the admin area.
///
/// The caller is expected to be authenticated already; only the email
/// domain is checked here.
///
/// # Examples
///
/// ```
/// use clt_calc::access::AdminPolicy;
///
/// let policy = AdminPolicy::new("empresa.com.br");
/// assert!(policy.is_admin(" Ana@Empresa.com.br "));
/// assert!(!policy.is_admin("ana@evil-empresa.com.br"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPolicy {
    suffix: String,
}

impl AdminPolicy {
    /// Creates a policy admitting addresses under `domain`.
    pub fn new(domain: &str) -> Self {
        let domain = domain.trim().trim_start_matches('@').to_lowercase();
        Self {
            suffix: format!("@{}", domain),
        }
    }

    /// Returns true when `email` belongs to the admin domain.
    pub fn is_admin(&self, email: &str) -> bool {
        let email = email.trim().to_lowercase();
        email.len() > self.suffix.len() && email.ends_with(&self.suffix)
    }

    /// Fails with `AccessDenied` unless `email` belongs to the admin domain.
    pub fn authorize(&self, email: &str) -> EngineResult<()> {
        if self.is_admin(email) {
            Ok(())
        } else {
            Err(EngineError::AccessDenied {
                email: email.trim().to_string(),
            })
        }
    }
}

impl From<&AccessConfig> for AdminPolicy {
    fn from(config: &AccessConfig) -> Self {
        Self::new(&config.admin_email_domain)
    }
}
