//! Admin authorization.
//!
//! Exactly one email address is the admin. The same [`AdminPolicy`] value is
//! handed to the card composer and to the address book handlers so the two
//! can never disagree about who the admin is.

/// The single-admin policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPolicy {
    admin_email: Option<String>,
}

impl AdminPolicy {
    /// Creates a policy for the given admin email. An empty value disables
    /// admin access entirely.
    pub fn new(admin_email: Option<String>) -> Self {
        Self {
            admin_email: admin_email.filter(|email| !email.is_empty()),
        }
    }

    /// Returns true if `email` is exactly the configured admin email.
    ///
    /// The comparison is case-sensitive.
    pub fn is_admin(&self, email: Option<&str>) -> bool {
        match (self.admin_email.as_deref(), email) {
            (Some(admin), Some(email)) => admin == email,
            _ => false,
        }
    }
}
