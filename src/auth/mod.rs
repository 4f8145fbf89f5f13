//! Access gate
//!
//! A single shared secret, configured once for the whole process, unlocks the
//! entry surface. There is no per-user identity and no lockout.

use std::fmt;

/// Gate guarding the entry surface
#[derive(Clone)]
pub struct AccessGate {
    secret: Option<String>,
    unlocked: bool,
}

impl fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessGate")
            .field("configured", &self.is_configured())
            .field("unlocked", &self.unlocked)
            .finish_non_exhaustive()
    }
}

impl AccessGate {
    /// Gate unlocked by `secret`
    ///
    /// Without a secret every attempt is refused.
    #[must_use]
    pub fn new(secret: Option<String>) -> Self {
        let secret = secret.filter(|s| !s.is_empty());
        if secret.is_none() {
            log::warn!("No access secret configured; the entry surface stays locked");
        }
        Self {
            secret,
            unlocked: false,
        }
    }

    /// Whether a secret is configured at all
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Whether a correct secret has been entered
    #[must_use]
    pub const fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Try a candidate secret; a correct one unlocks the gate for good
    pub fn attempt(&mut self, candidate: &str) -> bool {
        if self.unlocked {
            return true;
        }
        self.unlocked = self
            .secret
            .as_deref()
            .is_some_and(|secret| constant_time_eq(secret.as_bytes(), candidate.as_bytes()));

        if self.unlocked {
            log::info!("Access granted");
        } else {
            log::warn!("Rejected access attempt");
        }
        self.unlocked
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
