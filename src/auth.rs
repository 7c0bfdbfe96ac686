// ============================================================================
// Access Guard - Shared-Secret Gate for Administrative Operations
// ============================================================================
//
// The mode is fixed at startup from configuration rather than re-checked
// per request: an unconfigured (or blank) secret selects `Open`, used for
// local development, where every request passes. With `SharedSecret` the
// caller must present the exact configured value.
//
// ============================================================================

/// How administrative requests are authorized, selected once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// No secret configured; everything is allowed.
    Open,
    /// Callers must present this exact secret.
    SharedSecret(String),
}

impl AuthMode {
    /// Blank and absent secrets both mean `Open`, matching the storefront's
    /// local-dev behavior.
    pub fn from_secret(secret: Option<String>) -> Self {
        match secret {
            Some(value) if !value.trim().is_empty() => Self::SharedSecret(value),
            _ => Self::Open,
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unauthorized")]
pub struct Unauthorized;

pub struct AccessGuard {
    mode: AuthMode,
}

impl AccessGuard {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> &AuthMode {
        &self.mode
    }

    /// Check a presented secret; `None` means the caller sent nothing.
    /// Denial must short-circuit before any privileged operation runs.
    pub fn authorize(&self, provided: Option<&str>) -> Result<(), Unauthorized> {
        match &self.mode {
            AuthMode::Open => Ok(()),
            // TODO: use a constant-time comparison here
            AuthMode::SharedSecret(expected) => {
                if provided == Some(expected.as_str()) {
                    Ok(())
                } else {
                    Err(Unauthorized)
                }
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
