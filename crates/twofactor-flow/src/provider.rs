//! Provider selection and challenge parameter types.

use serde::{Deserialize, Serialize};

/// The active two-factor method for the current login attempt.
///
/// Resolved exactly once per attempt by the base login flow; the controller
/// only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwoFactorProvider {
    Authenticator,
    Email,
    Duo,
    YubiKey,
    U2f,
    Remember,
    OrganizationDuo,
}

impl TwoFactorProvider {
    /// Duo-class providers share the relayed challenge flow.
    pub fn is_duo(&self) -> bool {
        matches!(
            self,
            TwoFactorProvider::Duo | TwoFactorProvider::OrganizationDuo
        )
    }

    /// Hardware-key-class providers need the U2f initialization path.
    pub fn is_hardware_key(&self) -> bool {
        matches!(self, TwoFactorProvider::U2f)
    }
}

/// Challenge parameters for a Duo-class provider.
///
/// Fetched by the base login flow alongside provider selection; the
/// controller forwards them to the challenge page untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuoChallenge {
    pub host: String,
    pub signature: String,
}
