//! Error types for the two-factor flow.

use thiserror::Error;

/// Errors surfaced by the base login flow behind the [`crate::ports::LoginEngine`] port.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The verification call rejected the supplied token.
    #[error("Two-factor verification rejected: {0}")]
    Rejected(String),

    /// The login flow could not run at all (no pending login, transport down).
    #[error("Login flow unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by controller activation.
///
/// The control-flow branches of the flow itself (no provider, declined
/// confirmation, lost relay response, unknown bus message) are never errors;
/// only platform failures reach this type.
#[derive(Debug, Error)]
pub enum FlowError {
    /// The base login flow failed to initialize.
    #[error("Login engine error: {0}")]
    Engine(#[from] EngineError),

    /// Tab creation or asset resolution failed.
    #[error("Tab bridge error: {0}")]
    TabBridge(#[from] tab_bridge::TabBridgeError),
}

/// Result type alias using FlowError.
pub type FlowResult<T> = Result<T, FlowError>;
