//! Error types for tab bridge operations.

use thiserror::Error;

/// Errors that can occur while creating or addressing tabs.
#[derive(Debug, Error)]
pub enum TabBridgeError {
    /// The host browser refused to create a tab.
    #[error("Tab creation failed: {0}")]
    CreateFailed(String),

    /// A bundled asset path did not resolve to a URL under the extension root.
    #[error("Invalid bundled asset path: {0}")]
    InvalidAssetPath(String),
}

/// Result type alias using TabBridgeError.
pub type TabBridgeResult<T> = Result<T, TabBridgeError>;
