//! Ports consumed by the controller.
//!
//! The base login flow, navigation, and string lookup are explicit
//! collaborators the controller composes, with injected values instead of
//! subclass field overrides.

use crate::error::EngineError;
use crate::provider::{DuoChallenge, TwoFactorProvider};
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Knobs the controller may set before base initialization starts.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Whether the hardware-key (U2f-class) initialization path may start.
    pub enable_hardware_key: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            enable_hardware_key: true,
        }
    }
}

/// The base login flow: provider resolution, verification, teardown.
///
/// Credential handling, the network verification call, and session state
/// all live behind this port.
#[async_trait]
pub trait LoginEngine: Send + Sync {
    /// Run base initialization and resolve the active provider.
    ///
    /// `None` means no two-factor step is required or selectable yet,
    /// which is not an error.
    async fn initialize(
        &self,
        options: InitOptions,
    ) -> Result<Option<TwoFactorProvider>, EngineError>;

    /// Challenge parameters already fetched for a Duo-class provider.
    fn duo_challenge(&self, provider: TwoFactorProvider) -> Option<DuoChallenge>;

    /// Perform the verification call with the supplied token.
    async fn submit(&self, token: &str) -> Result<(), EngineError>;

    /// Base flow teardown.
    async fn teardown(&self);
}

/// Route navigation after the flow leaves this screen.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Internationalized string lookup.
pub trait StringCatalog: Send + Sync {
    fn lookup(&self, key: &str) -> String;
}

/// Injected action run after a successful submit, before navigation.
pub type SuccessHook = Arc<dyn Fn() -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;
