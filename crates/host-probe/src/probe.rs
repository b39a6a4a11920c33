//! The host-environment port.

use crate::types::{BrowserFamily, ConfirmRequest};
use async_trait::async_trait;

/// Host characteristics and surface control.
///
/// One implementation per host browser lives outside this workspace; tests
/// use scripted fakes.
#[async_trait]
pub trait HostProbe: Send + Sync {
    /// The browser family hosting the extension.
    fn browser_family(&self) -> BrowserFamily;

    /// Raw OS fingerprint string, user-agent style.
    ///
    /// Callers match known substrings against this; the probe makes no
    /// judgment about what a fingerprint implies.
    fn os_fingerprint(&self) -> String;

    /// Whether the UI is currently embedded in the constrained popup.
    fn is_embedded_popup(&self) -> bool;

    /// Move the UI from the popup into a standalone window.
    fn request_detach(&self);

    /// Put a yes/no question to the user; `false` on decline.
    async fn confirm(&self, request: ConfirmRequest) -> bool;
}
