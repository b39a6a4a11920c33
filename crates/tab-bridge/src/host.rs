//! The platform port for tab operations.

use crate::error::TabBridgeResult;
use crate::types::NativeTab;
use async_trait::async_trait;
use page_protocol_types::{PageMessage, TabReference};
use url::Url;

/// What a concrete browser backend implements.
///
/// One implementation per host browser lives outside this workspace; tests
/// use recording fakes.
#[async_trait]
pub trait TabHost: Send + Sync {
    /// Open a new full browser tab at `url`.
    async fn create_tab(&self, url: &Url) -> TabBridgeResult<NativeTab>;

    /// Send a message to a tab, best-effort.
    ///
    /// No return value: the host browser exposes no delivery guarantee, so
    /// none is offered here. Implementations log failures internally.
    async fn send_to_tab(&self, tab: &TabReference, message: PageMessage);

    /// The URL root under which the extension's bundled assets are served.
    fn extension_base_url(&self) -> Url;
}
