//! Pure conversions for tab addressing.

use crate::error::{TabBridgeError, TabBridgeResult};
use crate::types::NativeTab;
use page_protocol_types::TabReference;
use url::Url;

/// Convert a native tab handle into its serializable reference form.
///
/// The reference is safe to echo through the message bus; a page that
/// received it can be answered later without re-querying the browser.
pub fn build_tab_reference(tab: &NativeTab) -> TabReference {
    TabReference {
        id: tab.id,
        window_id: tab.window_id,
        url: Some(tab.url.to_string()),
    }
}

/// Resolve a bundled asset path against the extension's base URL.
///
/// Only bare relative paths are accepted: anything rooted, scheme-carrying,
/// or attempting to traverse upward is rejected rather than resolved
/// outside the extension root.
pub fn bundled_asset_url(base: &Url, relative: &str) -> TabBridgeResult<Url> {
    if relative.is_empty()
        || relative.starts_with('/')
        || relative.contains("..")
        || relative.contains("://")
    {
        return Err(TabBridgeError::InvalidAssetPath(relative.to_string()));
    }
    base.join(relative)
        .map_err(|_| TabBridgeError::InvalidAssetPath(relative.to_string()))
}
