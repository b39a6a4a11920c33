//! Browser tab creation and addressing for the Latchkey extension.
//!
//! A pure platform abstraction with no state of its own: the [`TabHost`]
//! port is what a concrete browser backend implements, and the free
//! functions are pure conversions used on both sides of it.
//!
//! Message delivery to a tab is best-effort. The host browser gives no
//! delivery acknowledgment, so neither does this crate: a message sent to a
//! tab whose page has not attached its listener yet is silently lost.

mod error;
mod host;
mod operations;
mod types;

pub use error::{TabBridgeError, TabBridgeResult};
pub use host::TabHost;
pub use operations::{build_tab_reference, bundled_asset_url};
pub use types::NativeTab;
