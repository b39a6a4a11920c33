//! Host browser and popup-surface detection for the Latchkey extension.
//!
//! Reports the characteristics the login flow branches on: which browser
//! family is hosting the extension, the OS fingerprint substring source,
//! and whether the UI is currently running inside the constrained popup
//! surface as opposed to a standalone window.
//!
//! The probe only reports and executes; deciding what a given host
//! combination means is the caller's business.

mod probe;
mod types;

pub use probe::HostProbe;
pub use types::{BrowserFamily, ConfirmRequest};
