//! Data types for host detection.

use serde::{Deserialize, Serialize};

/// Browser family hosting the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowserFamily {
    Chrome,
    Firefox,
    Safari,
    Edge,
    Opera,
}

impl BrowserFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserFamily::Chrome => "chrome",
            BrowserFamily::Firefox => "firefox",
            BrowserFamily::Safari => "safari",
            BrowserFamily::Edge => "edge",
            BrowserFamily::Opera => "opera",
        }
    }
}

/// A yes/no question put to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmRequest {
    pub message: String,
    pub title: Option<String>,
    pub yes_label: String,
    pub no_label: String,
}
