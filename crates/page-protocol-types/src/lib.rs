//! Pure inter-context message types for the Latchkey extension.
//!
//! Data types and serialization only: no I/O, no async, no transport. This
//! is the shared language between the popup, the background process, and
//! pages running in spawned tabs.
//!
//! The wire envelope is exactly `{command, data, senderTab}`; the pages that
//! send and receive it depend on those field names staying fixed.

use serde::{Deserialize, Serialize};

/// Command strings understood by the two-factor page protocol.
pub mod commands {
    /// Popup → page: challenge data or a success notice.
    pub const PAGE_DATA: &str = "2faPageData";
    /// Page → popup: a completed challenge response.
    pub const PAGE_RESPONSE: &str = "2faPageResponse";
}

/// Platform-assigned identifier of a browser tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(pub i64);

/// Serializable handle to a spawned tab.
///
/// Safe to echo back through the message bus unchanged; holding one is a
/// capability to address that tab with a follow-up message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabReference {
    pub id: TabId,
    #[serde(rename = "windowId", skip_serializing_if = "Option::is_none")]
    pub window_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// The inter-context wire envelope.
///
/// `command` stays a plain string on this layer so that unrecognized
/// commands pass through without failing deserialization; [`classify`]
/// is the typed view over known commands.
///
/// [`classify`]: PageMessage::classify
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMessage {
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(rename = "senderTab", skip_serializing_if = "Option::is_none")]
    pub sender_tab: Option<TabReference>,
}

/// Payload sub-types of a `2faPageData` message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChallengePagePayload {
    /// Duo challenge parameters for the hosted challenge page.
    Duo { host: String, signature: String },
    /// The login completed; the page may close or transition.
    Success,
}

/// Payload sub-types of a `2faPageResponse` message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageResponsePayload {
    Duo {
        #[serde(rename = "sigValue")]
        sig_value: String,
    },
}

/// Typed view of an inbound envelope the controller acts on.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundPageMessage {
    /// A signed Duo response relayed back from the challenge page.
    DuoResponse {
        sig_value: String,
        sender_tab: Option<TabReference>,
    },
}

impl PageMessage {
    /// Build a `2faPageData`/`duo` challenge message.
    pub fn duo_challenge(host: impl Into<String>, signature: impl Into<String>) -> Self {
        let payload = ChallengePagePayload::Duo {
            host: host.into(),
            signature: signature.into(),
        };
        Self {
            command: commands::PAGE_DATA.to_string(),
            data: serde_json::to_value(payload).ok(),
            sender_tab: None,
        }
    }

    /// Build a `2faPageData`/`success` notice.
    pub fn success_notice() -> Self {
        Self {
            command: commands::PAGE_DATA.to_string(),
            data: serde_json::to_value(ChallengePagePayload::Success).ok(),
            sender_tab: None,
        }
    }

    /// Build a `2faPageResponse`/`duo` message as the challenge page sends it.
    pub fn duo_response(sig_value: impl Into<String>, sender_tab: Option<TabReference>) -> Self {
        let payload = PageResponsePayload::Duo {
            sig_value: sig_value.into(),
        };
        Self {
            command: commands::PAGE_RESPONSE.to_string(),
            data: serde_json::to_value(payload).ok(),
            sender_tab,
        }
    }

    /// Classify an envelope into a typed inbound message.
    ///
    /// Total over arbitrary input: unknown commands, unknown payload
    /// sub-types, and malformed payloads all yield `None`.
    pub fn classify(&self) -> Option<InboundPageMessage> {
        if self.command != commands::PAGE_RESPONSE {
            return None;
        }
        let data = self.data.as_ref()?;
        match serde_json::from_value::<PageResponsePayload>(data.clone()) {
            Ok(PageResponsePayload::Duo { sig_value }) => Some(InboundPageMessage::DuoResponse {
                sig_value,
                sender_tab: self.sender_tab.clone(),
            }),
            Err(_) => None,
        }
    }
}
