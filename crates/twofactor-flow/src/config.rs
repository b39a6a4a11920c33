//! Flow configuration.

use std::time::Duration;

/// Tunables for the two-factor flow.
///
/// The two delays are timing workarounds, not protocol requirements: the
/// challenge-send delay gives the spawned tab's page script time to attach
/// its message listener, and the success-notify delay lets that page settle
/// before being told to close. Neither is acknowledged by the other side.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Wait before sending challenge data to a freshly spawned tab.
    pub challenge_send_delay: Duration,
    /// Wait before telling the challenge tab the login succeeded.
    pub success_notify_delay: Duration,
    /// Bundled page that hosts the relayed challenge.
    pub challenge_page_path: String,
    /// Route to navigate to after a successful submit.
    pub success_route: String,
    /// Route listing the other available providers.
    pub options_route: String,
    /// String key for the Email detach confirmation.
    pub email_detach_prompt_key: String,
    /// String key for the hardware-key detach confirmation.
    pub hardware_key_detach_prompt_key: String,
    /// String key for the confirmation yes label.
    pub yes_key: String,
    /// String key for the confirmation no label.
    pub no_key: String,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            challenge_send_delay: Duration::from_millis(500),
            success_notify_delay: Duration::from_millis(1000),
            challenge_page_path: "2fa/index.html".to_string(),
            success_route: "/tabs/vault".to_string(),
            options_route: "/2fa-options".to_string(),
            email_detach_prompt_key: "popup2faCloseMessage".to_string(),
            hardware_key_detach_prompt_key: "popupU2fCloseMessage".to_string(),
            yes_key: "yes".to_string(),
            no_key: "no".to_string(),
        }
    }
}
