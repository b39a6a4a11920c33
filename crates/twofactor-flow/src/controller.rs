//! The two-factor completion controller.

use crate::config::FlowConfig;
use crate::error::FlowResult;
use crate::flow_fsm::{CompletionMachine, CompletionMachineInput, FlowState};
use crate::ports::{InitOptions, LoginEngine, Navigator, StringCatalog, SuccessHook};
use crate::provider::TwoFactorProvider;
use context_bus::{ContextBus, SubscriptionId};
use host_probe::{BrowserFamily, ConfirmRequest, HostProbe};
use page_protocol_types::{InboundPageMessage, PageMessage, TabReference};
use std::sync::Arc;
use tab_bridge::{build_tab_reference, bundled_asset_url, TabHost};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// OS fingerprint marker for the Firefox hardware-key incompatibility.
///
/// Firefox on this exact Windows build cannot complete U2f-class
/// initialization inside the constrained popup; the path hangs instead of
/// failing. Matched as a substring, the way the fingerprint is reported.
const WINDOWS_10_FINGERPRINT: &str = "Windows NT 10.0;";

/// Collaborators the controller composes.
pub struct FlowDeps {
    pub engine: Arc<dyn LoginEngine>,
    pub probe: Arc<dyn HostProbe>,
    pub tabs: Arc<dyn TabHost>,
    pub navigator: Arc<dyn Navigator>,
    pub strings: Arc<dyn StringCatalog>,
    pub bus: ContextBus,
}

/// Orchestrates the 2FA step of the login flow inside the popup.
///
/// Single-owner: every method takes `&mut self` or `&self` and all state
/// mutation happens on the owning task. Bus messages queue on the
/// subscription channel and take effect only when the owner calls
/// [`drain_pending`] from its event loop.
///
/// [`drain_pending`]: TwoFactorController::drain_pending
pub struct TwoFactorController {
    engine: Arc<dyn LoginEngine>,
    probe: Arc<dyn HostProbe>,
    tabs: Arc<dyn TabHost>,
    navigator: Arc<dyn Navigator>,
    strings: Arc<dyn StringCatalog>,
    bus: ContextBus,
    config: FlowConfig,
    on_success: Option<SuccessHook>,
    machine: CompletionMachine,
    subscription: Option<SubscriptionId>,
    inbound: Option<mpsc::UnboundedReceiver<PageMessage>>,
    provider: Option<TwoFactorProvider>,
    hardware_key_enabled: bool,
    show_new_window_notice: bool,
}

impl TwoFactorController {
    pub fn new(deps: FlowDeps, config: FlowConfig) -> Self {
        Self {
            engine: deps.engine,
            probe: deps.probe,
            tabs: deps.tabs,
            navigator: deps.navigator,
            strings: deps.strings,
            bus: deps.bus,
            config,
            on_success: None,
            machine: CompletionMachine::new(),
            subscription: None,
            inbound: None,
            provider: None,
            hardware_key_enabled: true,
            show_new_window_notice: false,
        }
    }

    /// Inject the action to run after a successful submit.
    pub fn with_success_hook(mut self, hook: SuccessHook) -> Self {
        self.on_success = Some(hook);
        self
    }

    /// Activate the flow: subscribe, probe the host, initialize the base
    /// flow, and act on the resolved provider.
    ///
    /// Returns `Ok` with no further action when no provider resolves.
    /// Re-activation releases the previous subscription first, so at most
    /// one live subscription exists per controller.
    pub async fn activate(&mut self) -> FlowResult<()> {
        self.release_subscription();
        self.machine = CompletionMachine::new();
        self.provider = None;
        self.advance(CompletionMachineInput::Activate);

        let subscription = self.bus.subscribe();
        debug!(subscription_id = %subscription.id, "two-factor flow subscribed");
        self.subscription = Some(subscription.id);
        self.inbound = Some(subscription.receiver);

        let family = self.probe.browser_family();
        let fingerprint = self.probe.os_fingerprint();
        let embedded = self.probe.is_embedded_popup();

        // ref: https://bugzilla.mozilla.org/show_bug.cgi?id=1562620
        self.hardware_key_enabled = !(embedded
            && family == BrowserFamily::Firefox
            && fingerprint.contains(WINDOWS_10_FINGERPRINT));

        // Safari disallows some challenge flows inside the popup; the view
        // shows a may-continue-in-a-new-window notice.
        let is_safari = family == BrowserFamily::Safari;
        self.show_new_window_notice = is_safari;

        let options = InitOptions {
            enable_hardware_key: self.hardware_key_enabled,
        };
        let Some(provider) = self.engine.initialize(options).await? else {
            self.advance(CompletionMachineInput::NoProvider);
            debug!("no two-factor provider resolved");
            return Ok(());
        };
        self.provider = Some(provider);
        self.advance(CompletionMachineInput::ProviderSelected);
        info!(provider = ?provider, browser = family.as_str(), "two-factor provider resolved");

        let mut detached = false;
        if !is_safari && provider == TwoFactorProvider::Email && embedded {
            detached = self.offer_detach(&self.config.email_detach_prompt_key).await;
        }
        if !self.hardware_key_enabled && provider.is_hardware_key() && embedded {
            detached = self
                .offer_detach(&self.config.hardware_key_detach_prompt_key)
                .await;
        }
        if detached {
            self.advance(CompletionMachineInput::DetachConfirmed);
            return Ok(());
        }

        if is_safari && provider.is_duo() && self.dispatch_duo_relay(provider).await? {
            self.advance(CompletionMachineInput::RelayDispatched);
            return Ok(());
        }

        self.advance(CompletionMachineInput::AwaitUser);
        Ok(())
    }

    /// Process every bus message currently queued on the subscription.
    ///
    /// Call from the owning event loop. Messages arriving from other
    /// contexts take effect here and nowhere else.
    pub async fn drain_pending(&mut self) {
        let Some(mut receiver) = self.inbound.take() else {
            return;
        };
        while let Ok(message) = receiver.try_recv() {
            self.handle_inbound(message).await;
        }
        self.inbound = Some(receiver);
    }

    /// User-driven submit with the token typed into the form.
    pub async fn submit_token(&mut self, token: &str) {
        self.submit_with_notification(token, None).await;
    }

    /// Navigate to the screen listing the other available providers.
    pub fn open_provider_options(&self) {
        self.navigator.navigate(&self.config.options_route);
    }

    /// Deactivate the flow: release the subscription, then tear down the
    /// base flow. Safe to call repeatedly or without a prior activation.
    pub async fn deactivate(&mut self) {
        self.release_subscription();
        self.engine.teardown().await;
    }

    /// Current flow state.
    pub fn state(&self) -> FlowState {
        FlowState::from(self.machine.state())
    }

    /// The provider resolved by the last activation, if any.
    pub fn provider(&self) -> Option<TwoFactorProvider> {
        self.provider
    }

    /// Whether the view should show the may-continue-in-a-new-window notice.
    pub fn show_new_window_notice(&self) -> bool {
        self.show_new_window_notice
    }

    /// Whether the hardware-key initialization path was allowed to start.
    pub fn hardware_key_enabled(&self) -> bool {
        self.hardware_key_enabled
    }

    /// Whether a bus subscription is currently held.
    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    fn release_subscription(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.bus.unsubscribe(id);
            debug!(subscription_id = %id, "two-factor flow unsubscribed");
        }
        // Dropping the receiver discards anything still queued; nothing is
        // delivered after the handle is released.
        self.inbound = None;
    }

    fn advance(&mut self, input: CompletionMachineInput) {
        if self.machine.consume(&input).is_err() {
            debug!(state = ?self.machine.state(), input = ?input, "flow transition ignored");
        }
    }

    /// Ask the user whether to continue in a standalone window; detach on yes.
    async fn offer_detach(&self, message_key: &str) -> bool {
        let request = ConfirmRequest {
            message: self.strings.lookup(message_key),
            title: None,
            yes_label: self.strings.lookup(&self.config.yes_key),
            no_label: self.strings.lookup(&self.config.no_key),
        };
        let confirmed = self.probe.confirm(request).await;
        if confirmed {
            info!("continuing two-factor flow in a standalone window");
            self.probe.request_detach();
        }
        confirmed
    }

    /// Spawn the bundled challenge page in a full tab and send it the Duo
    /// challenge after the listener-attach delay.
    ///
    /// Returns whether the relay was dispatched. Fire-and-forget: the send
    /// is not acknowledged, and a tab that never attaches its listener in
    /// time silently loses the message.
    async fn dispatch_duo_relay(&mut self, provider: TwoFactorProvider) -> FlowResult<bool> {
        let Some(challenge) = self.engine.duo_challenge(provider) else {
            warn!(provider = ?provider, "duo challenge parameters unavailable, staying embedded");
            return Ok(false);
        };

        let page_url = bundled_asset_url(
            &self.tabs.extension_base_url(),
            &self.config.challenge_page_path,
        )?;
        let tab = self.tabs.create_tab(&page_url).await?;
        let reference = build_tab_reference(&tab);
        info!(tab_id = ?tab.id, "challenge tab spawned for duo relay");

        let message = PageMessage::duo_challenge(&challenge.host, &challenge.signature);
        let tabs = Arc::clone(&self.tabs);
        let delay = self.config.challenge_send_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tabs.send_to_tab(&reference, message).await;
        });
        Ok(true)
    }

    async fn handle_inbound(&mut self, message: PageMessage) {
        match message.classify() {
            Some(InboundPageMessage::DuoResponse {
                sig_value,
                sender_tab,
            }) => {
                debug!("duo response received from challenge page");
                self.submit_with_notification(&sig_value, sender_tab).await;
            }
            // Other extension traffic shares the bus; not ours.
            None => {}
        }
    }

    /// Submit the token through the base flow; on acceptance run the
    /// success hook, navigate, and notify the originating tab if one was
    /// supplied.
    async fn submit_with_notification(&mut self, token: &str, notify_tab: Option<TabReference>) {
        self.advance(CompletionMachineInput::TokenSubmitted);
        match self.engine.submit(token).await {
            Ok(()) => {
                self.advance(CompletionMachineInput::SubmitAccepted);
                info!("two-factor submit accepted");
                if let Some(hook) = &self.on_success {
                    hook().await;
                }
                self.navigator.navigate(&self.config.success_route);
                if let Some(tab) = notify_tab {
                    let tabs = Arc::clone(&self.tabs);
                    let delay = self.config.success_notify_delay;
                    tokio::spawn(async move {
                        tokio::time::sleep(delay).await;
                        tabs.send_to_tab(&tab, PageMessage::success_notice()).await;
                    });
                }
            }
            Err(err) => {
                // Verification outcomes belong to the base flow; record and
                // move on.
                self.advance(CompletionMachineInput::SubmitRejected);
                warn!(error = %err, "two-factor submit rejected");
            }
        }
    }
}
