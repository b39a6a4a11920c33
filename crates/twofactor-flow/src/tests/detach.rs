//! The offer-to-detach decision.

use super::harness::{harness, MAC_UA, WIN10_UA};
use crate::{FlowState, TwoFactorProvider};
use host_probe::BrowserFamily;

#[tokio::test]
async fn email_in_popup_offers_detach_and_detaches_on_yes() {
    let mut h = harness(
        BrowserFamily::Chrome,
        MAC_UA,
        true,
        Some(TwoFactorProvider::Email),
    );
    h.probe.answer_confirm(true);

    h.controller.activate().await.unwrap();

    let confirms = h.probe.confirms();
    assert_eq!(confirms.len(), 1);
    assert_eq!(confirms[0].message, "popup2faCloseMessage");
    assert_eq!(confirms[0].yes_label, "yes");
    assert_eq!(confirms[0].no_label, "no");
    assert_eq!(h.probe.detaches(), 1);
    assert_eq!(h.controller.state(), FlowState::DetachRequested);
}

#[tokio::test]
async fn email_detach_declined_stays_embedded() {
    let mut h = harness(
        BrowserFamily::Chrome,
        MAC_UA,
        true,
        Some(TwoFactorProvider::Email),
    );
    h.probe.answer_confirm(false);

    h.controller.activate().await.unwrap();

    assert_eq!(h.probe.confirms().len(), 1);
    assert_eq!(h.probe.detaches(), 0);
    assert_eq!(h.controller.state(), FlowState::AwaitingUserSubmit);
}

#[tokio::test]
async fn email_outside_popup_gets_no_offer() {
    let mut h = harness(
        BrowserFamily::Chrome,
        MAC_UA,
        false,
        Some(TwoFactorProvider::Email),
    );

    h.controller.activate().await.unwrap();

    assert!(h.probe.confirms().is_empty());
    assert_eq!(h.controller.state(), FlowState::AwaitingUserSubmit);
}

#[tokio::test]
async fn email_on_safari_gets_no_offer() {
    let mut h = harness(
        BrowserFamily::Safari,
        MAC_UA,
        true,
        Some(TwoFactorProvider::Email),
    );

    h.controller.activate().await.unwrap();

    assert!(h.probe.confirms().is_empty());
    assert_eq!(h.probe.detaches(), 0);
    // The notice flag covers Safari instead.
    assert!(h.controller.show_new_window_notice());
}

#[tokio::test]
async fn disabled_hardware_key_in_popup_offers_detach() {
    let mut h = harness(
        BrowserFamily::Firefox,
        WIN10_UA,
        true,
        Some(TwoFactorProvider::U2f),
    );
    h.probe.answer_confirm(true);

    h.controller.activate().await.unwrap();

    let confirms = h.probe.confirms();
    assert_eq!(confirms.len(), 1);
    assert_eq!(confirms[0].message, "popupU2fCloseMessage");
    assert_eq!(h.probe.detaches(), 1);
    assert_eq!(h.controller.state(), FlowState::DetachRequested);
}

#[tokio::test]
async fn enabled_hardware_key_gets_no_offer() {
    let mut h = harness(
        BrowserFamily::Chrome,
        MAC_UA,
        true,
        Some(TwoFactorProvider::U2f),
    );

    h.controller.activate().await.unwrap();

    assert!(h.probe.confirms().is_empty());
    assert_eq!(h.controller.state(), FlowState::AwaitingUserSubmit);
}

#[tokio::test]
async fn other_providers_never_prompt_or_spawn_tabs() {
    for provider in [
        TwoFactorProvider::Authenticator,
        TwoFactorProvider::YubiKey,
        TwoFactorProvider::Remember,
    ] {
        let mut h = harness(BrowserFamily::Chrome, MAC_UA, true, Some(provider));

        h.controller.activate().await.unwrap();

        assert!(
            h.probe.confirms().is_empty(),
            "unexpected confirm for {provider:?}"
        );
        assert!(
            h.tabs.created().is_empty(),
            "unexpected tab for {provider:?}"
        );
        assert_eq!(h.controller.state(), FlowState::AwaitingUserSubmit);
    }
}

#[tokio::test]
async fn duo_off_safari_never_prompts_or_spawns_tabs() {
    for provider in [TwoFactorProvider::Duo, TwoFactorProvider::OrganizationDuo] {
        let mut h = harness(BrowserFamily::Firefox, MAC_UA, true, Some(provider));

        h.controller.activate().await.unwrap();

        assert!(h.probe.confirms().is_empty());
        assert!(h.tabs.created().is_empty());
        assert_eq!(h.controller.state(), FlowState::AwaitingUserSubmit);
    }
}
