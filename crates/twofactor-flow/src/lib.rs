//! Two-factor completion orchestration for the Latchkey popup.
//!
//! This crate owns the decision logic of the 2FA step of the login flow:
//! - which provider is active and what that implies for the constrained
//!   popup surface,
//! - when to offer the user a detach into a standalone window,
//! - how to relay a Duo challenge to a spawned tab on Safari and consume
//!   the signed response coming back over the context bus,
//! - how to tell that tab the login succeeded.
//!
//! The actual verification call, session persistence, string tables, and
//! navigation are all consumed through ports; see [`ports`].
//!
//! The controller is single-owner: all of its state is mutated from the
//! owning task. Cross-context messages queue on the bus subscription and
//! only take effect when the owner pumps them via
//! [`TwoFactorController::drain_pending`].

mod config;
mod controller;
mod error;
mod flow_fsm;
pub mod ports;
mod provider;

#[cfg(test)]
mod tests;

pub use config::FlowConfig;
pub use controller::{FlowDeps, TwoFactorController};
pub use error::{EngineError, FlowError, FlowResult};
pub use flow_fsm::completion_machine;
pub use flow_fsm::{
    CompletionMachine, CompletionMachineInput, CompletionMachineState, FlowState,
};
pub use provider::{DuoChallenge, TwoFactorProvider};
