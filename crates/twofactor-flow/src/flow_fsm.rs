//! Two-factor completion state machine using rust-fsm.
//!
//! ## State Diagram
//!
//! ```text
//! ┌──────────┐ Activate ┌──────────────┐ NoProvider
//! │   Idle   │ ───────► │ Initializing │ ───────────► Idle
//! └──────────┘          └──────┬───────┘
//!                              │ ProviderSelected
//!                              ▼
//!                    ┌──────────────────┐ DetachConfirmed ┌─────────────────┐
//!                    │ ProviderResolved │ ──────────────► │ DetachRequested │
//!                    └──────┬───────────┘                 └────────┬────────┘
//!                           │ AwaitUser / RelayDispatched          │
//!                           ▼                                      │
//!        ┌───────────────────────────────────────┐                 │
//!        │ AwaitingUserSubmit / AwaitingRelay... │                 │
//!        └──────────────────┬────────────────────┘                 │
//!                           │ TokenSubmitted ◄────────────────────┘
//!                           ▼
//!                    ┌───────────┐ SubmitAccepted ──► Success
//!                    │ Submitted │
//!                    └───────────┘ SubmitRejected ──► Failure ─(TokenSubmitted)─► Submitted
//! ```
//!
//! `DetachRequested` is a side branch, not a terminal: the user may still
//! complete the flow from the detached window. `AwaitingRelayResponse` is
//! entered only on the Safari+Duo branch and exited only by the matching
//! bus message.

use rust_fsm::*;
use serde::{Deserialize, Serialize};

state_machine! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub completion_machine(Idle)

    Idle => {
        Activate => Initializing
    },
    Initializing => {
        NoProvider => Idle,
        ProviderSelected => ProviderResolved
    },
    ProviderResolved => {
        AwaitUser => AwaitingUserSubmit,
        RelayDispatched => AwaitingRelayResponse,
        DetachConfirmed => DetachRequested
    },
    DetachRequested => {
        AwaitUser => AwaitingUserSubmit,
        TokenSubmitted => Submitted
    },
    AwaitingUserSubmit => {
        TokenSubmitted => Submitted
    },
    AwaitingRelayResponse => {
        TokenSubmitted => Submitted
    },
    Submitted => {
        SubmitAccepted => Success,
        SubmitRejected => Failure
    },
    Failure => {
        TokenSubmitted => Submitted
    }
}

// Re-export the generated types with clearer names
pub use completion_machine::Input as CompletionMachineInput;
pub use completion_machine::State as CompletionMachineState;
pub use completion_machine::StateMachine as CompletionMachine;

/// Simplified flow state for the view layer and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    Idle,
    Initializing,
    ProviderResolved,
    AwaitingUserSubmit,
    AwaitingRelayResponse,
    DetachRequested,
    Submitted,
    Success,
    Failure,
}

impl FlowState {
    /// Terminal states delegate everything further to external collaborators.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowState::Success | FlowState::Failure)
    }
}

impl From<&CompletionMachineState> for FlowState {
    fn from(state: &CompletionMachineState) -> Self {
        match state {
            CompletionMachineState::Idle => FlowState::Idle,
            CompletionMachineState::Initializing => FlowState::Initializing,
            CompletionMachineState::ProviderResolved => FlowState::ProviderResolved,
            CompletionMachineState::AwaitingUserSubmit => FlowState::AwaitingUserSubmit,
            CompletionMachineState::AwaitingRelayResponse => FlowState::AwaitingRelayResponse,
            CompletionMachineState::DetachRequested => FlowState::DetachRequested,
            CompletionMachineState::Submitted => FlowState::Submitted,
            CompletionMachineState::Success => FlowState::Success,
            CompletionMachineState::Failure => FlowState::Failure,
        }
    }
}
