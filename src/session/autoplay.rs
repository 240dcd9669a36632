//! Autoplay controller.
//!
//! A small state machine that decides whether a scheduler tick may run a
//! step. It never touches the game state itself; `Session` does that.
//!
//! ```text
//! Stopped --start--> Ready --tick--> AwaitingPresentation
//!    ^                 ^                    |
//!    |                 +--presentation------+
//!    +------stop (from any state)-----------+
//! ```

use serde::{Deserialize, Serialize};

use crate::core::action::Command;
use crate::core::error::GameResult;
use crate::rules::CommandResult;

/// Controller state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoplayState {
    #[default]
    Stopped,

    /// Running; the next tick performs a step.
    Ready,

    /// Running, but the previous step has not finished presenting yet.
    AwaitingPresentation,
}

impl AutoplayState {
    #[must_use]
    pub fn is_running(self) -> bool {
        self != AutoplayState::Stopped
    }
}

/// One autoplay step: what the policy chose and how it went.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutoplayStep {
    pub command: Command,
    pub result: GameResult<CommandResult>,
}

/// Outcome of `Session::autoplay_tick`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Autoplay is stopped; nothing happened.
    Idle,

    /// The previous step is still presenting; nothing happened.
    Busy,

    Stepped(AutoplayStep),
}

impl TickOutcome {
    #[must_use]
    pub fn step(&self) -> Option<&AutoplayStep> {
        match self {
            TickOutcome::Stepped(step) => Some(step),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Autoplay {
    state: AutoplayState,
    await_presentation: bool,
    steps: u64,
}

impl Autoplay {
    pub(crate) fn new(await_presentation: bool) -> Self {
        Self {
            state: AutoplayState::Stopped,
            await_presentation,
            steps: 0,
        }
    }

    pub(crate) fn state(&self) -> AutoplayState {
        self.state
    }

    pub(crate) fn steps(&self) -> u64 {
        self.steps
    }

    /// Returns `false` if already running.
    pub(crate) fn start(&mut self) -> bool {
        if self.state.is_running() {
            return false;
        }
        self.state = AutoplayState::Ready;
        true
    }

    /// Returns `false` if already stopped.
    pub(crate) fn stop(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }
        self.state = AutoplayState::Stopped;
        true
    }

    /// The refusal for a tick in the current state, if any.
    pub(crate) fn refuse_tick(&self) -> Option<TickOutcome> {
        match self.state {
            AutoplayState::Stopped => Some(TickOutcome::Idle),
            AutoplayState::AwaitingPresentation => Some(TickOutcome::Busy),
            AutoplayState::Ready => None,
        }
    }

    /// Record a finished step.
    ///
    /// Leaves the controller alone if the step itself stopped autoplay.
    pub(crate) fn step_applied(&mut self) {
        self.steps += 1;
        if self.state == AutoplayState::Ready && self.await_presentation {
            self.state = AutoplayState::AwaitingPresentation;
        }
    }

    /// Returns `true` if this released a waiting controller.
    pub(crate) fn presentation_complete(&mut self) -> bool {
        if self.state == AutoplayState::AwaitingPresentation {
            self.state = AutoplayState::Ready;
            true
        } else {
            false
        }
    }
}
