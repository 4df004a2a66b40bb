//! Generic state machine container shared by the player and enemy brains.
//!
//! A machine owns at most one current state. Switching always runs the
//! outgoing state's exit hook, swaps, then runs the incoming state's enter
//! hook, even when both states are the same variant.

use crate::error::ControllerError;


/// Enter/exit hooks for a state driven by [`StateMachine`].
///
/// `C` is whatever borrowed context the owner hands in for the duration of
/// one call; states never keep references to it.
pub trait MachineState<C: ?Sized> {
    fn on_enter(&mut self, cx: &mut C);
    fn on_exit(&mut self, cx: &mut C);
}

#[derive(Debug, Clone)]
pub struct StateMachine<S> {
    current: Option<S>,
    default: S,
    transitions: u64,
}

impl<S: Clone> StateMachine<S> {
    pub fn new(default: S) -> Self {
        Self {
            current: None,
            default,
            transitions: 0,
        }
    }

    /// Enters the default state. Valid exactly once per machine.
    pub fn initialize<C: ?Sized>(&mut self, cx: &mut C) -> Result<(), ControllerError>
    where
        S: MachineState<C>,
    {
        if self.current.is_some() {
            return Err(ControllerError::AlreadyInitialized);
        }
        let default = self.default.clone();
        self.transition_to(default, cx);
        Ok(())
    }

    pub fn transition_to<C: ?Sized>(&mut self, next: S, cx: &mut C)
    where
        S: MachineState<C>,
    {
        if let Some(mut outgoing) = self.current.take() {
            outgoing.on_exit(cx);
        }
        let incoming = self.current.insert(next);
        incoming.on_enter(cx);
        self.transitions += 1;
    }

    pub fn current(&self) -> Option<&S> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut S> {
        self.current.as_mut()
    }

    pub fn is_initialized(&self) -> bool {
        self.current.is_some()
    }

    /// Number of completed transitions, including the initial one.
    pub fn transition_count(&self) -> u64 {
        self.transitions
    }
}
