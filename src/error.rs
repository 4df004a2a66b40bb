//! Error types for controller actions that can be handed bad parameters.

use thiserror::Error;

/// Failures raised by movement actions and controller wiring.
///
/// Guard rejections (a dash that is on cooldown, knockback during
/// invincibility) are not errors; they are ordinary outcomes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    #[error("jump height must be a positive finite number, got {height}")]
    InvalidJumpHeight { height: f32 },

    #[error("jump needs downward gravity, effective gravity is {gravity}")]
    NoDownwardGravity { gravity: f32 },

    #[error("{collaborator} is not wired: {reason}")]
    MissingCollaborator {
        collaborator: &'static str,
        reason: String,
    },

    #[error("state machine was already initialized")]
    AlreadyInitialized,
}
