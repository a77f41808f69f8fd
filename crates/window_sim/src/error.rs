//! Error types for window management
//!
//! Every failure here is local to one call: the manager's state is left
//! unchanged and the caller decides how to recover.

use crate::window::WindowId;
use thiserror::Error;

/// Errors returned by window manager operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// A window with this id is already live
    #[error("non-unique id {id} given to window \"{name}\"")]
    DuplicateId {
        /// The colliding id
        id: WindowId,
        /// Name of the rejected window
        name: String,
    },

    /// No live window has this id
    #[error("no window with id {0}")]
    UnknownId(WindowId),

    /// Scale factors must be at least 1
    #[error("invalid scale {scale} for window {id}")]
    InvalidScale {
        /// Target window
        id: WindowId,
        /// Rejected scale
        scale: i32,
    },

    /// Logical sizes must be at least 1x1
    #[error("invalid size {width}x{height} for window {id}")]
    InvalidSize {
        /// Target window
        id: WindowId,
        /// Rejected width
        width: i32,
        /// Rejected height
        height: i32,
    },
}

/// Result type alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;
