//! Window manager
//!
//! [`WindowManager`] owns the windows, keeps them in z-order and runs the
//! pointer interaction state machine (focus, drag and edge resize) every
//! frame before updating and compositing the windows.

mod interaction;
mod session;
mod window_list;


pub use session::{detect_resize_edges, minimum_width, resized_geometry, ResizeEdges, Session};
pub use window_list::WindowManager;
