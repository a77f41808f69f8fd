//! # Window Sim
//!
//! A software compositor that simulates a desktop inside one host-owned
//! render surface.
//!
//! ## Features
//!
//! - **Virtual Windows**: Each window owns an off-screen pixel buffer drawn by its content
//! - **Z-Order and Focus**: The frontmost window always holds focus
//! - **Pointer Interaction**: Click to focus, drag by the banner, resize from the edges
//! - **Headless Surface**: Drive frames without a host engine for tests and tools
//!
//! ## Quick Start
//!
//! ```rust
//! use window_sim::prelude::*;
//!
//! struct Gradient;
//!
//! impl WindowContent for Gradient {
//!     fn on_update(&mut self, ctx: &mut WindowContext<'_>, _elapsed: f32) -> bool {
//!         for x in 0..ctx.width() {
//!             let level = (x * 255 / ctx.width()) as u8;
//!             let height = ctx.height();
//!             ctx.surface().draw_line(Vec2i::new(x, 0), Vec2i::new(x, height - 1), Pixel::grey(level));
//!         }
//!         true
//!     }
//! }
//!
//! let mut surface = HeadlessSurface::new(320, 240);
//! let mut manager = WindowManager::new(CompositorConfig::default());
//!
//! let window = Window::new(WindowConfig::new(1, "Gradient", 64, 32).with_position(40, 40), Gradient);
//! manager.add_window(window, &mut surface).unwrap();
//!
//! manager.update_all(1.0 / 60.0, &mut surface);
//! surface.end_frame();
//! assert_eq!(manager.focused_id(), Some(1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod error;
pub mod foundation;
pub mod manager;
pub mod surface;
pub mod window;

pub use config::{CompositorConfig, Config, ConfigError, InputConfig, ThemeConfig};
pub use error::{WindowError, WindowResult};
pub use manager::{ResizeEdges, Session, WindowManager};
pub use surface::{ButtonState, DrawCommand, HeadlessSurface, MouseButton, Pixel, PixelBuffer, Surface};
pub use window::{
    Lifecycle, Permissions, Window, WindowConfig, WindowContent, WindowContext, WindowDirectory,
    WindowGeometry, WindowId, WindowInfo,
};

/// Common imports for compositor users
pub mod prelude {
    pub use crate::{
        foundation::math::{Rect, Vec2i},
        CompositorConfig, HeadlessSurface, MouseButton, Permissions, Pixel, PixelBuffer, Surface,
        Window, WindowConfig, WindowContent, WindowContext, WindowError, WindowId, WindowManager,
    };
}
