//! Virtual windows
//!
//! A [`Window`] is a rectangle of pixels with an optional title banner,
//! owned by a [`WindowManager`](crate::manager::WindowManager). What it
//! shows is up to its [`WindowContent`].

mod config;
mod content;
mod entity;
mod geometry;
mod info;
mod permissions;
mod render;

pub use config::WindowConfig;
pub use content::{WindowContent, WindowContext};
pub use entity::{Lifecycle, Window};
pub use geometry::{WindowGeometry, DEFAULT_BANNER_HEIGHT};
pub use info::{WindowDirectory, WindowInfo};
pub use permissions::Permissions;
pub use render::title_capacity;

/// Window identifier, unique within a manager
pub type WindowId = u32;
