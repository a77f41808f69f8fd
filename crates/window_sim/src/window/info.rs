//! Read-only window snapshots
//!
//! Content hooks run while the manager holds its windows mutably, so
//! windows never see each other directly. Instead each frame the manager
//! hands them a [`WindowDirectory`]: an id-indexed set of [`WindowInfo`]
//! snapshots taken after input resolution and before any hook runs.

use std::collections::HashMap;

use super::{Permissions, WindowGeometry, WindowId};
use crate::foundation::math::Vec2i;

/// Snapshot of one window's public state
#[derive(Debug, Clone, PartialEq)]
pub struct WindowInfo {
    /// Window identifier
    pub id: WindowId,
    /// Display name
    pub name: String,
    /// Position, size, scale and banner
    pub geometry: WindowGeometry,
    /// Pointer capabilities
    pub permissions: Permissions,
    /// Holds focus
    pub in_focus: bool,
    /// Gained focus since its last content update
    pub gained_focus: bool,
    /// Lost focus since its last content update
    pub lost_focus: bool,
    /// Target of the active resize session
    pub resizing: bool,
    /// Neither updated nor drawn
    pub hidden: bool,
}

impl WindowInfo {
    /// Logical width
    pub fn width(&self) -> i32 {
        self.geometry.size.x
    }

    /// Logical height
    pub fn height(&self) -> i32 {
        self.geometry.size.y
    }

    /// A surface point in this window's buffer coordinates
    pub fn local_point(&self, point: Vec2i) -> Vec2i {
        self.geometry.to_local(point)
    }

    /// Whether a surface point lies on this window's body
    pub fn contains(&self, point: Vec2i) -> bool {
        self.geometry.body_contains(point)
    }
}

/// Id-indexed snapshots of every live window
#[derive(Debug, Clone, Default)]
pub struct WindowDirectory {
    windows: HashMap<WindowId, WindowInfo>,
}

impl WindowDirectory {
    /// Build a directory from snapshots
    pub fn new(windows: impl IntoIterator<Item = WindowInfo>) -> Self {
        Self {
            windows: windows.into_iter().map(|info| (info.id, info)).collect(),
        }
    }

    /// Look up a window by id
    pub fn get(&self, id: WindowId) -> Option<&WindowInfo> {
        self.windows.get(&id)
    }

    /// The focused window, if any
    pub fn focused(&self) -> Option<&WindowInfo> {
        self.windows.values().find(|info| info.in_focus)
    }

    /// Number of windows
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// True when there are no windows
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// All snapshots, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &WindowInfo> {
        self.windows.values()
    }
}
