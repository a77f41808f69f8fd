//! Pointer interaction sessions
//!
//! The manager runs at most one pointer interaction at a time. Resize
//! detection and the per-frame resize step are pure functions over a
//! window's geometry so they can be checked without a surface.

use bitflags::bitflags;

use crate::config::InputConfig;
use crate::foundation::math::{div_ceil, Rect, Vec2i};
use crate::surface::MouseButton;
use crate::window::{Permissions, WindowGeometry, WindowId};

bitflags! {
    /// Window edges that follow the pointer during a resize
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ResizeEdges: u8 {
        /// Left edge (right edge stays anchored)
        const LEFT = 1;
        /// Right edge
        const RIGHT = 2;
        /// Top of the banner (bottom edge stays anchored)
        const TOP = 4;
        /// Bottom edge
        const BOTTOM = 8;
    }
}

/// The active pointer interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    /// Nothing in progress
    #[default]
    Idle,
    /// A window edge follows the pointer until the primary button is released
    Resizing {
        /// Window being resized
        window: WindowId,
        /// Edges being dragged
        edges: ResizeEdges,
    },
    /// A window follows the pointer until `button` is released
    Dragging {
        /// Window being dragged
        window: WindowId,
        /// Pointer position relative to the window's position at grab time
        offset: Vec2i,
        /// Button that started the drag
        button: MouseButton,
    },
}

impl Session {
    /// The window the session acts on
    pub const fn window(&self) -> Option<WindowId> {
        match self {
            Self::Idle => None,
            Self::Resizing { window, .. } | Self::Dragging { window, .. } => Some(*window),
        }
    }

    /// No interaction in progress
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Which edges a primary press at `pointer` would grab
///
/// Bands of `resize_band` pixels flank the window's real bounds and are
/// tested right, left, bottom, top. Side bands pick up the bottom edge near
/// the lower corners; the bottom and top bands pick up a side within
/// `corner_grab` pixels of a corner.
pub fn detect_resize_edges(
    geometry: &WindowGeometry,
    pointer: Vec2i,
    input: &InputConfig,
) -> Option<ResizeEdges> {
    // Edges saturate at the ends of `i32`
    let band = input.resize_band;
    let corner = input.corner_grab;
    let left_edge = geometry.position.x;
    let right_edge = left_edge.saturating_add(geometry.body_width());
    let top_edge = geometry.position.y.saturating_sub(geometry.banner_height());
    let bottom_edge = geometry.position.y.saturating_add(geometry.body_height());

    let near_bottom = |edges: ResizeEdges| {
        if pointer.y > bottom_edge.saturating_sub(corner) {
            edges | ResizeEdges::BOTTOM
        } else {
            edges
        }
    };
    let near_side = |edges: ResizeEdges| {
        if pointer.x < left_edge.saturating_add(corner) {
            edges | ResizeEdges::LEFT
        } else if pointer.x > right_edge.saturating_sub(corner) {
            edges | ResizeEdges::RIGHT
        } else {
            edges
        }
    };

    let outer_left = left_edge.saturating_sub(band);
    let outer_right = right_edge.saturating_add(band - 1);
    let right = Rect::from_corners(right_edge, top_edge, outer_right, bottom_edge);
    let left = Rect::from_corners(outer_left, top_edge, left_edge.saturating_sub(1), bottom_edge);
    let bottom = Rect::from_corners(outer_left, bottom_edge, outer_right, bottom_edge.saturating_add(band));
    let top = Rect::from_corners(outer_left, top_edge.saturating_sub(band), outer_right, top_edge.saturating_sub(1));

    if right.contains(pointer) {
        Some(near_bottom(ResizeEdges::RIGHT))
    } else if left.contains(pointer) {
        Some(near_bottom(ResizeEdges::LEFT))
    } else if bottom.contains(pointer) {
        Some(near_side(ResizeEdges::BOTTOM))
    } else if top.contains(pointer) {
        Some(near_side(ResizeEdges::TOP))
    } else {
        None
    }
}

/// Narrowest logical width a window may be resized to
///
/// Bannered windows with a close glyph stay wide enough to show it.
pub fn minimum_width(geometry: &WindowGeometry, permissions: Permissions, input: &InputConfig) -> i32 {
    if geometry.has_banner() && permissions.contains(Permissions::CLOSE) {
        div_ceil(input.close_glyph_width, geometry.scale.max(1)).max(1)
    } else {
        1
    }
}

/// Geometry after one resize step toward `pointer`
///
/// Only axes the window may resize change. Sizes are converted to logical
/// units and clamped between the minimums and the largest size whose
/// footprint still fits in `i32`; left and top resizes keep the opposite
/// edge where it was.
pub fn resized_geometry(
    geometry: &WindowGeometry,
    edges: ResizeEdges,
    pointer: Vec2i,
    permissions: Permissions,
    input: &InputConfig,
) -> WindowGeometry {
    let scale = geometry.scale.max(1);
    let (x, y) = (geometry.position.x, geometry.position.y);
    let width = geometry.body_width();
    let height = geometry.body_height();
    let banner = geometry.banner_height();
    let max_width = (i32::MAX / scale).max(1);
    let max_height = ((i32::MAX - banner) / scale).max(1);
    let mut result = *geometry;

    if permissions.contains(Permissions::RESIZE_X) {
        let min_width = minimum_width(geometry, permissions, input).min(max_width);
        if edges.contains(ResizeEdges::RIGHT) {
            let span = pointer.x.saturating_sub(x);
            result.size.x = (span / scale).clamp(min_width, max_width);
        } else if edges.contains(ResizeEdges::LEFT) {
            let right_edge = x.saturating_add(width);
            let span = right_edge.saturating_sub(pointer.x).saturating_sub(1);
            let logical = (span / scale).clamp(min_width, max_width);
            result.size.x = logical;
            result.position.x = right_edge.saturating_sub(logical * scale);
        }
    }

    if permissions.contains(Permissions::RESIZE_Y) {
        if edges.contains(ResizeEdges::BOTTOM) {
            let span = pointer.y.saturating_sub(y);
            result.size.y = (span / scale).clamp(1, max_height);
        } else if edges.contains(ResizeEdges::TOP) {
            let bottom_edge = y.saturating_add(height);
            let span = bottom_edge
                .saturating_sub(banner)
                .saturating_sub(pointer.y)
                .saturating_sub(1);
            let logical = (span / scale).clamp(1, max_height);
            result.size.y = logical;
            result.position.y = bottom_edge.saturating_sub(logical * scale);
        }
    }

    result
}
