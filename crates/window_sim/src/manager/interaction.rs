//! Per-frame pointer interaction
//!
//! Runs before any window updates. A resize grab on the focused window
//! takes precedence over click routing; once a session is active, clicks
//! are not routed until it ends.

use super::session::{detect_resize_edges, resized_geometry, Session};
use super::window_list::WindowKey;
use super::WindowManager;
use crate::foundation::math::Vec2i;
use crate::surface::{MouseButton, Surface};
use crate::window::{Permissions, WindowId};

/// What a routed click does to the window it hit
enum ClickAction {
    /// Focus and follow the pointer
    Drag,
    /// Schedule the window for destruction without touching focus
    Close,
    /// Focus only
    Focus,
}

impl WindowManager {
    /// Continue an active resize, or start one on a primary press near the
    /// focused window's edges
    pub(super) fn resolve_resize(&mut self, surface: &dyn Surface) {
        let pointer = surface.mouse_position();
        let primary = surface.button(self.config.input.primary_button);

        match self.session {
            Session::Idle => {
                if !primary.pressed {
                    return;
                }
                let Some(window) = self.z_order.first().and_then(|key| self.windows.get_mut(*key)) else {
                    return;
                };
                if window.is_hidden() || !window.permissions().intersects(Permissions::RESIZE) {
                    return;
                }
                if let Some(edges) = detect_resize_edges(window.geometry(), pointer, &self.config.input) {
                    window.set_resizing(true);
                    log::debug!("Resizing window {} from {:?}", window.id(), edges);
                    self.session = Session::Resizing {
                        window: window.id(),
                        edges,
                    };
                }
            }
            Session::Resizing { window: id, edges } => {
                let Some(window) = self.index.get(&id).and_then(|key| self.windows.get_mut(*key)) else {
                    self.session = Session::Idle;
                    return;
                };

                let target = resized_geometry(
                    window.geometry(),
                    edges,
                    pointer,
                    window.permissions(),
                    &self.config.input,
                );
                window.set_position(target.position.x, target.position.y);
                window.resize(target.size.x, target.size.y);

                if primary.released || !primary.held {
                    window.set_resizing(false);
                    log::debug!(
                        "Resized window {} to {}x{}",
                        id,
                        window.width(),
                        window.height()
                    );
                    self.session = Session::Idle;
                }
            }
            Session::Dragging { .. } => {}
        }
    }

    /// Continue an active drag, or route a new click when idle
    pub(super) fn resolve_pointer(&mut self, surface: &dyn Surface) {
        match self.session {
            Session::Idle => self.route_click(surface),
            Session::Dragging {
                window: id,
                offset,
                button,
            } => {
                let Some(window) = self.index.get(&id).and_then(|key| self.windows.get_mut(*key)) else {
                    self.session = Session::Idle;
                    return;
                };

                let state = surface.button(button);
                if state.released || !state.held {
                    log::debug!("Dropped window {id}");
                    self.session = Session::Idle;
                } else if window.can_move() {
                    let pointer = surface.mouse_position();
                    window.set_position(
                        pointer.x.saturating_sub(offset.x),
                        pointer.y.saturating_sub(offset.y),
                    );
                }
            }
            Session::Resizing { .. } => {}
        }
    }

    /// Send a fresh button press to the topmost visible window under the
    /// pointer
    fn route_click(&mut self, surface: &dyn Surface) {
        let Some(button) = self
            .config
            .input
            .drag_buttons
            .iter()
            .copied()
            .find(|button| surface.button(*button).pressed)
        else {
            return;
        };
        let pointer = surface.mouse_position();

        let Some(key) = self.window_at(pointer) else {
            return;
        };
        let Some(window) = self.windows.get(key) else {
            return;
        };

        let id = window.id();
        let offset = pointer - window.position();
        let action = if window.body_drag() == Some(button) {
            ClickAction::Drag
        } else if button == self.config.input.primary_button && window.geometry().banner_contains(pointer) {
            let close_from = window
                .position()
                .x
                .saturating_add(window.real_width())
                .saturating_sub(self.config.input.close_hit_width);
            if window.can_close() && pointer.x >= close_from {
                ClickAction::Close
            } else {
                ClickAction::Drag
            }
        } else {
            ClickAction::Focus
        };

        match action {
            ClickAction::Drag => {
                self.bring_to_front(key);
                self.start_drag(id, offset, button);
            }
            ClickAction::Close => {
                if let Some(window) = self.windows.get_mut(key) {
                    log::info!("Close requested for window {} \"{}\"", id, window.name());
                    window.request_destroy();
                }
            }
            ClickAction::Focus => self.bring_to_front(key),
        }
    }

    fn start_drag(&mut self, window: WindowId, offset: Vec2i, button: MouseButton) {
        log::debug!("Dragging window {window} with {button:?}");
        self.session = Session::Dragging {
            window,
            offset,
            button,
        };
    }

    /// Frontmost visible window whose real bounds contain `point`
    fn window_at(&self, point: Vec2i) -> Option<WindowKey> {
        self.z_order.iter().copied().find(|key| {
            self.windows
                .get(*key)
                .is_some_and(|window| !window.is_hidden() && window.geometry().real_bounds().contains(point))
        })
    }
}
