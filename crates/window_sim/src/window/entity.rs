//! The window entity

use super::{
    Permissions, WindowConfig, WindowContent, WindowContext, WindowDirectory, WindowGeometry,
    WindowId, WindowInfo,
};
use crate::foundation::math::Vec2i;
use crate::foundation::time::TickThrottle;
use crate::surface::{MouseButton, PixelBuffer, Surface};

/// Where a window is in its create/destroy lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, create hook not yet run
    Pending,
    /// Create hook succeeded; receives updates
    Live,
    /// Create hook failed; waiting to be removed
    Failed,
    /// Destroy hook has run (or was skipped after a failed create)
    Destroyed,
}

/// One virtual window
///
/// Owns its geometry, permissions, transient focus state, pixel buffer and
/// content. Windows are driven by a
/// [`WindowManager`](crate::manager::WindowManager); the mutators here are
/// the raw state changes the manager builds on.
pub struct Window {
    id: WindowId,
    name: String,
    geometry: WindowGeometry,
    permissions: Permissions,
    body_drag: Option<MouseButton>,
    buffer: PixelBuffer,
    content: Box<dyn WindowContent>,
    throttle: Option<TickThrottle>,
    in_focus: bool,
    gained_focus: bool,
    lost_focus: bool,
    resizing: bool,
    hidden: bool,
    destruct: bool,
    lifecycle: Lifecycle,
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("geometry", &self.geometry)
            .field("permissions", &self.permissions)
            .field("in_focus", &self.in_focus)
            .field("hidden", &self.hidden)
            .field("destruct", &self.destruct)
            .field("lifecycle", &self.lifecycle)
            .finish_non_exhaustive()
    }
}

impl Window {
    /// Create a window from its configuration and content
    ///
    /// Sizes below 1x1 and scales below 1 are raised to 1. Non-positive tick
    /// rates leave the window unthrottled.
    pub fn new(config: WindowConfig, content: impl WindowContent + 'static) -> Self {
        Self::from_boxed(config, Box::new(content))
    }

    /// Create a window around already-boxed content
    pub fn from_boxed(config: WindowConfig, content: Box<dyn WindowContent>) -> Self {
        let size = Vec2i::new(config.width.max(1), config.height.max(1));
        Self {
            id: config.id,
            name: config.name,
            geometry: WindowGeometry {
                position: config.position,
                size,
                scale: config.scale.max(1),
                banner: config.banner.map(|height| height.max(0)),
            },
            permissions: config.permissions,
            body_drag: config.body_drag,
            buffer: PixelBuffer::new(size.x as u32, size.y as u32),
            content,
            throttle: config.tick_rate.and_then(TickThrottle::new),
            in_focus: false,
            gained_focus: false,
            lost_focus: false,
            resizing: false,
            hidden: config.hidden,
            destruct: false,
            lifecycle: Lifecycle::Pending,
        }
    }

    /// Identifier, unique within the owning manager
    pub const fn id(&self) -> WindowId {
        self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position, logical size, scale and banner
    pub const fn geometry(&self) -> &WindowGeometry {
        &self.geometry
    }

    /// Top-left of the body
    pub fn position(&self) -> Vec2i {
        self.geometry.position
    }

    /// Logical width
    pub fn width(&self) -> i32 {
        self.geometry.size.x
    }

    /// Logical height
    pub fn height(&self) -> i32 {
        self.geometry.size.y
    }

    /// Magnification
    pub const fn scale(&self) -> i32 {
        self.geometry.scale
    }

    /// On-screen width
    pub fn real_width(&self) -> i32 {
        self.geometry.real_width()
    }

    /// On-screen height including the banner
    pub fn real_height(&self) -> i32 {
        self.geometry.real_height()
    }

    /// Pointer capabilities
    pub const fn permissions(&self) -> Permissions {
        self.permissions
    }

    /// Whether the close glyph is offered
    pub const fn can_close(&self) -> bool {
        self.permissions.contains(Permissions::CLOSE)
    }

    /// Whether dragging moves the window
    pub const fn can_move(&self) -> bool {
        self.permissions.contains(Permissions::MOVE)
    }

    /// Button that drags the window from anywhere on it
    pub const fn body_drag(&self) -> Option<MouseButton> {
        self.body_drag
    }

    /// The window's pixel buffer
    pub const fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Mutable access to the pixel buffer outside of content hooks
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    /// Holds focus
    pub const fn in_focus(&self) -> bool {
        self.in_focus
    }

    /// Gained focus since the last content update
    pub const fn gained_focus(&self) -> bool {
        self.gained_focus
    }

    /// Lost focus since the last content update
    pub const fn lost_focus(&self) -> bool {
        self.lost_focus
    }

    /// Target of the active resize session
    pub const fn is_resizing(&self) -> bool {
        self.resizing
    }

    /// Skipped by updates, drawing and click routing
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Scheduled for removal at the next destruction pass
    pub const fn destruct_requested(&self) -> bool {
        self.destruct
    }

    /// Lifecycle state
    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Configured tick rate, if throttled
    pub fn tick_rate(&self) -> Option<f32> {
        self.throttle.as_ref().map(TickThrottle::rate)
    }

    /// A surface point in buffer coordinates
    pub fn local_mouse(&self, mouse: Vec2i) -> Vec2i {
        self.geometry.to_local(mouse)
    }

    /// Whether a surface point lies on the body
    pub fn mouse_in_bounds(&self, mouse: Vec2i) -> bool {
        self.geometry.body_contains(mouse)
    }

    /// Snapshot for sibling lookups
    pub fn info(&self) -> WindowInfo {
        WindowInfo {
            id: self.id,
            name: self.name.clone(),
            geometry: self.geometry,
            permissions: self.permissions,
            in_focus: self.in_focus,
            gained_focus: self.gained_focus,
            lost_focus: self.lost_focus,
            resizing: self.resizing,
            hidden: self.hidden,
        }
    }

    /// Change the logical size, reallocating the buffer
    ///
    /// Content in the overlapping top-left region is kept. Callers are
    /// responsible for minimums; values below 1 are raised to 1.
    pub fn resize(&mut self, width: i32, height: i32) {
        let size = Vec2i::new(width.max(1), height.max(1));
        if size == self.geometry.size {
            return;
        }
        self.geometry.size = size;
        self.buffer.resize(size.x as u32, size.y as u32);
    }

    /// Change the magnification (values below 1 are raised to 1)
    pub fn set_scale(&mut self, scale: i32) {
        self.geometry.scale = scale.max(1);
    }

    /// Move the body's top-left corner
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.geometry.position = Vec2i::new(x, y);
    }

    /// Replace the pointer capabilities
    pub fn set_permissions(&mut self, permissions: Permissions) {
        self.permissions = permissions;
    }

    /// Show a banner of `height` pixels, or remove it
    pub fn set_banner(&mut self, height: Option<i32>) {
        self.geometry.banner = height.map(|height| height.max(0));
    }

    /// Hide or show the window
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Throttle content updates to `rate` ticks per second
    ///
    /// `None` or a non-positive rate removes the throttle. A new throttle
    /// fires on the next update.
    pub fn set_tick_rate(&mut self, rate: Option<f32>) {
        self.throttle = rate.and_then(TickThrottle::new);
    }

    /// Schedule the window for removal at the next destruction pass
    pub fn request_destroy(&mut self) {
        self.destruct = true;
    }

    pub(crate) fn set_resizing(&mut self, resizing: bool) {
        self.resizing = resizing;
    }

    /// Take focus without raising the gained edge (first window added)
    pub(crate) fn set_initial_focus(&mut self) {
        self.in_focus = true;
    }

    pub(crate) fn focus(&mut self) {
        if !self.in_focus {
            self.in_focus = true;
            self.gained_focus = true;
        }
    }

    pub(crate) fn unfocus(&mut self) {
        if self.in_focus {
            self.in_focus = false;
            self.lost_focus = true;
        }
    }

    /// Run the create hook with the buffer as draw target
    ///
    /// Returns whether the window is live. A failed create schedules the
    /// window for destruction. Only the first call runs the hook.
    pub fn create(&mut self, surface: &mut dyn Surface, directory: &WindowDirectory) -> bool {
        if self.lifecycle != Lifecycle::Pending {
            log::warn!("Window {} \"{}\" created twice", self.id, self.name);
            return self.lifecycle == Lifecycle::Live;
        }

        let created = self.with_draw_target(surface, directory, |content, ctx| content.on_create(ctx));
        if created {
            self.lifecycle = Lifecycle::Live;
        } else {
            log::warn!("Window {} \"{}\" failed to initialize", self.id, self.name);
            self.lifecycle = Lifecycle::Failed;
            self.destruct = true;
        }
        created
    }

    /// Run one content update
    ///
    /// Hidden windows, windows that are not live and windows already
    /// scheduled for destruction are skipped. With a throttle, the hook
    /// only runs once enough time has accumulated and receives the
    /// accumulated time. The focus edges are cleared whenever the hook runs.
    pub fn update(&mut self, elapsed: f32, surface: &mut dyn Surface, directory: &WindowDirectory) {
        if self.hidden || self.destruct || self.lifecycle != Lifecycle::Live {
            return;
        }

        let elapsed = match self.throttle.as_mut() {
            Some(throttle) => match throttle.advance(elapsed) {
                Some(tick) => tick,
                None => return,
            },
            None => elapsed,
        };

        let keep_alive =
            self.with_draw_target(surface, directory, |content, ctx| content.on_update(ctx, elapsed));
        if !keep_alive {
            log::debug!("Window {} \"{}\" asked to close", self.id, self.name);
            self.destruct = true;
        }

        self.gained_focus = false;
        self.lost_focus = false;
    }

    /// Run the destroy hook
    ///
    /// The hook runs at most once and only for windows whose create
    /// succeeded. Returns whether it ran.
    pub fn destroy(&mut self) -> bool {
        let was_live = self.lifecycle == Lifecycle::Live;
        self.lifecycle = Lifecycle::Destroyed;
        if was_live {
            self.content.on_destroy();
        }
        was_live
    }

    fn with_draw_target<R>(
        &mut self,
        surface: &mut dyn Surface,
        directory: &WindowDirectory,
        hook: impl FnOnce(&mut dyn WindowContent, &mut WindowContext<'_>) -> R,
    ) -> R {
        let info = self.info();
        let buffer = std::mem::take(&mut self.buffer);
        let previous = surface.swap_draw_target(Some(buffer));

        let result = {
            let mut ctx = WindowContext::new(&mut *surface, info, directory);
            hook(self.content.as_mut(), &mut ctx)
        };

        let restored = surface.swap_draw_target(previous);
        self.buffer = restored.unwrap_or_else(|| {
            log::error!(
                "Surface did not hand back the buffer of window {}; reallocating",
                self.id
            );
            PixelBuffer::new(self.geometry.size.x as u32, self.geometry.size.y as u32)
        });
        self.buffer
            .resize(self.geometry.size.x as u32, self.geometry.size.y as u32);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{HeadlessSurface, Pixel};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Calls {
        created: u32,
        updated: Vec<f32>,
        destroyed: u32,
        saw_gained: Vec<bool>,
    }

    struct Counter {
        calls: Rc<RefCell<Calls>>,
        create_ok: bool,
        keep_alive: bool,
    }

    impl Counter {
        fn new(calls: &Rc<RefCell<Calls>>) -> Self {
            Self {
                calls: Rc::clone(calls),
                create_ok: true,
                keep_alive: true,
            }
        }
    }

    impl WindowContent for Counter {
        fn on_create(&mut self, ctx: &mut WindowContext<'_>) -> bool {
            ctx.clear(Pixel::WHITE);
            self.calls.borrow_mut().created += 1;
            self.create_ok
        }

        fn on_update(&mut self, ctx: &mut WindowContext<'_>, elapsed: f32) -> bool {
            let mut calls = self.calls.borrow_mut();
            calls.updated.push(elapsed);
            calls.saw_gained.push(ctx.window().gained_focus);
            self.keep_alive
        }

        fn on_destroy(&mut self) {
            self.calls.borrow_mut().destroyed += 1;
        }
    }

    fn config() -> WindowConfig {
        WindowConfig::new(1, "Counter", 4, 3).with_position(10, 20)
    }

    #[test]
    fn test_new_clamps_degenerate_config() {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let window = Window::new(
            WindowConfig::new(9, "Tiny", 0, -4).with_scale(0).with_tick_rate(0.0),
            Counter::new(&calls),
        );
        assert_eq!((window.width(), window.height(), window.scale()), (1, 1, 1));
        assert_eq!(window.tick_rate(), None);
        assert_eq!(window.lifecycle(), Lifecycle::Pending);
    }

    #[test]
    fn test_create_draws_into_own_buffer() {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let mut surface = HeadlessSurface::new(64, 64);
        let mut window = Window::new(config(), Counter::new(&calls));

        assert!(window.create(&mut surface, &WindowDirectory::default()));
        assert_eq!(window.lifecycle(), Lifecycle::Live);
        assert_eq!(window.buffer().get(3, 2), Some(Pixel::WHITE));
        assert!(!surface.is_redirected());
        assert_eq!(surface.screen().get(10, 20), Some(Pixel::BLACK));

        // A second create is refused
        assert!(window.create(&mut surface, &WindowDirectory::default()));
        assert_eq!(calls.borrow().created, 1);
    }

    #[test]
    fn test_failed_create_never_updates_or_destroys() {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let mut surface = HeadlessSurface::new(64, 64);
        let mut counter = Counter::new(&calls);
        counter.create_ok = false;
        let mut window = Window::new(config(), counter);

        assert!(!window.create(&mut surface, &WindowDirectory::default()));
        assert!(window.destruct_requested());

        window.update(0.1, &mut surface, &WindowDirectory::default());
        assert!(!window.destroy());
        assert!(calls.borrow().updated.is_empty());
        assert_eq!(calls.borrow().destroyed, 0);
    }

    #[test]
    fn test_destroy_runs_once() {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let mut surface = HeadlessSurface::new(64, 64);
        let mut window = Window::new(config(), Counter::new(&calls));
        window.create(&mut surface, &WindowDirectory::default());

        assert!(window.destroy());
        assert!(!window.destroy());
        assert_eq!(calls.borrow().destroyed, 1);
    }

    #[test]
    fn test_update_false_requests_destruction() {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let mut surface = HeadlessSurface::new(64, 64);
        let mut counter = Counter::new(&calls);
        counter.keep_alive = false;
        let mut window = Window::new(config(), counter);
        window.create(&mut surface, &WindowDirectory::default());

        window.update(0.016, &mut surface, &WindowDirectory::default());
        assert!(window.destruct_requested());

        // Doomed windows are not updated again
        window.update(0.016, &mut surface, &WindowDirectory::default());
        assert_eq!(calls.borrow().updated.len(), 1);
    }

    #[test]
    fn test_hidden_window_is_not_updated() {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let mut surface = HeadlessSurface::new(64, 64);
        let mut window = Window::new(config().with_hidden(true), Counter::new(&calls));
        window.create(&mut surface, &WindowDirectory::default());

        window.update(0.016, &mut surface, &WindowDirectory::default());
        assert!(calls.borrow().updated.is_empty());
    }

    #[test]
    fn test_throttle_gates_hook_and_focus_edges() {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let mut surface = HeadlessSurface::new(64, 64);
        let mut window = Window::new(config().with_tick_rate(10.0), Counter::new(&calls));
        window.create(&mut surface, &WindowDirectory::default());
        let directory = WindowDirectory::default();

        // First tick fires immediately
        window.update(0.06, &mut surface, &directory);
        assert_eq!(calls.borrow().updated.len(), 1);

        window.focus();
        window.update(0.06, &mut surface, &directory);
        assert_eq!(calls.borrow().updated.len(), 1);
        assert!(window.gained_focus(), "edge survives frames where the tick did not fire");

        window.update(0.06, &mut surface, &directory);
        assert_eq!(calls.borrow().updated.len(), 2);
        assert_eq!(calls.borrow().saw_gained, vec![false, true]);
        assert!(!window.gained_focus());
        approx::assert_relative_eq!(calls.borrow().updated[1], 0.12, epsilon = 1e-6);
    }

    #[test]
    fn test_focus_edges() {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let mut window = Window::new(config(), Counter::new(&calls));

        window.set_initial_focus();
        assert!(window.in_focus() && !window.gained_focus());

        window.unfocus();
        assert!(!window.in_focus() && window.lost_focus());

        window.focus();
        window.focus();
        assert!(window.in_focus() && window.gained_focus());
    }

    #[test]
    fn test_resize_preserves_buffer() {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let mut window = Window::new(config(), Counter::new(&calls));
        window.buffer_mut().set(3, 2, Pixel::DARK_RED);

        window.resize(8, 8);
        assert_eq!(window.buffer().get(3, 2), Some(Pixel::DARK_RED));
        assert_eq!(window.buffer().size(), Vec2i::new(8, 8));

        window.resize(2, 2);
        assert_eq!(window.buffer().size(), Vec2i::new(2, 2));
        window.resize(0, -3);
        assert_eq!((window.width(), window.height()), (1, 1));
    }
}
