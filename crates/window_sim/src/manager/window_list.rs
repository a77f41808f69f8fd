//! Window collection, z-order and focus

use std::collections::HashMap;

use slotmap::{DefaultKey, SlotMap};

use super::Session;
use crate::config::{CompositorConfig, ConfigError};
use crate::error::{WindowError, WindowResult};
use crate::surface::Surface;
use crate::window::{Permissions, Window, WindowDirectory, WindowGeometry, WindowId, WindowInfo};

pub(super) type WindowKey = DefaultKey;

/// Owns every window and drives them frame by frame
///
/// Windows are kept in a z-order whose front is the topmost window. The
/// front window always holds focus. Each call to
/// [`WindowManager::update_all`] resolves pointer interaction, updates and
/// composites every window back to front, then removes windows that asked
/// to close.
pub struct WindowManager {
    /// Window storage
    pub(super) windows: SlotMap<WindowKey, Window>,

    /// Id to storage key
    pub(super) index: HashMap<WindowId, WindowKey>,

    /// Storage keys, front (focused) first
    pub(super) z_order: Vec<WindowKey>,

    /// Active pointer interaction
    pub(super) session: Session,

    /// Input thresholds and theme
    pub(super) config: CompositorConfig,

    /// Snapshots handed to content hooks this frame
    directory: WindowDirectory,

    /// Frames run so far
    frame: u64,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(CompositorConfig::default())
    }
}

impl std::fmt::Debug for WindowManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowManager")
            .field("z_order", &self.z_order_ids())
            .field("session", &self.session)
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}

impl WindowManager {
    /// Create an empty manager
    ///
    /// An invalid configuration is logged and used as given; see
    /// [`WindowManager::try_new`] to reject it instead.
    pub fn new(config: CompositorConfig) -> Self {
        if let Err(err) = config.validate() {
            log::warn!("Using invalid compositor config: {err}");
        }
        Self::with_config(config)
    }

    /// Create an empty manager after validating its configuration
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] if [`CompositorConfig::validate`] rejects
    /// the configuration.
    pub fn try_new(config: CompositorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: CompositorConfig) -> Self {
        Self {
            windows: SlotMap::new(),
            index: HashMap::new(),
            z_order: Vec::new(),
            session: Session::Idle,
            config,
            directory: WindowDirectory::default(),
            frame: 0,
        }
    }

    /// Input thresholds and theme
    pub const fn config(&self) -> &CompositorConfig {
        &self.config
    }

    /// Add a window at the back of the z-order and run its create hook
    ///
    /// The first window added takes focus. A window whose create hook fails
    /// is still added; it is scheduled for removal and never updated.
    ///
    /// # Errors
    ///
    /// [`WindowError::DuplicateId`] if a window with the same id is already
    /// present, [`WindowError::InvalidSize`] if its scaled footprint does not
    /// fit in surface coordinates. The rejected window is dropped without
    /// running any hook.
    pub fn add_window(&mut self, window: Window, surface: &mut dyn Surface) -> WindowResult<WindowId> {
        let id = window.id();
        if self.index.contains_key(&id) {
            let err = WindowError::DuplicateId {
                id,
                name: window.name().to_string(),
            };
            log::error!("{err}");
            return Err(err);
        }
        if window.geometry().checked_footprint().is_none() {
            let err = WindowError::InvalidSize {
                id,
                width: window.width(),
                height: window.height(),
            };
            log::error!("{err} at scale {}", window.scale());
            return Err(err);
        }

        let first = self.z_order.is_empty();
        let key = self.windows.insert(window);
        self.index.insert(id, key);
        self.z_order.push(key);

        let directory = self.snapshot();
        if let Some(window) = self.windows.get_mut(key) {
            if first {
                window.set_initial_focus();
            }
            let created = window.create(surface, &directory);
            log::info!(
                "Added window {} \"{}\" ({}x{} at {},{}){}",
                id,
                window.name(),
                window.width(),
                window.height(),
                window.position().x,
                window.position().y,
                if created { "" } else { ", create failed" }
            );
        }
        Ok(id)
    }

    /// Destroy and remove a window immediately
    ///
    /// # Errors
    ///
    /// [`WindowError::UnknownId`] if no such window exists.
    pub fn remove_window(&mut self, id: WindowId) -> WindowResult<()> {
        let key = self.key(id)?;
        self.destroy_key(key);
        Ok(())
    }

    /// Schedule a window for removal at the end of the next frame
    ///
    /// # Errors
    ///
    /// [`WindowError::UnknownId`] if no such window exists.
    pub fn request_close(&mut self, id: WindowId) -> WindowResult<()> {
        self.window_mut(id)?.request_destroy();
        Ok(())
    }

    /// Bring a window to the front and give it focus
    ///
    /// # Errors
    ///
    /// [`WindowError::UnknownId`] if no such window exists.
    pub fn focus(&mut self, id: WindowId) -> WindowResult<()> {
        let key = self.key(id)?;
        self.bring_to_front(key);
        Ok(())
    }

    /// Change a window's logical size
    ///
    /// # Errors
    ///
    /// [`WindowError::InvalidSize`] for sizes below 1x1 or too large to
    /// draw at the window's scale, [`WindowError::UnknownId`] if no such
    /// window exists.
    pub fn resize(&mut self, id: WindowId, width: i32, height: i32) -> WindowResult<()> {
        let invalid = WindowError::InvalidSize { id, width, height };
        if width < 1 || height < 1 {
            return Err(invalid);
        }
        let window = self.window_mut(id)?;
        if window.geometry().resized(width, height).is_none() {
            log::warn!("{invalid} at scale {}", window.scale());
            return Err(invalid);
        }
        window.resize(width, height);
        Ok(())
    }

    /// Move a window's body to `(x, y)`
    ///
    /// # Errors
    ///
    /// [`WindowError::UnknownId`] if no such window exists.
    pub fn set_position(&mut self, id: WindowId, x: i32, y: i32) -> WindowResult<()> {
        self.window_mut(id)?.set_position(x, y);
        Ok(())
    }

    /// Change a window's magnification
    ///
    /// # Errors
    ///
    /// [`WindowError::InvalidScale`] for scales below 1 or large enough to
    /// overflow the window's footprint, [`WindowError::UnknownId`] if no
    /// such window exists.
    pub fn set_scale(&mut self, id: WindowId, scale: i32) -> WindowResult<()> {
        let invalid = WindowError::InvalidScale { id, scale };
        if scale < 1 {
            return Err(invalid);
        }
        let window = self.window_mut(id)?;
        if window.geometry().rescaled(scale).is_none() {
            log::warn!("{invalid} for a {}x{} window", window.width(), window.height());
            return Err(invalid);
        }
        window.set_scale(scale);
        Ok(())
    }

    /// Throttle a window's content updates to `rate` ticks per second
    ///
    /// A rate of zero or below removes the throttle.
    ///
    /// # Errors
    ///
    /// [`WindowError::UnknownId`] if no such window exists.
    pub fn set_tick_rate(&mut self, id: WindowId, rate: f32) -> WindowResult<()> {
        self.window_mut(id)?.set_tick_rate(Some(rate));
        Ok(())
    }

    /// Hide or show a window
    ///
    /// Showing a window also focuses it.
    ///
    /// # Errors
    ///
    /// [`WindowError::UnknownId`] if no such window exists.
    pub fn set_hidden(&mut self, id: WindowId, hidden: bool) -> WindowResult<()> {
        let key = self.key(id)?;
        if let Some(window) = self.windows.get_mut(key) {
            window.set_hidden(hidden);
        }
        if !hidden {
            self.bring_to_front(key);
        }
        Ok(())
    }

    /// Replace a window's pointer capabilities
    ///
    /// # Errors
    ///
    /// [`WindowError::UnknownId`] if no such window exists.
    pub fn set_permissions(&mut self, id: WindowId, permissions: Permissions) -> WindowResult<()> {
        self.window_mut(id)?.set_permissions(permissions);
        Ok(())
    }

    /// Show a banner of `height` pixels on a window, or remove it
    ///
    /// # Errors
    ///
    /// [`WindowError::InvalidSize`] if the banner makes the window too tall
    /// to draw, [`WindowError::UnknownId`] if no such window exists.
    pub fn set_banner(&mut self, id: WindowId, height: Option<i32>) -> WindowResult<()> {
        let window = self.window_mut(id)?;
        let geometry = WindowGeometry {
            banner: height.map(|height| height.max(0)),
            ..*window.geometry()
        };
        if geometry.checked_footprint().is_none() {
            return Err(WindowError::InvalidSize {
                id,
                width: window.width(),
                height: window.height(),
            });
        }
        window.set_banner(height);
        Ok(())
    }

    /// Borrow a window
    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.index.get(&id).and_then(|key| self.windows.get(*key))
    }

    /// Current snapshot of a window
    ///
    /// # Errors
    ///
    /// [`WindowError::UnknownId`] if no such window exists.
    pub fn lookup(&self, id: WindowId) -> WindowResult<WindowInfo> {
        self.window(id).map(Window::info).ok_or(WindowError::UnknownId(id))
    }

    /// Whether a window with this id is present
    pub fn contains(&self, id: WindowId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of windows
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// True when there are no windows
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// The focused (frontmost) window
    pub fn focused_id(&self) -> Option<WindowId> {
        self.z_order
            .first()
            .and_then(|key| self.windows.get(*key))
            .map(Window::id)
    }

    /// Window ids, front to back
    pub fn z_order_ids(&self) -> Vec<WindowId> {
        self.z_order
            .iter()
            .filter_map(|key| self.windows.get(*key))
            .map(Window::id)
            .collect()
    }

    /// Active pointer interaction
    pub const fn session(&self) -> Session {
        self.session
    }

    /// Number of frames run
    pub const fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Snapshots handed to content hooks during the last frame
    pub const fn directory(&self) -> &WindowDirectory {
        &self.directory
    }

    /// Run one frame
    ///
    /// Resolves resize, drag and click interaction, updates and composites
    /// every window back to front, then removes windows scheduled for
    /// destruction (one per frame unless
    /// [`CompositorConfig::reap_all_pending`] is set).
    pub fn update_all(&mut self, elapsed: f32, surface: &mut dyn Surface) {
        self.frame += 1;

        self.resolve_resize(surface);
        self.resolve_pointer(surface);

        self.directory = self.snapshot();
        for &key in self.z_order.iter().rev() {
            if let Some(window) = self.windows.get_mut(key) {
                window.update(elapsed, surface, &self.directory);
                window.draw(surface, &self.config.theme);
            }
        }

        self.reap();
    }

    /// Destroy every window and empty the manager
    pub fn shutdown(&mut self) {
        log::info!("Shutting down {} windows", self.windows.len());
        for key in std::mem::take(&mut self.z_order) {
            if let Some(window) = self.windows.get_mut(key) {
                window.destroy();
            }
        }
        self.windows.clear();
        self.index.clear();
        self.directory = WindowDirectory::default();
        self.session = Session::Idle;
    }

    pub(super) fn key(&self, id: WindowId) -> WindowResult<WindowKey> {
        self.index.get(&id).copied().ok_or_else(|| {
            log::warn!("No window with id {id}");
            WindowError::UnknownId(id)
        })
    }

    fn window_mut(&mut self, id: WindowId) -> WindowResult<&mut Window> {
        let key = self.key(id)?;
        self.windows.get_mut(key).ok_or(WindowError::UnknownId(id))
    }

    fn snapshot(&self) -> WindowDirectory {
        WindowDirectory::new(self.windows.values().map(Window::info))
    }

    /// Move a window to the front of the z-order and transfer focus to it
    ///
    /// Ends any drag or resize running on another window.
    pub(super) fn bring_to_front(&mut self, key: WindowKey) {
        let Some(position) = self.z_order.iter().position(|k| *k == key) else {
            return;
        };

        let target = self.windows.get(key).map(Window::id);
        if let Some(active) = self.session.window().filter(|id| Some(*id) != target) {
            if let Some(window) = self.index.get(&active).and_then(|k| self.windows.get_mut(*k)) {
                window.set_resizing(false);
            }
            log::debug!("Focus change ended interaction with window {active}");
            self.session = Session::Idle;
        }

        if position > 0 {
            let previous = self.z_order[0];
            self.z_order.remove(position);
            self.z_order.insert(0, key);
            if let Some(window) = self.windows.get_mut(previous) {
                window.unfocus();
            }
        }
        if let Some(window) = self.windows.get_mut(key) {
            window.focus();
        }
    }

    /// Run the destroy hook, then drop the window
    ///
    /// If the window held focus, the next window in z-order takes it.
    fn destroy_key(&mut self, key: WindowKey) {
        let was_front = self.z_order.first() == Some(&key);
        self.z_order.retain(|k| *k != key);

        let Some(mut window) = self.windows.remove(key) else {
            return;
        };
        window.destroy();
        self.index.remove(&window.id());
        if self.session.window() == Some(window.id()) {
            self.session = Session::Idle;
        }
        log::info!("Removed window {} \"{}\"", window.id(), window.name());

        if was_front {
            if let Some(window) = self.z_order.first().and_then(|k| self.windows.get_mut(*k)) {
                window.focus();
            }
        }
    }

    /// Remove windows scheduled for destruction, front to back
    fn reap(&mut self) {
        let limit = if self.config.reap_all_pending { usize::MAX } else { 1 };
        let doomed: Vec<WindowKey> = self
            .z_order
            .iter()
            .copied()
            .filter(|key| self.windows.get(*key).is_some_and(Window::destruct_requested))
            .take(limit)
            .collect();

        for key in doomed {
            self.destroy_key(key);
        }
    }
}
