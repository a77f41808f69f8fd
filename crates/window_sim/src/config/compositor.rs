//! # Compositor Configuration
//!
//! Input thresholds and theme colors shared by every window a
//! [`WindowManager`](crate::manager::WindowManager) owns. Loadable from TOML
//! or RON through the [`Config`] trait; every field has a default so partial
//! files are accepted.

use super::{Config, ConfigError};
use crate::surface::{MouseButton, Pixel};
use serde::{Deserialize, Serialize};

/// # Input Configuration
///
/// Pointer thresholds for hit testing, resize detection and drag routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Button that drives resizing, banner dragging and the close glyph
    pub primary_button: MouseButton,
    /// Buttons whose press edge routes a click to the window under the pointer
    pub drag_buttons: Vec<MouseButton>,
    /// Thickness of the resize bands flanking a window, in pixels
    pub resize_band: i32,
    /// Distance from a corner within which an edge grab resizes both axes
    pub corner_grab: i32,
    /// Narrowest real width that keeps the close glyph fully visible
    pub close_glyph_width: i32,
    /// Width of the close-glyph hit region at the banner's right end
    pub close_hit_width: i32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            primary_button: MouseButton::Left,
            drag_buttons: MouseButton::ALL.to_vec(),
            resize_band: 8,
            corner_grab: 12,
            close_glyph_width: 11,
            close_hit_width: 9,
        }
    }
}

impl InputConfig {
    /// Whether a press of `button` starts click routing
    pub fn routes(&self, button: MouseButton) -> bool {
        self.drag_buttons.contains(&button)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resize_band < 1 {
            return Err(ConfigError::Invalid(format!(
                "resize_band must be at least 1, got {}",
                self.resize_band
            )));
        }
        if self.corner_grab < 0 || self.close_glyph_width < 0 || self.close_hit_width < 0 {
            return Err(ConfigError::Invalid(
                "corner_grab, close_glyph_width and close_hit_width cannot be negative".to_string(),
            ));
        }
        if !self.routes(self.primary_button) {
            return Err(ConfigError::Invalid(format!(
                "primary button {:?} must be one of the drag buttons",
                self.primary_button
            )));
        }
        Ok(())
    }
}

/// # Theme Configuration
///
/// Colors used for window decorations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Banner fill of the focused window
    pub banner_focused: Pixel,
    /// Banner fill of unfocused windows
    pub banner_unfocused: Pixel,
    /// Banner outline
    pub banner_outline: Pixel,
    /// Body border of the focused window
    pub border_focused: Pixel,
    /// Body border of unfocused windows
    pub border: Pixel,
    /// Window title text
    pub title_text: Pixel,
    /// Close glyph
    pub close_glyph: Pixel,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            banner_focused: Pixel::grey(190),
            banner_unfocused: Pixel::grey(140),
            banner_outline: Pixel::grey(110),
            border_focused: Pixel::grey(200),
            border: Pixel::grey(110),
            title_text: Pixel::BLACK,
            close_glyph: Pixel::DARK_RED,
        }
    }
}

/// # Compositor Configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositorConfig {
    /// Pointer thresholds
    pub input: InputConfig,
    /// Decoration colors
    pub theme: ThemeConfig,
    /// Remove every window with a pending close in one destruction pass
    /// instead of one per frame
    pub reap_all_pending: bool,
}

impl CompositorConfig {
    /// Set the input configuration
    pub fn with_input(mut self, input: InputConfig) -> Self {
        self.input = input;
        self
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: ThemeConfig) -> Self {
        self.theme = theme;
        self
    }

    /// Choose between one removal per frame and removing all pending windows
    pub fn with_reap_all_pending(mut self, enabled: bool) -> Self {
        self.reap_all_pending = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.input.validate()
    }
}

impl Config for CompositorConfig {}
