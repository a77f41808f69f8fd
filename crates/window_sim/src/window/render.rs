//! Window decoration and compositing

use super::Window;
use crate::config::ThemeConfig;
use crate::foundation::math::Vec2i;
use crate::surface::Surface;

/// Width of one glyph of the host font
const GLYPH_WIDTH: i32 = 8;

/// Horizontal space the banner reserves for the close glyph
const CLOSE_RESERVE: i32 = 18;

/// Horizontal space the banner reserves without a close glyph
const TITLE_PADDING: i32 = 2;

/// Real widths at or below this get no banner text
const MIN_TITLED_WIDTH: i32 = 10;

/// Number of title characters that fit a banner `real_width` pixels wide
pub fn title_capacity(real_width: i32, closable: bool) -> usize {
    let reserve = if closable { CLOSE_RESERVE } else { TITLE_PADDING };
    usize::try_from((real_width - reserve) / GLYPH_WIDTH).unwrap_or(0)
}

impl Window {
    /// Composite the window onto the surface
    ///
    /// Draws the scaled buffer, then the banner (fill, outline, truncated
    /// title and close glyph) and the one-pixel body border. Hidden windows
    /// draw nothing.
    pub fn draw(&self, surface: &mut dyn Surface, theme: &ThemeConfig) {
        if self.is_hidden() {
            return;
        }

        let position = self.position();
        let (x, y) = (position.x, position.y);
        let width = self.real_width();
        let height = self.geometry().body_height();
        let scale = self.scale().max(1) as u32;
        // Decorations sit one pixel outside the body; saturate at the i32 ends
        let outline = Vec2i::new(x.saturating_sub(1), y.saturating_sub(1));

        surface.draw_buffer(position, self.buffer(), scale);

        if let Some(banner) = self.geometry().banner {
            let fill = if self.in_focus() {
                theme.banner_focused
            } else {
                theme.banner_unfocused
            };
            let top = y.saturating_sub(banner);
            surface.fill_rect(Vec2i::new(x, top), Vec2i::new(width, banner - 1), fill);
            surface.draw_rect(
                Vec2i::new(outline.x, top),
                Vec2i::new(width.saturating_add(1), banner - 1),
                theme.banner_outline,
            );

            if width > MIN_TITLED_WIDTH {
                let title: String = self
                    .name()
                    .chars()
                    .take(title_capacity(width, self.can_close()))
                    .collect();
                let text_y = top.saturating_add(2);
                surface.draw_string(Vec2i::new(x.saturating_add(1), text_y), &title, theme.title_text);

                if self.can_close() {
                    surface.draw_string(
                        Vec2i::new(x.saturating_add(width).saturating_sub(9), text_y),
                        "X",
                        theme.close_glyph,
                    );
                }
            }
        }

        let border = if self.in_focus() {
            theme.border_focused
        } else {
            theme.border
        };
        surface.draw_rect(
            outline,
            Vec2i::new(width.saturating_add(1), height.saturating_add(1)),
            border,
        );
    }
}
