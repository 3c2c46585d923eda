//! Rendering Surface Abstraction
//!
//! Screens draw through the [`RenderSurface`] trait rather than against
//! `Canvas<Window>` directly. The real implementation forwards to SDL2;
//! tests substitute no-op surfaces so screen logic can run headless.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

use crate::text;

/// Drawing primitives the screens need.
///
/// All colors are `sdl2::pixels::Color`; an alpha below 255 requests
/// alpha blending (used by the splash fade and the pause overlay).
pub trait RenderSurface {
    /// Pixel dimensions of the drawable area, used for centering layout.
    fn size(&self) -> (u32, u32);

    /// Fills the whole surface with a solid color.
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    /// Draws a rectangle outline, `thickness` pixels deep (grown inward).
    fn outline_rect(&mut self, rect: Rect, color: Color, thickness: u32) -> Result<(), String>;

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) -> Result<(), String>;

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) -> Result<(), String>;

    /// Draws a circle outline, `thickness` pixels deep (grown inward).
    fn stroke_circle(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        color: Color,
        thickness: u32,
    ) -> Result<(), String>;

    /// Renders bitmap text at (`x`, `y`). See [`crate::text`].
    fn text(&mut self, text: &str, x: i32, y: i32, color: Color, scale: u32)
    -> Result<(), String>;

    /// Renders bitmap text horizontally centered on `center_x`.
    fn text_centered(
        &mut self,
        s: &str,
        center_x: i32,
        y: i32,
        color: Color,
        scale: u32,
    ) -> Result<(), String> {
        let x = center_x - text::text_width(s, scale) as i32 / 2;
        self.text(s, x, y, color, scale)
    }
}

impl RenderSurface for Canvas<Window> {
    fn size(&self) -> (u32, u32) {
        // Logical size is set once at startup, so this matches the play area
        // regardless of the physical window size.
        self.logical_size()
    }

    fn clear(&mut self, color: Color) {
        self.set_draw_color(color);
        Canvas::clear(self);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        if color.a < 255 {
            self.set_blend_mode(BlendMode::Blend);
        }
        self.set_draw_color(color);
        let result = Canvas::fill_rect(self, rect);
        if color.a < 255 {
            self.set_blend_mode(BlendMode::None);
        }
        result
    }

    fn outline_rect(&mut self, rect: Rect, color: Color, thickness: u32) -> Result<(), String> {
        self.set_draw_color(color);
        for i in 0..thickness as i32 {
            let w = rect.width() as i32 - 2 * i;
            let h = rect.height() as i32 - 2 * i;
            if w <= 0 || h <= 0 {
                break;
            }
            self.draw_rect(Rect::new(rect.x() + i, rect.y() + i, w as u32, h as u32))?;
        }
        Ok(())
    }

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) -> Result<(), String> {
        self.set_draw_color(color);
        self.draw_line((x1, y1), (x2, y2))
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) -> Result<(), String> {
        self.set_draw_color(color);
        // Horizontal span per scanline.
        for dy in -radius..=radius {
            let dx = ((radius * radius - dy * dy) as f64).sqrt() as i32;
            self.draw_line((cx - dx, cy + dy), (cx + dx, cy + dy))?;
        }
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        color: Color,
        thickness: u32,
    ) -> Result<(), String> {
        self.set_draw_color(color);
        let inner = (radius - thickness as i32).max(0);
        for r in inner..=radius {
            // Midpoint circle, all eight octants.
            let mut x = r;
            let mut y = 0;
            let mut err = 1 - r;
            while x >= y {
                for (px, py) in [
                    (x, y),
                    (y, x),
                    (-y, x),
                    (-x, y),
                    (-x, -y),
                    (-y, -x),
                    (y, -x),
                    (x, -y),
                ] {
                    self.draw_point((cx + px, cy + py))?;
                }
                y += 1;
                if err < 0 {
                    err += 2 * y + 1;
                } else {
                    x -= 1;
                    err += 2 * (y - x) + 1;
                }
            }
        }
        Ok(())
    }

    fn text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
        scale: u32,
    ) -> Result<(), String> {
        text::draw_text(self, text, x, y, color, scale)
    }
}
