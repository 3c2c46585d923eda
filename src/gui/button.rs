//! Clickable Button Widget

use sdl2::pixels::Color;
use sdl2::rect::Rect;

use crate::input::{InputEvent, PointerButton};
use crate::render::RenderSurface;
use crate::text;

const FILL: Color = Color::RGB(70, 70, 70);
const FILL_HOVERED: Color = Color::RGB(100, 100, 100);
const BORDER: Color = Color::RGB(200, 200, 200);
const LABEL: Color = Color::RGB(255, 255, 255);
const LABEL_SCALE: u32 = 2;

/// A rectangular push button with hover highlighting.
///
/// `handle_event` returns `true` exactly when the button was clicked
/// (left pointer-button press inside its rectangle); the owning screen
/// decides what the click means.
pub struct Button {
    rect: Rect,
    label: String,
    hovered: bool,
}

impl Button {
    pub fn new(rect: Rect, label: &str) -> Self {
        Button {
            rect,
            label: label.to_string(),
            hovered: false,
        }
    }

    /// Replaces the label, used by toggle buttons (fullscreen/windowed).
    pub fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    /// Processes one event; returns `true` on click.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::MouseMotion { x, y } => {
                self.hovered = self.rect.contains_point((x, y));
                false
            }
            InputEvent::MouseButtonDown {
                x,
                y,
                button: PointerButton::Left,
            } => self.rect.contains_point((x, y)),
            _ => false,
        }
    }

    pub fn draw(&self, surface: &mut dyn RenderSurface) -> Result<(), String> {
        let fill = if self.hovered { FILL_HOVERED } else { FILL };
        surface.fill_rect(self.rect, fill)?;
        surface.outline_rect(self.rect, BORDER, 2)?;

        let label_y =
            self.rect.y() + (self.rect.height() as i32 - text::text_height(LABEL_SCALE) as i32) / 2;
        surface.text_centered(
            &self.label,
            self.rect.x() + self.rect.width() as i32 / 2,
            label_y,
            LABEL,
            LABEL_SCALE,
        )
    }
}
