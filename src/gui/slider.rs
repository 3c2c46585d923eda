//! Drag-to-Set Slider Widget

use sdl2::pixels::Color;
use sdl2::rect::Rect;

use crate::input::{InputEvent, PointerButton};
use crate::render::RenderSurface;

const TRACK_HEIGHT: u32 = 20;
const HANDLE_WIDTH: u32 = 20;
const HANDLE_HEIGHT: u32 = 30;

const TRACK_FILL: Color = Color::RGB(100, 100, 100);
const TRACK_BORDER: Color = Color::RGB(200, 200, 200);
const HANDLE_FILL: Color = Color::RGB(150, 150, 150);
const HANDLE_BORDER: Color = Color::RGB(255, 255, 255);
const LABEL_COLOR: Color = Color::RGB(255, 255, 255);

/// A horizontal slider over the normalized range [0, 1].
///
/// Pointer-down on the handle starts a drag; pointer-motion while dragging
/// maps the horizontal position linearly onto the track, clamped at both
/// ends; pointer-up ends the drag. The current value is readable at any
/// time and is mirrored into the settings snapshot by the options screen.
pub struct Slider {
    track: Rect,
    label: String,
    value: f32,
    dragging: bool,
}

impl Slider {
    pub fn new(x: i32, y: i32, width: u32, initial: f32, label: &str) -> Self {
        Slider {
            track: Rect::new(x, y, width, TRACK_HEIGHT),
            label: label.to_string(),
            value: initial.clamp(0.0, 1.0),
            dragging: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// The value a pointer at horizontal position `x` maps to: linear over
    /// the track, clamped outside it.
    pub fn value_at(&self, x: i32) -> f32 {
        let relative = (x - self.track.x()) as f32 / self.track.width() as f32;
        relative.clamp(0.0, 1.0)
    }

    fn handle_rect(&self) -> Rect {
        let handle_x = self.track.x() + (self.value * self.track.width() as f32) as i32;
        Rect::new(
            handle_x - HANDLE_WIDTH as i32 / 2,
            self.track.y() - 5,
            HANDLE_WIDTH,
            HANDLE_HEIGHT,
        )
    }

    /// Processes one event; returns `true` if the slider consumed it.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::MouseButtonDown {
                x,
                y,
                button: PointerButton::Left,
            } => {
                if self.handle_rect().contains_point((x, y)) {
                    self.dragging = true;
                    return true;
                }
                false
            }
            InputEvent::MouseButtonUp {
                button: PointerButton::Left,
                ..
            } => {
                self.dragging = false;
                false
            }
            InputEvent::MouseMotion { x, .. } if self.dragging => {
                self.value = self.value_at(x);
                true
            }
            _ => false,
        }
    }

    pub fn draw(&self, surface: &mut dyn RenderSurface) -> Result<(), String> {
        let label = format!("{}: {:.1}", self.label, self.value);
        surface.text(
            &label,
            self.track.x(),
            self.track.y() - 25,
            LABEL_COLOR,
            2,
        )?;

        surface.fill_rect(self.track, TRACK_FILL)?;
        surface.outline_rect(self.track, TRACK_BORDER, 2)?;

        let handle = self.handle_rect();
        surface.fill_rect(handle, HANDLE_FILL)?;
        surface.outline_rect(handle, HANDLE_BORDER, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider() -> Slider {
        Slider::new(300, 200, 200, 0.5, "Master Volume")
    }

    fn drag_to(s: &mut Slider, x: i32) {
        // Grab the handle wherever it currently sits, then move.
        let handle = s.handle_rect();
        s.handle_event(&InputEvent::MouseButtonDown {
            x: handle.x() + handle.width() as i32 / 2,
            y: handle.y() + 5,
            button: PointerButton::Left,
        });
        s.handle_event(&InputEvent::MouseMotion { x, y: 200 });
        s.handle_event(&InputEvent::MouseButtonUp {
            x,
            y: 200,
            button: PointerButton::Left,
        });
    }

    #[test]
    fn test_value_is_linear_in_drag_position() {
        let s = slider();
        assert_eq!(s.value_at(300), 0.0);
        assert_eq!(s.value_at(350), 0.25);
        assert_eq!(s.value_at(400), 0.5);
        assert_eq!(s.value_at(500), 1.0);
    }

    #[test]
    fn test_value_clamps_outside_track() {
        let s = slider();
        assert_eq!(s.value_at(-1000), 0.0);
        assert_eq!(s.value_at(9999), 1.0);
    }

    #[test]
    fn test_drag_updates_value() {
        let mut s = slider();
        drag_to(&mut s, 350);
        assert!((s.value() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_drag_past_track_end_clamps() {
        let mut s = slider();
        drag_to(&mut s, 10_000);
        assert_eq!(s.value(), 1.0);
        drag_to(&mut s, -10_000);
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn test_motion_without_drag_does_nothing() {
        let mut s = slider();
        s.handle_event(&InputEvent::MouseMotion { x: 500, y: 200 });
        assert_eq!(s.value(), 0.5);
    }

    #[test]
    fn test_press_off_handle_does_not_start_drag() {
        let mut s = slider();
        s.handle_event(&InputEvent::MouseButtonDown {
            x: 310,
            y: 210,
            button: PointerButton::Left,
        });
        s.handle_event(&InputEvent::MouseMotion { x: 500, y: 200 });
        assert_eq!(s.value(), 0.5);
    }
}
