//! Player Entity
//!
//! Position, fixed speed, and bounds clamping for the gameplay screen.
//! Movement is a plain vector sum of the held directions; diagonals are
//! intentionally not normalized, so diagonal travel is faster by sqrt(2).

use sdl2::pixels::Color;

use crate::input::InputState;
use crate::render::RenderSurface;

const BODY_COLOR: Color = Color::RGB(100, 150, 255);
const OUTLINE_COLOR: Color = Color::RGB(255, 255, 255);

pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Movement speed in pixels per second.
    pub speed: f32,
    /// Bounding box side length in pixels.
    pub size: f32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Player {
            x,
            y,
            speed: 200.0,
            size: 30.0,
        }
    }

    /// Moves per the held directions, then clamps so the full sprite stays
    /// inside `bounds` (play area width and height in pixels).
    pub fn update(&mut self, dt: f32, input: &InputState, bounds: (f32, f32)) {
        if input.left {
            self.x -= self.speed * dt;
        }
        if input.right {
            self.x += self.speed * dt;
        }
        if input.up {
            self.y -= self.speed * dt;
        }
        if input.down {
            self.y += self.speed * dt;
        }

        let half = self.size / 2.0;
        self.x = self.x.clamp(half, bounds.0 - half);
        self.y = self.y.clamp(half, bounds.1 - half);
    }

    pub fn draw(&self, surface: &mut dyn RenderSurface) -> Result<(), String> {
        let radius = (self.size / 2.0) as i32;
        surface.fill_circle(self.x as i32, self.y as i32, radius, BODY_COLOR)?;
        surface.stroke_circle(self.x as i32, self.y as i32, radius, OUTLINE_COLOR, 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: (f32, f32) = (800.0, 600.0);

    fn held(up: bool, down: bool, left: bool, right: bool) -> InputState {
        InputState {
            up,
            down,
            left,
            right,
        }
    }

    #[test]
    fn test_moves_at_speed_times_dt() {
        let mut p = Player::new(400.0, 300.0);
        p.update(0.5, &held(false, false, false, true), BOUNDS);
        assert_eq!(p.x, 500.0);
        assert_eq!(p.y, 300.0);
    }

    #[test]
    fn test_diagonal_is_unnormalized() {
        let mut p = Player::new(400.0, 300.0);
        p.update(0.1, &held(true, false, false, true), BOUNDS);
        assert_eq!(p.x, 420.0);
        assert_eq!(p.y, 280.0);
    }

    #[test]
    fn test_opposed_directions_cancel() {
        let mut p = Player::new(400.0, 300.0);
        p.update(0.1, &held(true, true, true, true), BOUNDS);
        assert_eq!(p.x, 400.0);
        assert_eq!(p.y, 300.0);
    }

    #[test]
    fn test_clamped_to_play_area_under_arbitrary_input() {
        let mut p = Player::new(400.0, 300.0);
        let half = p.size / 2.0;
        let sequences = [
            held(false, false, true, false),
            held(true, false, true, false),
            held(false, true, false, true),
            held(true, true, true, true),
        ];
        for _ in 0..500 {
            for input in &sequences {
                p.update(0.25, input, BOUNDS);
                assert!(p.x >= half && p.x <= BOUNDS.0 - half);
                assert!(p.y >= half && p.y <= BOUNDS.1 - half);
            }
        }
    }

    #[test]
    fn test_huge_dt_still_clamps() {
        let mut p = Player::new(400.0, 300.0);
        p.update(1000.0, &held(false, true, false, true), BOUNDS);
        assert_eq!(p.x, BOUNDS.0 - p.size / 2.0);
        assert_eq!(p.y, BOUNDS.1 - p.size / 2.0);
    }
}
