//! Screen-Space GUI Widgets
//!
//! Stateful widgets rendered with procedural primitives at fixed screen
//! positions. Widgets consume [`crate::input::InputEvent`]s and report
//! interactions back to the owning screen; they never talk to the state
//! manager themselves.

pub mod button;
pub mod slider;

pub use button::Button;
pub use slider::Slider;
