//! Concrete Screens
//!
//! The five screens of the shell. Each is an independent [`crate::screen::Screen`]
//! implementation; they share no state except through the
//! [`crate::screen::ScreenContext`] transition handle.

pub mod character;
pub mod gameplay;
pub mod options;
pub mod splash;
pub mod title;

pub use character::CharacterScreen;
pub use gameplay::GameplayScreen;
pub use options::OptionsScreen;
pub use splash::SplashScreen;
pub use title::TitleScreen;
