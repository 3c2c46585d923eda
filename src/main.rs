use std::time::{Duration, Instant};

use sdl2::pixels::Color;

mod gui;
mod input;
mod player;
mod render;
mod screen;
mod screens;
mod settings;
mod text;

use input::{InputEvent, InputState};
use screen::{ScreenId, StateError, StateManager};
use screens::{CharacterScreen, GameplayScreen, OptionsScreen, SplashScreen, TitleScreen};

// Window/play-area resolution constants
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

const TARGET_FPS: u32 = 60;

/// Registers the five screens and queues the initial transition to the
/// splash screen.
fn build_state_manager() -> Result<StateManager, StateError> {
    let mut manager = StateManager::new();
    manager.register(ScreenId::Splash, Box::new(SplashScreen::new()))?;
    manager.register(ScreenId::Title, Box::new(TitleScreen::new()))?;
    manager.register(ScreenId::Character, Box::new(CharacterScreen::new()))?;
    manager.register(ScreenId::Game, Box::new(GameplayScreen::new()))?;
    manager.register(ScreenId::Options, Box::new(OptionsScreen::new()))?;
    manager.request_transition(ScreenId::Splash)?;
    Ok(manager)
}

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window("Your Game", WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;

    // Needed for the name-editing TextInput events.
    video_subsystem.text_input().start();

    let mut manager = build_state_manager().map_err(|e| e.to_string())?;

    let mut last_frame = Instant::now();
    'running: loop {
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        for event in event_pump.poll_iter() {
            match input::translate_event(&event) {
                Some(InputEvent::Quit) => break 'running,
                Some(translated) => manager.dispatch_event(&translated),
                None => {}
            }
        }
        let input_state = InputState::from_keyboard(&event_pump.keyboard_state());

        manager.tick(dt, &input_state).map_err(|e| e.to_string())?;
        if manager.quit_requested() {
            break 'running;
        }

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();
        manager.render(&mut canvas)?;
        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(Duration::new(0, 1_000_000_000u32 / TARGET_FPS));
    }

    println!("Shutting down");
    Ok(())
}
