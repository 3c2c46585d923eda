//! Screen State Management
//!
//! The heart of the shell: a registry of named screens, a single active
//! screen, and deferred transitions between them. Exactly one screen
//! receives events, updates, and draw calls each frame.
//!
//! # Transition semantics
//!
//! Screens never swap themselves in directly. They record a request in the
//! [`ScreenContext`] handed to their hooks, and the manager applies at most
//! one pending request at the top of the next [`StateManager::tick`]:
//! `exit()` on the old screen, `enter()` on the new one, then `update()` on
//! the new screen in the same frame. Multiple requests within one frame are
//! last-write-wins (single-slot design).

use std::collections::HashMap;
use std::fmt;

use crate::input::{InputEvent, InputState};
use crate::render::RenderSurface;

/// Identifies a registered screen. Stable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Splash,
    Title,
    Character,
    Game,
    Options,
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScreenId::Splash => "splash",
            ScreenId::Title => "title",
            ScreenId::Character => "character",
            ScreenId::Game => "game",
            ScreenId::Options => "options",
        };
        write!(f, "{}", name)
    }
}

/// Errors from screen registration and transitions.
///
/// Both variants indicate programming defects, not recoverable runtime
/// conditions; callers propagate them up to `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// A screen was registered twice under the same id.
    DuplicateId(ScreenId),
    /// A transition targeted an id with no registered screen.
    UnknownScreen(ScreenId),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::DuplicateId(id) => write!(f, "screen '{}' is already registered", id),
            StateError::UnknownScreen(id) => {
                write!(f, "transition requested to unregistered screen '{}'", id)
            }
        }
    }
}

impl std::error::Error for StateError {}

/// Capability handle passed into every screen hook.
///
/// This is the only way a screen can affect anything outside itself:
/// request a transition, request application shutdown, or record where the
/// options screen should return to. Screens hold no reference back to the
/// manager and cannot touch the registry.
pub struct ScreenContext {
    pending: Option<ScreenId>,
    quit: bool,
    return_target: ScreenId,
}

impl ScreenContext {
    pub fn new() -> Self {
        ScreenContext {
            pending: None,
            quit: false,
            // Options falls back to the title screen when nobody recorded
            // a caller.
            return_target: ScreenId::Title,
        }
    }

    /// Requests a transition, replacing any earlier request this frame.
    pub fn goto(&mut self, id: ScreenId) {
        self.pending = Some(id);
    }

    /// Currently pending transition target, if any.
    pub fn pending(&self) -> Option<ScreenId> {
        self.pending
    }

    pub(crate) fn take_pending(&mut self) -> Option<ScreenId> {
        self.pending.take()
    }

    /// Asks the application loop to terminate after this frame.
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Records which screen the options screen should return to on "Back".
    /// Called by the opening screen before it transitions to options.
    pub fn set_return_target(&mut self, id: ScreenId) {
        self.return_target = id;
    }

    pub fn return_target(&self) -> ScreenId {
        self.return_target
    }
}

impl Default for ScreenContext {
    fn default() -> Self {
        ScreenContext::new()
    }
}

/// A self-contained unit of interactive behavior: one "page" of the game.
///
/// Construction happens once at registration and must not run setup;
/// `enter` re-initializes transient state (timers, widget layouts) every
/// time the screen becomes active, so returning to a screen re-runs its
/// setup deterministically.
pub trait Screen {
    /// Called when this screen becomes active.
    fn enter(&mut self, _ctx: &mut ScreenContext) {}

    /// Called when another screen takes over.
    fn exit(&mut self, _ctx: &mut ScreenContext) {}

    /// Handles one discrete input event.
    fn handle_event(&mut self, event: &InputEvent, ctx: &mut ScreenContext);

    /// Advances the screen by `dt` seconds. `input` is the polled
    /// directional key snapshot for this frame.
    fn update(&mut self, dt: f32, input: &InputState, ctx: &mut ScreenContext);

    /// Draws the screen. Must not mutate screen state.
    fn draw(&self, surface: &mut dyn RenderSurface) -> Result<(), String>;
}

/// Owns the screen registry, the active-screen pointer, and the pending
/// transition slot.
pub struct StateManager {
    screens: HashMap<ScreenId, Box<dyn Screen>>,
    active: Option<ScreenId>,
    ctx: ScreenContext,
}

impl StateManager {
    pub fn new() -> Self {
        StateManager {
            screens: HashMap::new(),
            active: None,
            ctx: ScreenContext::new(),
        }
    }

    /// Registers a screen. Registering the same id twice is an error.
    pub fn register(&mut self, id: ScreenId, screen: Box<dyn Screen>) -> Result<(), StateError> {
        if self.screens.contains_key(&id) {
            return Err(StateError::DuplicateId(id));
        }
        self.screens.insert(id, screen);
        Ok(())
    }

    /// Requests a transition from outside any screen (startup, tests).
    pub fn request_transition(&mut self, id: ScreenId) -> Result<(), StateError> {
        if !self.screens.contains_key(&id) {
            return Err(StateError::UnknownScreen(id));
        }
        self.ctx.goto(id);
        Ok(())
    }

    /// Forwards one event to the active screen. No-op when none is active.
    pub fn dispatch_event(&mut self, event: &InputEvent) {
        if let Some(id) = self.active {
            if let Some(screen) = self.screens.get_mut(&id) {
                screen.handle_event(event, &mut self.ctx);
            }
        }
    }

    /// Applies at most one pending transition, then updates the active
    /// screen. A freshly entered screen receives its first `update` in the
    /// same frame it becomes active. A transition requested during `enter`
    /// stays pending for the next tick.
    pub fn tick(&mut self, dt: f32, input: &InputState) -> Result<(), StateError> {
        if let Some(next) = self.ctx.take_pending() {
            if !self.screens.contains_key(&next) {
                return Err(StateError::UnknownScreen(next));
            }
            if let Some(prev) = self.active.take() {
                if let Some(screen) = self.screens.get_mut(&prev) {
                    screen.exit(&mut self.ctx);
                }
            }
            self.active = Some(next);
            if let Some(screen) = self.screens.get_mut(&next) {
                screen.enter(&mut self.ctx);
            }
        }

        if let Some(id) = self.active {
            if let Some(screen) = self.screens.get_mut(&id) {
                screen.update(dt, input, &mut self.ctx);
            }
        }
        Ok(())
    }

    /// Draws the active screen. No-op when none is active.
    pub fn render(&self, surface: &mut dyn RenderSurface) -> Result<(), String> {
        if let Some(id) = self.active {
            if let Some(screen) = self.screens.get(&id) {
                screen.draw(surface)?;
            }
        }
        Ok(())
    }

    pub fn active(&self) -> Option<ScreenId> {
        self.active
    }

    pub fn quit_requested(&self) -> bool {
        self.ctx.quit_requested()
    }

    /// Read access to the shared context, mainly for tests and the loop.
    pub fn context(&self) -> &ScreenContext {
        &self.ctx
    }
}

impl Default for StateManager {
    fn default() -> Self {
        StateManager::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use sdl2::pixels::Color;
    use sdl2::rect::Rect;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Screen that logs its lifecycle calls into a shared journal and can
    /// optionally request a transition from its update hook.
    struct Probe {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
        goto_on_update: Option<ScreenId>,
    }

    impl Probe {
        fn new(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Self {
            Probe {
                name,
                log: Rc::clone(log),
                goto_on_update: None,
            }
        }

        fn push(&self, hook: &str) {
            self.log.borrow_mut().push(format!("{}:{}", self.name, hook));
        }
    }

    impl Screen for Probe {
        fn enter(&mut self, _ctx: &mut ScreenContext) {
            self.push("enter");
        }

        fn exit(&mut self, _ctx: &mut ScreenContext) {
            self.push("exit");
        }

        fn handle_event(&mut self, _event: &InputEvent, _ctx: &mut ScreenContext) {
            self.push("event");
        }

        fn update(&mut self, _dt: f32, _input: &InputState, ctx: &mut ScreenContext) {
            self.push("update");
            if let Some(target) = self.goto_on_update.take() {
                ctx.goto(target);
            }
        }

        fn draw(&self, _surface: &mut dyn RenderSurface) -> Result<(), String> {
            self.push("draw");
            Ok(())
        }
    }

    /// Surface that counts calls but draws nothing.
    struct NullSurface {
        calls: usize,
    }

    impl NullSurface {
        fn new() -> Self {
            NullSurface { calls: 0 }
        }
    }

    impl RenderSurface for NullSurface {
        fn size(&self) -> (u32, u32) {
            (800, 600)
        }

        fn clear(&mut self, _color: Color) {
            self.calls += 1;
        }

        fn fill_rect(&mut self, _rect: Rect, _color: Color) -> Result<(), String> {
            self.calls += 1;
            Ok(())
        }

        fn outline_rect(
            &mut self,
            _rect: Rect,
            _color: Color,
            _thickness: u32,
        ) -> Result<(), String> {
            self.calls += 1;
            Ok(())
        }

        fn line(
            &mut self,
            _x1: i32,
            _y1: i32,
            _x2: i32,
            _y2: i32,
            _color: Color,
        ) -> Result<(), String> {
            self.calls += 1;
            Ok(())
        }

        fn fill_circle(
            &mut self,
            _cx: i32,
            _cy: i32,
            _radius: i32,
            _color: Color,
        ) -> Result<(), String> {
            self.calls += 1;
            Ok(())
        }

        fn stroke_circle(
            &mut self,
            _cx: i32,
            _cy: i32,
            _radius: i32,
            _color: Color,
            _thickness: u32,
        ) -> Result<(), String> {
            self.calls += 1;
            Ok(())
        }

        fn text(
            &mut self,
            _text: &str,
            _x: i32,
            _y: i32,
            _color: Color,
            _scale: u32,
        ) -> Result<(), String> {
            self.calls += 1;
            Ok(())
        }
    }

    fn manager_with_probes(log: &Rc<RefCell<Vec<String>>>) -> StateManager {
        let mut manager = StateManager::new();
        manager
            .register(ScreenId::Splash, Box::new(Probe::new("splash", log)))
            .unwrap();
        manager
            .register(ScreenId::Title, Box::new(Probe::new("title", log)))
            .unwrap();
        manager
    }

    #[test]
    fn test_duplicate_registration_errors() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = manager_with_probes(&log);
        let result = manager.register(ScreenId::Title, Box::new(Probe::new("dup", &log)));
        assert_eq!(result, Err(StateError::DuplicateId(ScreenId::Title)));
    }

    #[test]
    fn test_transition_to_unregistered_screen_errors() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = manager_with_probes(&log);
        assert_eq!(
            manager.request_transition(ScreenId::Options),
            Err(StateError::UnknownScreen(ScreenId::Options))
        );
    }

    #[test]
    fn test_pending_unregistered_screen_fails_tick() {
        // A screen can request an id the manager never saw; the defect
        // surfaces on the next tick.
        let log = Rc::new(RefCell::new(Vec::new()));
        let probe = Probe {
            name: "rogue",
            log: Rc::clone(&log),
            goto_on_update: Some(ScreenId::Game),
        };
        let mut manager = StateManager::new();
        manager.register(ScreenId::Splash, Box::new(probe)).unwrap();
        manager.request_transition(ScreenId::Splash).unwrap();
        manager.tick(0.016, &InputState::default()).unwrap();
        assert_eq!(
            manager.tick(0.016, &InputState::default()),
            Err(StateError::UnknownScreen(ScreenId::Game))
        );
    }

    #[test]
    fn test_last_transition_request_wins() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = manager_with_probes(&log);
        manager.request_transition(ScreenId::Splash).unwrap();
        manager.request_transition(ScreenId::Title).unwrap();
        manager.tick(0.016, &InputState::default()).unwrap();

        assert_eq!(manager.active(), Some(ScreenId::Title));
        assert_eq!(*log.borrow(), vec!["title:enter", "title:update"]);
    }

    #[test]
    fn test_exit_enter_update_order_on_transition() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = manager_with_probes(&log);
        manager.request_transition(ScreenId::Splash).unwrap();
        manager.tick(0.016, &InputState::default()).unwrap();
        log.borrow_mut().clear();

        manager.request_transition(ScreenId::Title).unwrap();
        manager.tick(0.016, &InputState::default()).unwrap();

        // Old screen exits, new screen enters, and the new screen gets its
        // first update in the same frame.
        assert_eq!(
            *log.borrow(),
            vec!["splash:exit", "title:enter", "title:update"]
        );
        assert_eq!(manager.active(), Some(ScreenId::Title));
    }

    #[test]
    fn test_transition_applied_exactly_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = manager_with_probes(&log);
        manager.request_transition(ScreenId::Title).unwrap();
        manager.tick(0.016, &InputState::default()).unwrap();
        manager.tick(0.016, &InputState::default()).unwrap();

        let entries = log.borrow();
        let enters = entries.iter().filter(|e| *e == "title:enter").count();
        assert_eq!(enters, 1);
    }

    #[test]
    fn test_dispatch_and_render_are_noops_without_active_screen() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = manager_with_probes(&log);

        manager.dispatch_event(&InputEvent::KeyDown(Key::Other));
        let mut surface = NullSurface::new();
        manager.render(&mut surface).unwrap();
        manager.tick(0.016, &InputState::default()).unwrap();

        assert!(log.borrow().is_empty());
        assert_eq!(surface.calls, 0);
    }

    #[test]
    fn test_events_reach_only_the_active_screen() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = manager_with_probes(&log);
        manager.request_transition(ScreenId::Splash).unwrap();
        manager.tick(0.016, &InputState::default()).unwrap();
        log.borrow_mut().clear();

        manager.dispatch_event(&InputEvent::KeyDown(Key::Other));
        assert_eq!(*log.borrow(), vec!["splash:event"]);
    }

    #[test]
    fn test_render_forwards_to_active_screen() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = manager_with_probes(&log);
        manager.request_transition(ScreenId::Splash).unwrap();
        manager.tick(0.016, &InputState::default()).unwrap();
        log.borrow_mut().clear();

        let mut surface = NullSurface::new();
        manager.render(&mut surface).unwrap();
        assert_eq!(*log.borrow(), vec!["splash:draw"]);
    }

    #[test]
    fn test_transition_requested_in_update_applies_next_tick() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = StateManager::new();
        let probe = Probe {
            name: "splash",
            log: Rc::clone(&log),
            goto_on_update: Some(ScreenId::Title),
        };
        manager.register(ScreenId::Splash, Box::new(probe)).unwrap();
        manager
            .register(ScreenId::Title, Box::new(Probe::new("title", &log)))
            .unwrap();

        manager.request_transition(ScreenId::Splash).unwrap();
        manager.tick(0.016, &InputState::default()).unwrap();
        assert_eq!(manager.active(), Some(ScreenId::Splash));

        manager.tick(0.016, &InputState::default()).unwrap();
        assert_eq!(manager.active(), Some(ScreenId::Title));
    }

    #[test]
    fn test_return_target_defaults_to_title() {
        let manager = StateManager::new();
        assert_eq!(manager.context().return_target(), ScreenId::Title);
    }
}
