use crate::game::Phase;
use sdl2::event::Event;
use sdl2::keyboard::{KeyboardState, Keycode, Scancode};
use sdl2::EventPump;

/// Discrete actions the player can trigger
///
/// Steering is not an action: it is continuous and sampled as [`HeldKeys`].
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    /// Start a new run after crashing
    Restart,
    /// Close the game
    Quit,
}

/// Input context determines which actions are available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Driving; restart is not available
    Playing,
    /// Crashed; the restart key is live
    GameOver,
}

impl From<Phase> for InputContext {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Playing => InputContext::Playing,
            Phase::GameOver => InputContext::GameOver,
        }
    }
}

/// Steering keys held down at the moment the frame samples the keyboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// Arrow keys steer; A/D work as well
    pub fn from_keyboard(keyboard_state: &KeyboardState) -> Self {
        HeldKeys {
            left: keyboard_state.is_scancode_pressed(Scancode::Left)
                || keyboard_state.is_scancode_pressed(Scancode::A),
            right: keyboard_state.is_scancode_pressed(Scancode::Right)
                || keyboard_state.is_scancode_pressed(Scancode::D),
        }
    }
}

/// Where the game loop gets its input from
///
/// Implemented by [`SdlInput`] for the real window and by scripted sources
/// in tests.
pub trait InputSource {
    /// Drains every pending event without blocking, returning the actions
    /// valid in `context`
    fn poll_actions(&mut self, context: InputContext) -> Vec<GameAction>;

    /// Current steering key state
    fn held_keys(&self) -> HeldKeys;
}

/// InputSystem translates SDL2 events into GameActions
///
/// Events that mean nothing in the current context are dropped here, so the
/// game loop only ever sees actions it can act on.
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    /// Creates a new InputSystem starting in Playing context
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Playing,
        }
    }

    pub fn update_context(&mut self, context: InputContext) {
        self.context = context;
    }

    /// Polls every pending SDL2 event and converts it to actions
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate(&event))
            .collect()
    }

    /// Maps a single SDL2 event to an action, if it has one in this context
    pub fn translate(&self, event: &Event) -> Option<GameAction> {
        match event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(key), ..
            } => self.handle_keydown(*key),
            _ => None,
        }
    }

    fn handle_keydown(&self, key: Keycode) -> Option<GameAction> {
        match (key, self.context) {
            (Keycode::Escape, _) => Some(GameAction::Quit),
            (Keycode::R, InputContext::GameOver) => Some(GameAction::Restart),
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyboard and window events from a live SDL2 event pump
pub struct SdlInput {
    event_pump: EventPump,
    system: InputSystem,
}

impl SdlInput {
    pub fn new(event_pump: EventPump) -> Self {
        SdlInput {
            event_pump,
            system: InputSystem::new(),
        }
    }
}

impl InputSource for SdlInput {
    fn poll_actions(&mut self, context: InputContext) -> Vec<GameAction> {
        self.system.update_context(context);
        self.system.poll_events(&mut self.event_pump)
    }

    fn held_keys(&self) -> HeldKeys {
        HeldKeys::from_keyboard(&self.event_pump.keyboard_state())
    }
}
