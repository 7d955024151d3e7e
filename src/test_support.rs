//! Deterministic stand-ins for the platform capabilities, shared by tests

use crate::input_system::{GameAction, HeldKeys, InputContext, InputSource};
use crate::pacing::FramePacer;
use crate::render::Surface;
use crate::spawn::SpawnSource;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::collections::VecDeque;

/// Replays a fixed list of lanes, cycling when it runs out
pub struct ScriptedSpawner {
    lanes: Vec<i32>,
    next: usize,
    requests: Vec<i32>,
}

impl ScriptedSpawner {
    pub fn new(lanes: &[i32]) -> Self {
        assert!(!lanes.is_empty(), "scripted spawner needs at least one lane");
        ScriptedSpawner {
            lanes: lanes.to_vec(),
            next: 0,
            requests: Vec::new(),
        }
    }

    /// Every `max_x` the spawner was asked for, in order
    pub fn requests(&self) -> &[i32] {
        &self.requests
    }
}

impl SpawnSource for ScriptedSpawner {
    fn next_x(&mut self, max_x: i32) -> i32 {
        self.requests.push(max_x);
        let lane = self.lanes[self.next % self.lanes.len()];
        self.next += 1;
        lane
    }
}

/// One frame worth of scripted input
#[derive(Debug, Clone, Default)]
pub struct ScriptedFrame {
    pub actions: Vec<GameAction>,
    pub held: HeldKeys,
}

impl ScriptedFrame {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn holding(held: HeldKeys) -> Self {
        ScriptedFrame {
            actions: Vec::new(),
            held,
        }
    }

    pub fn action(action: GameAction) -> Self {
        ScriptedFrame {
            actions: vec![action],
            held: HeldKeys::default(),
        }
    }
}

/// Feeds scripted frames to the loop, then asks it to quit
pub struct ScriptedInput {
    frames: VecDeque<ScriptedFrame>,
    held: HeldKeys,
    pub contexts: Vec<InputContext>,
}

impl ScriptedInput {
    pub fn new(frames: Vec<ScriptedFrame>) -> Self {
        ScriptedInput {
            frames: frames.into(),
            held: HeldKeys::default(),
            contexts: Vec::new(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_actions(&mut self, context: InputContext) -> Vec<GameAction> {
        self.contexts.push(context);
        match self.frames.pop_front() {
            Some(frame) => {
                self.held = frame.held;
                frame.actions
            }
            None => vec![GameAction::Quit],
        }
    }

    fn held_keys(&self) -> HeldKeys {
        self.held
    }
}

/// Records every draw call instead of touching a window
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub clears: Vec<Color>,
    pub rects: Vec<(Rect, Color)>,
    pub presents: usize,
}

impl RecordingSurface {
    pub fn rects_in(&self, color: Color) -> Vec<Rect> {
        self.rects
            .iter()
            .filter(|(_, c)| *c == color)
            .map(|(rect, _)| *rect)
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear_to(&mut self, color: Color) -> Result<(), String> {
        self.clears.push(color);
        Ok(())
    }

    fn fill(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.rects.push((rect, color));
        Ok(())
    }

    fn present_frame(&mut self) {
        self.presents += 1;
    }
}

/// Pacer that never sleeps, counting how often it was asked to
#[derive(Debug, Default)]
pub struct CountingPacer {
    pub waits: usize,
}

impl FramePacer for CountingPacer {
    fn wait_for_next_frame(&mut self) {
        self.waits += 1;
    }
}
