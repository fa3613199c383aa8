// Shared fixtures for runtime and render-loop integration tests.
#![allow(dead_code)]

use lander::RuntimeSettings;
use lander::domain::KeyBindings;
use lander::domain::tuning::{ExhaustTuning, PlayerTuning, ViewTuning};
use lander::frameworks::config::FrameOutput;
use lander::interface_adapters::render::DrawFrame;
use lander::interface_adapters::sink::{FrameSink, RenderError};
use lander::use_cases::LoopSettings;
use std::sync::{Arc, Mutex};
use std::time::Duration;

// Deterministic runtime settings at the production cadences.
pub fn settings(frame_output: FrameOutput) -> RuntimeSettings {
    RuntimeSettings {
        physics: LoopSettings {
            tick_interval: Duration::from_millis(5),
            stall_warn: Duration::from_millis(250),
        },
        render_interval: Duration::from_millis(16),
        frame_output,
        seed: Some(42),
        bindings: KeyBindings::default(),
        player: PlayerTuning::default(),
        exhaust: ExhaustTuning::default(),
        view: ViewTuning::default(),
    }
}

// Keeps every presented frame so tests can inspect them after the loop stops.
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub frames: Arc<Mutex<Vec<DrawFrame>>>,
}

impl RecordingSink {
    pub fn recorded(&self) -> Vec<DrawFrame> {
        self.frames.lock().expect("frames mutex poisoned").clone()
    }
}

impl FrameSink for RecordingSink {
    fn present(&mut self, frame: &DrawFrame) -> Result<(), RenderError> {
        self.frames
            .lock()
            .expect("frames mutex poisoned")
            .push(frame.clone());
        Ok(())
    }
}

// Sink whose output is already gone.
pub struct ClosedSink;

impl FrameSink for ClosedSink {
    fn present(&mut self, _frame: &DrawFrame) -> Result<(), RenderError> {
        Err(RenderError::Io(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        )))
    }
}
