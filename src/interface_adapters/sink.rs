// Frame sinks: where composed draw data ends up.

use crate::interface_adapters::protocol::OutputMessage;
use crate::interface_adapters::render::DrawFrame;
use std::fmt;
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug)]
pub enum RenderError {
    // Output is gone; the render loop should stop.
    Io(std::io::Error),
    // A single frame could not be encoded; later frames may still succeed.
    Encode(serde_json::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Io(e) => write!(f, "frame output failed: {e}"),
            RenderError::Encode(e) => write!(f, "frame encoding failed: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(e) => Some(e),
            RenderError::Encode(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError::Io(e)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(e: serde_json::Error) -> Self {
        RenderError::Encode(e)
    }
}

/// Backend that consumes one composed frame at a time.
pub trait FrameSink: Send {
    fn present(&mut self, frame: &DrawFrame) -> Result<(), RenderError>;
}

/// Writes each frame as one JSON line.
pub struct JsonLinesSink<W> {
    out: W,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> FrameSink for JsonLinesSink<W> {
    fn present(&mut self, frame: &DrawFrame) -> Result<(), RenderError> {
        let line = serde_json::to_string(&OutputMessage::Frame(frame))?;
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Logs a frame summary: every frame at debug, at most one per interval at info.
pub struct LogSink {
    summary_every: Duration,
    last_summary: Option<Instant>,
}

impl LogSink {
    pub fn new(summary_every: Duration) -> Self {
        Self {
            summary_every,
            last_summary: None,
        }
    }
}

impl FrameSink for LogSink {
    fn present(&mut self, frame: &DrawFrame) -> Result<(), RenderError> {
        let hull = &frame.player;
        debug!(
            tick = frame.tick,
            frame_dt_ms = frame.frame_dt_ms,
            particles = frame.particles.len(),
            "frame"
        );

        let due = self
            .last_summary
            .is_none_or(|at| at.elapsed() >= self.summary_every);
        if due {
            self.last_summary = Some(Instant::now());
            info!(
                tick = frame.tick,
                x = hull.center.x,
                y = hull.center.y,
                angle = hull.angle,
                zoom = frame.camera.zoom,
                particles = frame.particles.len(),
                grid_dots = frame.grid.len(),
                "lander"
            );
        }
        Ok(())
    }
}
