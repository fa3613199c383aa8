// Wire DTOs for the line-oriented input source and frame output.

use crate::interface_adapters::render::DrawFrame;
use crate::use_cases::InputEvent;
use serde::{Deserialize, Serialize};

/// Messages an input source writes, one JSON object per line.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientMessage {
    // Platform key identifier, e.g. "ArrowUp" or "w".
    KeyDown(String),
    KeyUp(String),
    // Focus lost; every held key is released.
    ReleaseAll,
}

impl From<ClientMessage> for InputEvent {
    fn from(msg: ClientMessage) -> Self {
        match msg {
            ClientMessage::KeyDown(key) => InputEvent::Press(key),
            ClientMessage::KeyUp(key) => InputEvent::Release(key),
            ClientMessage::ReleaseAll => InputEvent::ReleaseAll,
        }
    }
}

/// Messages written by frame sinks.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum OutputMessage<'a> {
    Frame(&'a DrawFrame),
}
