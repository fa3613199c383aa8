// Line-oriented input source: decodes key messages and forwards them to the physics loop.

use crate::interface_adapters::protocol::ClientMessage;
use crate::use_cases::InputEvent;
use std::fmt;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

const LOG_THROTTLE: Duration = Duration::from_secs(2);

#[derive(Debug)]
pub enum InputError {
    Blank,
    Decode(serde_json::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Blank => write!(f, "blank input line"),
            InputError::Decode(e) => write!(f, "invalid input message: {e}"),
        }
    }
}

impl std::error::Error for InputError {}

impl From<serde_json::Error> for InputError {
    fn from(e: serde_json::Error) -> Self {
        InputError::Decode(e)
    }
}

pub fn decode_line(line: &str) -> Result<InputEvent, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Blank);
    }
    let msg: ClientMessage = serde_json::from_str(line)?;
    Ok(msg.into())
}

fn should_log(last: &mut Option<Instant>) -> bool {
    match last {
        Some(at) if at.elapsed() < LOG_THROTTLE => false,
        _ => {
            *last = Some(Instant::now());
            true
        }
    }
}

/// Reads newline-delimited key messages until EOF or until the loop hangs up.
///
/// Malformed lines are dropped. Key transitions are never dropped: a full channel makes
/// the reader wait for the physics loop to drain it.
pub async fn input_reader_task<Rd>(reader: Rd, input_tx: mpsc::Sender<InputEvent>)
where
    Rd: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut last_invalid_log = None;

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("input source closed; held keys stay as they are");
                break;
            }
            Err(e) => {
                warn!(error = %e, "failed to read input; stopping reader");
                break;
            }
        };

        let ev = match decode_line(&line) {
            Ok(ev) => ev,
            Err(InputError::Blank) => continue,
            Err(e) => {
                if should_log(&mut last_invalid_log) {
                    warn!(error = %e, "dropping input line");
                }
                continue;
            }
        };

        debug!(event = ?ev, "input received");
        if input_tx.send(ev).await.is_err() {
            debug!("physics loop gone; input reader exiting");
            break;
        }
    }
}
