use thiserror::Error;

use crate::InvalidCueNumber;

/// Errors raised by command parameter validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error(transparent)]
    InvalidCueNumber(#[from] InvalidCueNumber),
    #[error("channel must be within [1, 512]: {channel}")]
    InvalidChannel { channel: u16 },
    #[error("channel range end must not precede start: {start}..{end}")]
    InvalidChannelRange { start: u16, end: u16 },
    #[error("level must be within [0, 255]: {level}")]
    InvalidLevel { level: u16 },
    #[error("time must be within [0, 65000] seconds: {seconds}")]
    InvalidTime { seconds: f64 },
}
