//! Client-side codec for the CueServer lighting controller's HTTP-transported
//! binary protocol.
//!
//! The controller exposes two URL-invoked operations: a `get` request that
//! returns a fixed-length byte array describing device or playback state, and
//! an `exe` request that accepts a command string mutating device state. No
//! response carries a schema; every layout is a fixed-offset byte table and
//! every command is a positional ASCII string. This crate owns both sides:
//! decoding the four response shapes into typed values and encoding the
//! mutating operations into exact command strings. Protocol offsets are
//! captured in `layout` modules, byte conventions in `reader`s, so decoders
//! stay minimal and free of index arithmetic.
//!
//! Invariants:
//! - Decoding is soft: a missing, short, or oversized response yields `None`,
//!   never an error.
//! - Encoding is strict: every parameter is validated before a command string
//!   is built, and nothing reaches the transport on failure.
//! - All decode/encode calls are pure and stateless; callers may invoke them
//!   concurrently without coordination.
//!
//! # Examples
//! ```no_run
//! use cueserver_core::{CueServerClient, Playback, Transport};
//!
//! fn demo<T: Transport>(transport: T) {
//!     let client = CueServerClient::new(transport);
//!     if let Some(info) = client.system_info() {
//!         println!("connected to {} ({:?})", info.device_name, info.model);
//!     }
//!     client.play_cue_on(10.2, Playback::Playback2).expect("valid cue");
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod client;
pub mod protocol;

pub use client::{CueServerClient, Query, Transport};
pub use protocol::command::CommandError;
pub use protocol::response::layout::DMX_CHANNELS;

/// One of the four independent cue-execution channels on the device.
///
/// # Examples
/// ```
/// use cueserver_core::Playback;
///
/// assert_eq!(Playback::Playback2.id(), 2);
/// assert_eq!(Playback::from_id(4), Some(Playback::Playback4));
/// assert_eq!(Playback::from_id(5), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Playback {
    Playback1,
    Playback2,
    Playback3,
    Playback4,
}

impl Playback {
    /// All playbacks in device order.
    pub const ALL: [Playback; 4] = [
        Playback::Playback1,
        Playback::Playback2,
        Playback::Playback3,
        Playback::Playback4,
    ];

    /// Numeric identifier used on the wire (1–4).
    pub fn id(self) -> u8 {
        match self {
            Playback::Playback1 => 1,
            Playback::Playback2 => 2,
            Playback::Playback3 => 3,
            Playback::Playback4 => 4,
        }
    }

    /// Resolves a wire identifier; anything outside 1–4 is `None`.
    pub fn from_id(id: u8) -> Option<Playback> {
        match id {
            1 => Some(Playback::Playback1),
            2 => Some(Playback::Playback2),
            3 => Some(Playback::Playback3),
            4 => Some(Playback::Playback4),
            _ => None,
        }
    }
}

/// Error raised when constructing a [`Cue`] with a non-positive number.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("cue number must be positive: {0}")]
pub struct InvalidCueNumber(pub f64);

/// A numbered lighting look the device can fade to.
///
/// The device stores cue numbers as integer tenths, so a cue number always
/// carries exactly one significant fractional digit. The number is always
/// positive; construction enforces this.
///
/// # Examples
/// ```
/// use cueserver_core::Cue;
///
/// let cue = Cue::named(10.2, "blackout")?;
/// assert_eq!(cue.number(), 10.2);
/// assert_eq!(cue.name(), Some("blackout"));
/// assert!(Cue::new(0.0).is_err());
/// # Ok::<(), cueserver_core::InvalidCueNumber>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    number: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Cue {
    /// Creates an unnamed cue.
    pub fn new(number: f64) -> Result<Cue, InvalidCueNumber> {
        // Written to also reject NaN.
        if !(number > 0.0) {
            return Err(InvalidCueNumber(number));
        }
        Ok(Cue { number, name: None })
    }

    /// Creates a named cue.
    pub fn named(number: f64, name: impl Into<String>) -> Result<Cue, InvalidCueNumber> {
        let mut cue = Cue::new(number)?;
        cue.name = Some(name.into());
        Ok(cue)
    }

    /// Cue number, always positive.
    pub fn number(&self) -> f64 {
        self.number
    }

    /// Display name, when the device reported one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Hardware variant of the controller.
///
/// # Examples
/// ```
/// use cueserver_core::Model;
///
/// assert_eq!(Model::from_code(3), Model::Cs816);
/// assert_eq!(Model::from_code(9), Model::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Model {
    Cs800,
    Cs810,
    Cs816,
    Cs840,
    Unknown,
}

impl Model {
    /// Maps the single-byte model code; unmapped codes are `Unknown`,
    /// never an error.
    pub fn from_code(code: u8) -> Model {
        match code {
            1 => Model::Cs800,
            2 => Model::Cs810,
            3 => Model::Cs816,
            4 => Model::Cs840,
            _ => Model::Unknown,
        }
    }
}

/// How a playback's levels combine with other playbacks on the same channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombineMode {
    Merge,
    Override,
    Scale,
    Unknown,
}

impl CombineMode {
    /// Maps the single-byte combine-mode code; unmapped codes are `Unknown`.
    pub fn from_code(code: u8) -> CombineMode {
        match code {
            0 => CombineMode::Merge,
            1 => CombineMode::Override,
            2 => CombineMode::Scale,
            _ => {
                tracing::warn!(code, "unknown combine mode");
                CombineMode::Unknown
            }
        }
    }
}

/// Device identification and state returned by a system-info query.
///
/// All fields are present once decoding succeeds; decoding either fully
/// succeeds or yields nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Device serial number.
    pub serial_number: String,
    /// User-assigned device name.
    pub device_name: String,
    /// Firmware version string.
    pub firmware_version: String,
    /// Device clock as reported, an opaque ASCII field.
    pub time: String,
    /// Hardware variant.
    pub model: Model,
    /// Whether an access password is configured.
    pub has_password: bool,
}

/// Cue state of a single playback within an aggregate status response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackInfo {
    pub playback: Playback,
    /// Currently loaded cue, absent when the device reports the no-cue
    /// sentinel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_cue: Option<Cue>,
    /// Next cue in the stack, absent when the device reports the no-cue
    /// sentinel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cue: Option<Cue>,
}

/// Aggregate status of all four playbacks, decoded from one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    /// One entry per playback, in device order 1–4.
    pub playbacks: [PlaybackInfo; 4],
}

impl PlaybackStatus {
    /// Status of a single playback.
    pub fn playback(&self, playback: Playback) -> &PlaybackInfo {
        &self.playbacks[(playback.id() - 1) as usize]
    }
}

/// Detailed state of a single playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedPlaybackStatus {
    pub playback: Playback,
    /// Whether fade timing is disabled on this playback.
    pub timing_disabled: bool,
    /// Playback master level, full range of the raw byte.
    pub master_level: u8,
    pub combine_mode: CombineMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_cue: Option<Cue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cue: Option<Cue>,
    /// Cue linked to the current cue; the device reports no name for it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_cue: Option<Cue>,
}
