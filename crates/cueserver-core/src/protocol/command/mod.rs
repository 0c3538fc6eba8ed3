//! Encoding of `exe` commands.
//!
//! Commands mutate device state, so the policy is the inverse of decoding:
//! every parameter is validated eagerly and a failure reports an error
//! before any string is built. A mis-sent command has physical effects on
//! stage, never a silent no-op.
//!
//! Some characters are pre-escaped as literal percent-sequences (`%23`,
//! `%3E`, `%2F`, `%3B`); this is the device's own convention, not generic
//! URL encoding, and the strings below are submitted verbatim.

pub mod encoder;
pub mod error;

pub use encoder::{
    clear_playback, delete_cue, play_cue, record_cue, set_channel, set_channel_range, update_cue,
};
pub use error::CommandError;
