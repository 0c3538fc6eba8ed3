//! Transport capability and the client facade.
//!
//! The codec never speaks HTTP itself. A [`Transport`] implementation owns
//! the connection, the surrounding `get.cgi`/`exe.cgi` URLs, and any retry
//! or timeout policy; this module only supplies the request and command
//! strings and interprets response payloads. The device has no documented
//! concurrent-request semantics, so transports are expected to serialize
//! requests to one controller.

use crate::protocol::command::{self, CommandError};
use crate::protocol::response::{
    decode_detailed_playback_status, decode_output_levels, decode_playback_status,
    decode_system_info, layout,
};
use crate::{DetailedPlaybackStatus, Playback, PlaybackStatus, SystemInfo};

/// Capability for reaching one controller.
///
/// `get` submits a state query and returns the raw response bytes, or `None`
/// when the device did not answer usably. `execute` submits a mutating
/// command; the device's reply to commands carries nothing the codec
/// interprets, so it is fire-and-forget.
pub trait Transport {
    fn get(&self, request: &str) -> Option<Vec<u8>>;
    fn execute(&self, command: &str);
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, request: &str) -> Option<Vec<u8>> {
        (**self).get(request)
    }

    fn execute(&self, command: &str) {
        (**self).execute(command)
    }
}

/// A state query and its literal protocol request string.
///
/// # Examples
/// ```
/// use cueserver_core::{Playback, Query};
///
/// assert_eq!(Query::SystemInfo.request(), "SI");
/// assert_eq!(Query::DetailedPlayback(Playback::Playback2).request(), "PI&id=2");
/// assert_eq!(Query::OutputLevels.expected_len(), 512);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    SystemInfo,
    PlaybackStatus,
    DetailedPlayback(Playback),
    OutputLevels,
}

impl Query {
    /// The request string embedded in the transport's `get` URL.
    pub fn request(&self) -> String {
        match self {
            Query::SystemInfo => "SI".to_string(),
            Query::PlaybackStatus => "PS".to_string(),
            Query::DetailedPlayback(playback) => format!("PI&id={}", playback.id()),
            Query::OutputLevels => "OUT".to_string(),
        }
    }

    /// Exact response length this query must produce to decode.
    pub fn expected_len(&self) -> usize {
        match self {
            Query::SystemInfo => layout::SYSTEM_INFO_LEN,
            Query::PlaybackStatus => layout::PLAYBACK_STATUS_LEN,
            Query::DetailedPlayback(_) => layout::DETAILED_STATUS_LEN,
            Query::OutputLevels => layout::OUTPUT_LEVELS_LEN,
        }
    }
}

/// Facade pairing the codec with a transport.
///
/// Query methods fail soft: a missing or malformed response yields `None`.
/// Command methods fail hard: invalid parameters return an error and nothing
/// is submitted.
///
/// # Examples
/// ```no_run
/// use cueserver_core::{CueServerClient, Transport};
///
/// fn dump_levels<T: Transport>(client: &CueServerClient<T>) {
///     if let Some(levels) = client.output_levels() {
///         println!("channel 1 at {}", levels[0]);
///     }
/// }
/// ```
pub struct CueServerClient<T> {
    transport: T,
}

impl<T: Transport> CueServerClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetches and decodes device identification and state.
    pub fn system_info(&self) -> Option<SystemInfo> {
        let payload = self.transport.get(&Query::SystemInfo.request())?;
        decode_system_info(&payload)
    }

    /// Fetches and decodes the aggregate status of all four playbacks.
    pub fn playback_status(&self) -> Option<PlaybackStatus> {
        let payload = self.transport.get(&Query::PlaybackStatus.request())?;
        decode_playback_status(&payload)
    }

    /// Fetches and decodes detailed status for one playback.
    pub fn detailed_playback_status(&self, playback: Playback) -> Option<DetailedPlaybackStatus> {
        let payload = self
            .transport
            .get(&Query::DetailedPlayback(playback).request())?;
        decode_detailed_playback_status(playback, &payload)
    }

    /// Fetches the current output levels, one byte per DMX channel in
    /// channel order 1..=512.
    pub fn output_levels(&self) -> Option<[u8; layout::DMX_CHANNELS]> {
        let payload = self.transport.get(&Query::OutputLevels.request())?;
        decode_output_levels(&payload)
    }

    /// Plays a cue on playback 1.
    pub fn play_cue(&self, cue_number: f64) -> Result<(), CommandError> {
        self.play_cue_on(cue_number, Playback::Playback1)
    }

    /// Plays a cue on the given playback.
    pub fn play_cue_on(&self, cue_number: f64, playback: Playback) -> Result<(), CommandError> {
        self.submit(command::play_cue(playback, cue_number)?);
        Ok(())
    }

    /// Clears the given playback.
    pub fn clear_playback(&self, playback: Playback) {
        self.submit(command::clear_playback(playback));
    }

    /// Sets one channel to a level on playback 1 with no fade time.
    pub fn set_channel(&self, channel: u16, level: u16) -> Result<(), CommandError> {
        self.set_channel_with(channel, level, 0.0, Playback::Playback1)
    }

    /// Sets one channel to a level with an explicit fade time and playback.
    pub fn set_channel_with(
        &self,
        channel: u16,
        level: u16,
        seconds: f64,
        playback: Playback,
    ) -> Result<(), CommandError> {
        self.submit(command::set_channel(playback, channel, level, seconds)?);
        Ok(())
    }

    /// Sets a channel range to a level on playback 1 with no fade time.
    pub fn set_channel_range(&self, start: u16, end: u16, level: u16) -> Result<(), CommandError> {
        self.set_channel_range_with(start, end, level, 0.0, Playback::Playback1)
    }

    /// Sets a channel range to a level with an explicit fade time and
    /// playback.
    pub fn set_channel_range_with(
        &self,
        start: u16,
        end: u16,
        level: u16,
        seconds: f64,
        playback: Playback,
    ) -> Result<(), CommandError> {
        self.submit(command::set_channel_range(
            playback, start, end, level, seconds,
        )?);
        Ok(())
    }

    /// Records a cue with the given fade uptime and downtime.
    pub fn record_cue(
        &self,
        cue_number: f64,
        uptime_seconds: f64,
        downtime_seconds: f64,
    ) -> Result<(), CommandError> {
        self.submit(command::record_cue(
            cue_number,
            uptime_seconds,
            downtime_seconds,
        )?);
        Ok(())
    }

    /// Deletes a cue.
    pub fn delete_cue(&self, cue_number: f64) -> Result<(), CommandError> {
        self.submit(command::delete_cue(cue_number)?);
        Ok(())
    }

    /// Updates a cue in place.
    pub fn update_cue(&self, cue_number: f64) -> Result<(), CommandError> {
        self.submit(command::update_cue(cue_number)?);
        Ok(())
    }

    fn submit(&self, command: String) {
        tracing::debug!(command = %command, "submitting exe command");
        self.transport.execute(&command);
    }
}

#[cfg(test)]
mod tests {
    use super::Query;
    use crate::Playback;

    #[test]
    fn request_strings_are_protocol_literals() {
        assert_eq!(Query::SystemInfo.request(), "SI");
        assert_eq!(Query::PlaybackStatus.request(), "PS");
        assert_eq!(Query::OutputLevels.request(), "OUT");
        for playback in Playback::ALL {
            assert_eq!(
                Query::DetailedPlayback(playback).request(),
                format!("PI&id={}", playback.id())
            );
        }
    }

    #[test]
    fn expected_lengths_match_layout() {
        assert_eq!(Query::SystemInfo.expected_len(), 78);
        assert_eq!(Query::PlaybackStatus.expected_len(), 48);
        assert_eq!(
            Query::DetailedPlayback(Playback::Playback1).expected_len(),
            96
        );
        assert_eq!(Query::OutputLevels.expected_len(), 512);
    }
}
