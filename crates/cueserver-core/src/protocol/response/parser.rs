use crate::{
    CombineMode, Cue, DetailedPlaybackStatus, Model, Playback, PlaybackInfo, PlaybackStatus,
    SystemInfo,
};

use super::layout;
use super::reader::ResponseReader;

/// Decodes a raw 16-bit cue value, without a name.
///
/// The device reports 0 or 65535 when no cue is loaded; any other value is
/// the cue number stored as integer tenths.
pub fn decode_cue(raw: u16) -> Option<Cue> {
    decode_named_cue(raw, None)
}

/// Decodes a raw 16-bit cue value with an optional display name.
pub fn decode_named_cue(raw: u16, name: Option<String>) -> Option<Cue> {
    if raw == layout::CUE_NONE_CLEARED || raw == layout::CUE_NONE {
        return None;
    }
    let number = f64::from(raw) / 10.0;
    match name {
        Some(name) => Cue::named(number, name).ok(),
        None => Cue::new(number).ok(),
    }
}

/// Decodes a system-info response (78 bytes).
pub fn decode_system_info(payload: &[u8]) -> Option<SystemInfo> {
    require_len("system info", layout::SYSTEM_INFO_LEN, payload)?;
    let reader = ResponseReader::new(payload);

    Some(SystemInfo {
        serial_number: reader.read_ascii_field(layout::SERIAL_NUMBER_RANGE),
        device_name: reader.read_ascii_field(layout::DEVICE_NAME_RANGE),
        firmware_version: reader.read_ascii_field(layout::FIRMWARE_VERSION_RANGE),
        time: reader.read_ascii_field(layout::TIME_RANGE),
        model: Model::from_code(reader.read_u8(layout::MODEL_OFFSET)),
        has_password: reader.read_u8(layout::PASSWORD_OFFSET) != 0,
    })
}

/// Decodes an aggregate playback-status response (48 bytes).
///
/// Four 12-byte blocks map in order to playbacks 1–4; within each block the
/// first two bytes are the current cue and the next two the next cue.
pub fn decode_playback_status(payload: &[u8]) -> Option<PlaybackStatus> {
    require_len("playback status", layout::PLAYBACK_STATUS_LEN, payload)?;
    let reader = ResponseReader::new(payload);

    let playbacks = Playback::ALL.map(|playback| {
        let base = (playback.id() as usize - 1) * layout::PLAYBACK_BLOCK_LEN;
        PlaybackInfo {
            playback,
            current_cue: decode_cue(reader.read_u16_le(base + layout::BLOCK_CURRENT_CUE_OFFSET)),
            next_cue: decode_cue(reader.read_u16_le(base + layout::BLOCK_NEXT_CUE_OFFSET)),
        }
    });

    Some(PlaybackStatus { playbacks })
}

/// Decodes a detailed playback-status response (96 bytes) for `playback`.
pub fn decode_detailed_playback_status(
    playback: Playback,
    payload: &[u8],
) -> Option<DetailedPlaybackStatus> {
    require_len(
        "detailed playback status",
        layout::DETAILED_STATUS_LEN,
        payload,
    )?;
    let reader = ResponseReader::new(payload);

    let current_name = reader.read_ascii_field(layout::CURRENT_CUE_NAME_RANGE);
    let next_name = reader.read_ascii_field(layout::NEXT_CUE_NAME_RANGE);

    Some(DetailedPlaybackStatus {
        playback,
        timing_disabled: reader.read_u8(layout::TIMING_DISABLED_OFFSET) != 0,
        master_level: reader.read_u8(layout::MASTER_LEVEL_OFFSET),
        combine_mode: CombineMode::from_code(reader.read_u8(layout::COMBINE_MODE_OFFSET)),
        current_cue: decode_named_cue(
            reader.read_u16_le(layout::DETAIL_CURRENT_CUE_OFFSET),
            non_empty(current_name),
        ),
        next_cue: decode_named_cue(
            reader.read_u16_le(layout::DETAIL_NEXT_CUE_OFFSET),
            non_empty(next_name),
        ),
        linked_cue: decode_cue(reader.read_u16_le(layout::DETAIL_LINKED_CUE_OFFSET)),
    })
}

/// Decodes an output-levels response (512 bytes), one level per DMX channel
/// in channel order.
pub fn decode_output_levels(payload: &[u8]) -> Option<[u8; layout::DMX_CHANNELS]> {
    require_len("output levels", layout::OUTPUT_LEVELS_LEN, payload)?;
    let mut levels = [0u8; layout::DMX_CHANNELS];
    levels.copy_from_slice(payload);
    Some(levels)
}

// An all-zero name window decodes to an unnamed cue.
fn non_empty(name: String) -> Option<String> {
    if name.is_empty() { None } else { Some(name) }
}

fn require_len(kind: &str, expected: usize, payload: &[u8]) -> Option<()> {
    if payload.len() != expected {
        tracing::debug!(
            kind,
            expected,
            actual = payload.len(),
            "response length mismatch, discarding"
        );
        return None;
    }
    Some(())
}
