use crate::{InvalidCueNumber, Playback};

use super::error::CommandError;

const CHANNEL_MIN: u16 = 1;
const CHANNEL_MAX: u16 = 512;
const LEVEL_MAX: u16 = 255;
const TIME_MAX_SECONDS: f64 = 65000.0;

/// Encodes `P+{id}+Q+{cue}+GO`: play a cue on a playback.
pub fn play_cue(playback: Playback, cue_number: f64) -> Result<String, CommandError> {
    check_cue_number(cue_number)?;
    Ok(format!(
        "P+{}+Q+{}+GO",
        playback.id(),
        format_tenths(cue_number)
    ))
}

/// Encodes `P+{id}+CL`: clear a playback. Infallible, playback validity is
/// carried by the type.
pub fn clear_playback(playback: Playback) -> String {
    format!("P+{}+CL", playback.id())
}

/// Encodes `T+{time}+P{id}+C+{channel}+A+%23{level}`: fade one channel to a
/// level over `seconds`.
pub fn set_channel(
    playback: Playback,
    channel: u16,
    level: u16,
    seconds: f64,
) -> Result<String, CommandError> {
    check_channel(channel)?;
    check_level(level)?;
    check_time(seconds)?;
    Ok(format!(
        "T+{}+P{}+C+{}+A+%23{}",
        format_tenths(seconds),
        playback.id(),
        channel,
        level
    ))
}

/// Encodes `T+{time}+P{id}+C+{start}%3E{end}+A%23{level}`: fade a channel
/// range to a level over `seconds`.
pub fn set_channel_range(
    playback: Playback,
    start: u16,
    end: u16,
    level: u16,
    seconds: f64,
) -> Result<String, CommandError> {
    check_channel(start)?;
    check_channel(end)?;
    if end < start {
        return Err(CommandError::InvalidChannelRange { start, end });
    }
    check_level(level)?;
    check_time(seconds)?;
    Ok(format!(
        "T+{}+P{}+C+{}%3E{}+A%23{}",
        format_tenths(seconds),
        playback.id(),
        start,
        end,
        level
    ))
}

/// Encodes `FA+{up}%2F{down}%3BRQ+{cue}`: record a cue with the given fade
/// uptime and downtime.
pub fn record_cue(
    cue_number: f64,
    uptime_seconds: f64,
    downtime_seconds: f64,
) -> Result<String, CommandError> {
    check_cue_number(cue_number)?;
    check_time(uptime_seconds)?;
    check_time(downtime_seconds)?;
    Ok(format!(
        "FA+{}%2F{}%3BRQ+{}",
        format_tenths(uptime_seconds),
        format_tenths(downtime_seconds),
        format_tenths(cue_number)
    ))
}

/// Encodes `DELQ+{cue}`: delete a cue.
pub fn delete_cue(cue_number: f64) -> Result<String, CommandError> {
    check_cue_number(cue_number)?;
    Ok(format!("DELQ+{}", format_tenths(cue_number)))
}

/// Encodes `UQ+{cue}`: update a cue in place.
pub fn update_cue(cue_number: f64) -> Result<String, CommandError> {
    check_cue_number(cue_number)?;
    Ok(format!("UQ+{}", format_tenths(cue_number)))
}

/// Formats a number to exactly one fractional digit, truncating toward zero.
///
/// The device stores one decimal digit of precision; extra precision is cut
/// at format time, after validation, so 10.25 encodes as `10.2`.
fn format_tenths(value: f64) -> String {
    let widened = format!("{value:.3}");
    match widened.split_once('.') {
        Some((whole, frac)) => format!("{whole}.{}", &frac[..1]),
        None => format!("{widened}.0"),
    }
}

fn check_cue_number(cue_number: f64) -> Result<(), CommandError> {
    // Written to also reject NaN.
    if !(cue_number > 0.0) {
        return Err(InvalidCueNumber(cue_number).into());
    }
    Ok(())
}

fn check_channel(channel: u16) -> Result<(), CommandError> {
    if !(CHANNEL_MIN..=CHANNEL_MAX).contains(&channel) {
        return Err(CommandError::InvalidChannel { channel });
    }
    Ok(())
}

fn check_level(level: u16) -> Result<(), CommandError> {
    if level > LEVEL_MAX {
        return Err(CommandError::InvalidLevel { level });
    }
    Ok(())
}

fn check_time(seconds: f64) -> Result<(), CommandError> {
    if !(0.0..=TIME_MAX_SECONDS).contains(&seconds) {
        return Err(CommandError::InvalidTime { seconds });
    }
    Ok(())
}
