pub const SYSTEM_INFO_LEN: usize = 78;
pub const SERIAL_NUMBER_RANGE: std::ops::Range<usize> = 0..16;
pub const DEVICE_NAME_RANGE: std::ops::Range<usize> = 16..40;
pub const FIRMWARE_VERSION_RANGE: std::ops::Range<usize> = 40..52;
pub const TIME_RANGE: std::ops::Range<usize> = 52..76;
pub const MODEL_OFFSET: usize = 76;
pub const PASSWORD_OFFSET: usize = 77;

pub const PLAYBACK_STATUS_LEN: usize = 48;
pub const PLAYBACK_BLOCK_LEN: usize = 12;
pub const BLOCK_CURRENT_CUE_OFFSET: usize = 0;
pub const BLOCK_NEXT_CUE_OFFSET: usize = 2;

pub const DETAILED_STATUS_LEN: usize = 96;
pub const TIMING_DISABLED_OFFSET: usize = 1;
pub const MASTER_LEVEL_OFFSET: usize = 2;
pub const COMBINE_MODE_OFFSET: usize = 3;
pub const DETAIL_CURRENT_CUE_OFFSET: usize = 12;
pub const DETAIL_NEXT_CUE_OFFSET: usize = 14;
pub const DETAIL_LINKED_CUE_OFFSET: usize = 22;
pub const CURRENT_CUE_NAME_RANGE: std::ops::Range<usize> = 32..64;
pub const NEXT_CUE_NAME_RANGE: std::ops::Range<usize> = 64..96;

/// Slots in one DMX universe; the output-levels response is exactly this long.
pub const DMX_CHANNELS: usize = 512;
pub const OUTPUT_LEVELS_LEN: usize = DMX_CHANNELS;

// Raw 16-bit cue values the device uses to mean "no cue loaded".
pub const CUE_NONE_CLEARED: u16 = 0;
pub const CUE_NONE: u16 = u16::MAX;
