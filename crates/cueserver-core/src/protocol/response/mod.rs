//! Decoding of `get` responses.
//!
//! Every response is a fixed-length byte table; the required length doubles
//! as the shape check. Decoders return `None` for anything that is not
//! exactly the documented length, since corruption over best-effort HTTP to
//! embedded hardware is routine and must not fail the caller. Offsets live
//! in `layout`, byte conventions in `reader`.

pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::{
    decode_cue, decode_detailed_playback_status, decode_named_cue, decode_output_levels,
    decode_playback_status, decode_system_info,
};
