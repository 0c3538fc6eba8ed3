//! Protocol codec modules.
//!
//! Each direction follows a layered structure:
//! - `response::layout`: byte offsets and ranges (source of truth)
//! - `response::reader`: safe byte access and protocol conventions
//! - `response::parser`: domain-level decoding (no direct byte indexing)
//! - `command`: validated encoding of mutating operations
//!
//! Decoders and encoders are pure and contain no I/O; the transport
//! collaborator handles HTTP and URL assembly.

pub mod command;
pub mod response;
