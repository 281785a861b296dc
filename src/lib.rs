// SPDX-License-Identifier: MIT

//! Structural probing of Garmin TYP map style files.
//!
//! The TYP binary layout is undocumented; nothing here decodes it fully.
//! Each module derives one independent view over the raw bytes to help a
//! human reverse engineer the format: fixed header fields, first
//! occurrences of known type codes, and printable runs that may be labels.

pub mod codes;
pub mod dump;
pub mod header;
pub mod strings;
