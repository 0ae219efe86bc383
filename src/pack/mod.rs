//! Binary output on top of the marker-string codec.
//!
//! The codec itself produces strings of path markers; this module turns those
//! strings into packed bits for callers that want bytes.

pub mod packed_bits;

pub use packed_bits::PackedBits;
