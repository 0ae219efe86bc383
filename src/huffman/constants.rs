// src/huffman/constants.rs

/// Marker appended when a path descends into a left child.
pub const LEFT_MARKER: char = '.';

/// Marker appended when a path descends into a right child.
pub const RIGHT_MARKER: char = '^';
