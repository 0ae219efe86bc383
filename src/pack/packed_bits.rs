// src/pack/packed_bits.rs

//! Packing of marker strings into real bits.
//!
//! The left marker becomes a 0 bit and the right marker a 1 bit, most
//! significant bit first. The byte form is a big-endian `u64` bit count
//! followed by the packed bytes, with the unused low bits of the last byte
//! set to zero.

use std::io::Cursor;

use bitvec::order::Msb0;
use bitvec::prelude::*;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::huffman::table::{Branch, PathAlphabet};
use crate::utils::error::{HuffmanError, MalformedKind, Result};

const HEADER_LEN: usize = 8;

/// A marker string packed one bit per marker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackedBits {
    bits: BitVec<u8, Msb0>,
}

impl PackedBits {
    /// Packs `encoded`, which must consist only of `alphabet`'s markers.
    pub fn pack(encoded: &str, alphabet: PathAlphabet) -> Result<Self> {
        let mut bits = BitVec::with_capacity(encoded.len());
        for (position, marker) in encoded.chars().enumerate() {
            match alphabet.branch(marker) {
                Some(Branch::Left) => bits.push(false),
                Some(Branch::Right) => bits.push(true),
                None => {
                    return Err(HuffmanError::MalformedEncoding {
                        position,
                        kind: MalformedKind::UnrecognizedMarker(marker),
                    });
                }
            }
        }
        bits.set_uninitialized(false);
        Ok(Self { bits })
    }

    /// Spells the bits out again with `alphabet`'s markers.
    pub fn unpack(&self, alphabet: PathAlphabet) -> String {
        self.bits
            .iter()
            .by_vals()
            .map(|bit| {
                alphabet.marker(if bit { Branch::Right } else { Branch::Left })
            })
            .collect()
    }

    /// Number of meaningful bits.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The packed bytes without the length header.
    pub fn as_raw_bytes(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }

    /// Serializes to the length-prefixed byte form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let raw = self.as_raw_bytes();
        let mut bytes = Vec::with_capacity(HEADER_LEN + raw.len());
        bytes.write_u64::<BigEndian>(self.bit_len() as u64)?;
        bytes.extend_from_slice(raw);
        Ok(bytes)
    }

    /// Parses the length-prefixed byte form produced by [`PackedBits::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(bytes);
        let bit_len = cursor.read_u64::<BigEndian>()?;
        let bit_len = usize::try_from(bit_len).map_err(|_| {
            HuffmanError::InvalidData(format!("bit count {} does not fit in memory", bit_len))
        })?;

        let payload = &bytes[HEADER_LEN..];
        let expected = bit_len.div_ceil(8);
        if payload.len() != expected {
            return Err(HuffmanError::InvalidData(format!(
                "{} bits need {} bytes, found {}",
                bit_len,
                expected,
                payload.len()
            )));
        }

        let mut bits = BitVec::<u8, Msb0>::from_vec(payload.to_vec());
        if bits[bit_len..].any() {
            return Err(HuffmanError::InvalidData(format!(
                "padding after bit {} is not zero",
                bit_len
            )));
        }
        bits.truncate(bit_len);
        Ok(Self { bits })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_layout() {
        let packed = PackedBits::pack(".^.^^..^^", PathAlphabet::default()).expect("markers only");
        assert_eq!(packed.bit_len(), 9);
        // 0101 1001 | 1000 0000
        assert_eq!(packed.as_raw_bytes(), &[0b0101_1001, 0b1000_0000]);
    }

    #[test]
    fn test_byte_form() {
        let packed = PackedBits::pack("^^^", PathAlphabet::default()).expect("markers only");
        let bytes = packed.to_bytes().expect("in-memory write");
        assert_eq!(bytes, vec![0, 0, 0, 0, 0, 0, 0, 3, 0b1110_0000]);

        let restored = PackedBits::from_bytes(&bytes).expect("well formed");
        assert_eq!(restored, packed);
        assert_eq!(restored.unpack(PathAlphabet::default()), "^^^");
    }

    #[test]
    fn test_empty() {
        let packed = PackedBits::pack("", PathAlphabet::default()).expect("nothing to pack");
        assert!(packed.is_empty());
        let bytes = packed.to_bytes().expect("in-memory write");
        assert_eq!(bytes.len(), HEADER_LEN);
        assert!(PackedBits::from_bytes(&bytes).expect("well formed").is_empty());
    }

    #[test]
    fn test_rejects_foreign_characters() {
        let result = PackedBits::pack(".^x", PathAlphabet::default());
        assert!(matches!(
            result,
            Err(HuffmanError::MalformedEncoding {
                position: 2,
                kind: MalformedKind::UnrecognizedMarker('x'),
            })
        ));
    }

    #[test]
    fn test_short_header() {
        let result = PackedBits::from_bytes(&[0, 0, 1]);
        assert!(matches!(result, Err(HuffmanError::Io(_))));
    }

    #[test]
    fn test_length_mismatch() {
        let result = PackedBits::from_bytes(&[0, 0, 0, 0, 0, 0, 0, 20, 0xFF]);
        assert!(matches!(result, Err(HuffmanError::InvalidData(_))));
    }

    #[test]
    fn test_nonzero_padding_rejected() {
        let result = PackedBits::from_bytes(&[0, 0, 0, 0, 0, 0, 0, 1, 0xFF]);
        assert!(matches!(result, Err(HuffmanError::InvalidData(_))));

        let restored = PackedBits::from_bytes(&[0, 0, 0, 0, 0, 0, 0, 1, 0b1000_0000])
            .expect("zero padding");
        assert_eq!(restored.as_raw_bytes(), &[0b1000_0000]);
        assert_eq!(
            restored.to_bytes().expect("in-memory write"),
            vec![0, 0, 0, 0, 0, 0, 0, 1, 0b1000_0000]
        );
    }

    #[test]
    fn test_custom_alphabet() {
        let alphabet = PathAlphabet::new('L', 'R').expect("distinct");
        let packed = PackedBits::pack("LRRL", alphabet).expect("markers only");
        assert_eq!(packed.as_raw_bytes(), &[0b0110_0000]);
        assert_eq!(packed.unpack(PathAlphabet::default()), ".^^.");
    }
}
