use alloc::string::ToString;

use crate::error::{Error, Result};

/// FITS block size in bytes (each logical record is one block).
pub const BLOCK_SIZE: usize = 2880;

/// Returns the number of FITS blocks required to hold `num_bytes` bytes.
///
/// A FITS file is organized in units of 2880 bytes. This computes the ceiling
/// division: 0 bytes requires 0 blocks, 1 byte requires 1 block, 2880 bytes
/// requires 1 block, 2881 bytes requires 2 blocks, etc.
///
/// Defined for every `usize`, including `usize::MAX`.
pub const fn blocks_needed(num_bytes: usize) -> usize {
    num_bytes.div_ceil(BLOCK_SIZE)
}

/// Returns the total byte length (in whole blocks) required to hold `num_bytes`.
///
/// `None` when the padded length does not fit in a `usize`, which can only
/// happen within one block of `usize::MAX`.
pub const fn padded_byte_len(num_bytes: usize) -> Option<usize> {
    blocks_needed(num_bytes).checked_mul(BLOCK_SIZE)
}

/// Parse a textual byte count, as given on a command line or in a config.
///
/// Surrounding whitespace is ignored. Anything that is not a non-negative
/// integer fitting in a `usize` is rejected.
pub fn parse_byte_count(text: &str) -> Result<usize> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidByteCount(text.to_string()));
    }
    trimmed
        .parse::<usize>()
        .map_err(|_| Error::InvalidByteCount(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- blocks_needed ----

    #[test]
    fn blocks_needed_zero() {
        assert_eq!(blocks_needed(0), 0);
    }

    #[test]
    fn blocks_needed_one_byte() {
        assert_eq!(blocks_needed(1), 1);
    }

    #[test]
    fn blocks_needed_exactly_one_block() {
        assert_eq!(blocks_needed(BLOCK_SIZE), 1);
    }

    #[test]
    fn blocks_needed_one_over() {
        assert_eq!(blocks_needed(BLOCK_SIZE + 1), 2);
    }

    #[test]
    fn blocks_needed_partial() {
        assert_eq!(blocks_needed(100), 1);
        assert_eq!(blocks_needed(2879), 1);
        assert_eq!(blocks_needed(5760), 2);
        assert_eq!(blocks_needed(5761), 3);
    }

    #[test]
    fn blocks_needed_does_not_overflow() {
        let n = blocks_needed(usize::MAX);
        assert_eq!(n, usize::MAX / BLOCK_SIZE + 1);
    }

    #[test]
    fn blocks_needed_large_file() {
        // 4 GiB of pixel data, as seen on 64-bit targets.
        let bytes: u64 = 4 * 1024 * 1024 * 1024;
        if let Ok(bytes) = usize::try_from(bytes) {
            assert_eq!(blocks_needed(bytes), 1_491_309);
        }
    }

    // ---- padded_byte_len ----

    #[test]
    fn padded_byte_len_zero() {
        assert_eq!(padded_byte_len(0), Some(0));
    }

    #[test]
    fn padded_byte_len_aligned() {
        assert_eq!(padded_byte_len(BLOCK_SIZE), Some(BLOCK_SIZE));
        assert_eq!(padded_byte_len(2 * BLOCK_SIZE), Some(2 * BLOCK_SIZE));
    }

    #[test]
    fn padded_byte_len_unaligned() {
        assert_eq!(padded_byte_len(1), Some(BLOCK_SIZE));
        assert_eq!(padded_byte_len(BLOCK_SIZE + 1), Some(2 * BLOCK_SIZE));
    }

    #[test]
    fn padded_byte_len_overflow() {
        assert_eq!(padded_byte_len(usize::MAX), None);
    }

    // ---- parse_byte_count ----

    #[test]
    fn parse_byte_count_plain() {
        assert_eq!(parse_byte_count("2881").unwrap(), 2881);
        assert_eq!(parse_byte_count("0").unwrap(), 0);
    }

    #[test]
    fn parse_byte_count_surrounding_whitespace() {
        assert_eq!(parse_byte_count("  5760\n").unwrap(), 5760);
    }

    #[test]
    fn parse_byte_count_rejects_sign_and_garbage() {
        for text in ["", "   ", "-1", "+1", "12a", "1.5", "0x10"] {
            match parse_byte_count(text) {
                Err(Error::InvalidByteCount(s)) => assert_eq!(s, text),
                other => panic!("Expected InvalidByteCount for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn parse_byte_count_rejects_overflow() {
        let text = "999999999999999999999999999999";
        assert!(matches!(
            parse_byte_count(text),
            Err(Error::InvalidByteCount(_))
        ));
    }

    // ---- constants ----

    #[test]
    fn block_size_is_fits_standard() {
        assert_eq!(BLOCK_SIZE, 2880);
    }
}
