//! Hex rendering of byte buffers for debugging output.

use std::fmt::{self, Write};

/// Render `bytes` as upper-case hex pairs, each followed by a space.
///
/// # Examples
///
/// ```
/// use packframe::hexdump::show_hex;
///
/// assert_eq!(show_hex(&[0x00, 0x0A, 0xFF]), "00 0A FF ");
/// ```
#[must_use]
pub fn show_hex(bytes: &[u8]) -> String { HexDump(bytes).to_string() }

/// [`Display`](fmt::Display) adapter producing the same text as [`show_hex`].
#[derive(Clone, Copy, Debug)]
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02X}")?;
            f.write_char(' ')?;
        }
        Ok(())
    }
}
