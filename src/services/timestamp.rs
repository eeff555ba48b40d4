//! Filename timestamp extraction
//!
//! Archive images are named `<epoch_ms>_<label>.<ext>`; the leading digit
//! run of the base filename is the capture timestamp. Only relative
//! magnitude matters to the grouper, so no calendar validation is done.

use std::path::Path;

/// Extract the timestamp from a path's base filename.
///
/// Takes the leading maximal run of ASCII decimal digits and parses it as
/// epoch milliseconds. Returns `None` when the name does not start with a
/// digit, is not valid UTF-8, or the digit run overflows `u64`.
#[inline]
pub fn extract_timestamp(path: &Path) -> Option<u64> {
    let name = path.file_name()?.to_str()?;
    let digits = name.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    name[..digits].parse().ok()
}
