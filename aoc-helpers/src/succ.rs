//! Ruby-style string successor

use thiserror::Error;

/// Errors from [`succ`]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SuccError {
    /// Only ASCII strings have a well-defined successor here
    #[error("cannot compute the successor of a string with non-ASCII characters")]
    NonAscii,
}

/// The successor of `s`, in the style of Ruby's `String#succ`.
///
/// The rightmost alphanumeric character is incremented; digits, uppercase
/// and lowercase letters each wrap within their own range and carry leftward
/// (through non-alphanumerics, which increment as raw bytes). When the carry
/// walks off the front of the string, a `1`, `A` or `a` is prepended to match
/// the range that overflowed. Strings with no alphanumeric characters are
/// returned unchanged.
///
/// # Example
///
/// ```
/// use aoc_helpers::succ;
///
/// assert_eq!(succ("az").unwrap(), "ba");
/// assert_eq!(succ("zz").unwrap(), "aaa");
/// assert_eq!(succ("a9").unwrap(), "b0");
/// ```
///
/// # Errors
///
/// `SuccError::NonAscii` for input containing non-ASCII characters.
pub fn succ(s: &str) -> Result<String, SuccError> {
    if s.is_empty() {
        return Ok(String::new());
    }
    if !s.is_ascii() {
        return Err(SuccError::NonAscii);
    }

    let mut bytes = s.as_bytes().to_vec();
    let Some(start) = bytes.iter().rposition(|b| b.is_ascii_alphanumeric()) else {
        return Ok(s.to_string());
    };

    let mut i = start as isize;
    loop {
        if i < 0 {
            // Carry walked off the front; bytes[0] has already wrapped, so it
            // tells us which range overflowed
            let lead = match bytes[0] {
                b'0'..=b'9' => b'1',
                b'A'..=b'Z' => b'A',
                b'a'..=b'z' => b'a',
                _ => 0x01,
            };
            bytes.insert(0, lead);
            break;
        }
        let (next, carried) = succ_byte(bytes[i as usize]);
        bytes[i as usize] = next;
        if !carried {
            break;
        }
        i -= 1;
    }

    String::from_utf8(bytes).map_err(|_| SuccError::NonAscii)
}

fn succ_byte(b: u8) -> (u8, bool) {
    match b {
        b'9' => (b'0', true),
        b'0'..=b'8' => (b + 1, false),
        b'Z' => (b'A', true),
        b'A'..=b'Y' => (b + 1, false),
        b'z' => (b'a', true),
        b'a'..=b'y' => (b + 1, false),
        0xff => (0, true),
        _ => (b + 1, false),
    }
}
