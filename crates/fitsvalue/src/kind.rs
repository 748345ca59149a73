use crate::error::{Error, Result};

/// The kind of a FITS header value, as decided by [`classify`].
///
/// The discriminants are a stable external encoding shared with header
/// parsing code; see [`ValueKind::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ValueKind {
    /// No token was supplied.
    Unknown = 0,
    /// FITS logical value (`T` or `F`).
    Boolean = 1,
    /// FITS integer value.
    Integer = 2,
    /// FITS floating-point value, with `E` or `D` exponents.
    Float = 3,
    /// Two real numbers separated by blanks.
    Complex = 4,
    /// Anything else.
    String = 5,
}

impl ValueKind {
    /// Classify a token that is known to be present.
    pub fn of(token: &str) -> ValueKind {
        if is_boolean(token) {
            ValueKind::Boolean
        } else if is_int(token) {
            ValueKind::Integer
        } else if is_float(token) {
            ValueKind::Float
        } else if is_complex(token) {
            ValueKind::Complex
        } else {
            ValueKind::String
        }
    }

    /// Numeric code of this kind (0 through 5).
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Lowercase name used in listings.
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Unknown => "unknown",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Complex => "complex",
            ValueKind::String => "string",
        }
    }
}

impl core::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for ValueKind {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(ValueKind::Unknown),
            1 => Ok(ValueKind::Boolean),
            2 => Ok(ValueKind::Integer),
            3 => Ok(ValueKind::Float),
            4 => Ok(ValueKind::Complex),
            5 => Ok(ValueKind::String),
            other => Err(Error::InvalidKindCode(other)),
        }
    }
}

/// Identify the type of a FITS value given as a string.
///
/// Checks run in order and the first match wins: boolean, integer, float,
/// complex. Any present token that matches none of them is reported as
/// [`ValueKind::String`], whether or not it starts with a quote; use
/// [`is_string`] when quote presence matters. An absent token is
/// [`ValueKind::Unknown`].
pub fn classify(token: Option<&str>) -> ValueKind {
    match token {
        None => ValueKind::Unknown,
        Some(s) => ValueKind::of(s),
    }
}

/// `T` or `F`, and nothing else.
pub fn is_boolean(token: &str) -> bool {
    matches!(token.as_bytes(), [b'T'] | [b'F'])
}

/// Whole-token match of `[+-]?[0-9]+`.
pub fn is_int(token: &str) -> bool {
    let bytes = token.as_bytes();
    let start = skip_sign(bytes, 0);
    let end = skip_digits(bytes, start);
    end > start && end == bytes.len()
}

/// Whole-token match of
/// `[+-]?([0-9]+[.]?[0-9]*|[.][0-9]+)([eEdD][+-]?[0-9]+)?`.
///
/// Integers satisfy this grammar too; [`classify`] tests [`is_int`] first.
pub fn is_float(token: &str) -> bool {
    scan_float(token.as_bytes()) == Some(token.len())
}

/// Two floats separated by one or more blanks, covering the whole token.
pub fn is_complex(token: &str) -> bool {
    let bytes = token.as_bytes();
    let Some(sep) = bytes.iter().position(|&b| b == b' ') else {
        return false;
    };
    let mut im_start = sep;
    while im_start < bytes.len() && bytes[im_start] == b' ' {
        im_start += 1;
    }
    is_float(&token[..sep]) && is_float(&token[im_start..])
}

/// True when the token opens with a single quote.
pub fn is_string(token: &str) -> bool {
    token.starts_with('\'')
}

fn skip_sign(bytes: &[u8], i: usize) -> usize {
    match bytes.get(i) {
        Some(b'+') | Some(b'-') => i + 1,
        _ => i,
    }
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Length of the float literal at the start of `bytes`, if there is one.
///
/// The mantissa parts are consumed greedily; since what may follow them is
/// an exponent letter or the end of input, greedy matching never rejects a
/// literal the grammar accepts.
fn scan_float(bytes: &[u8]) -> Option<usize> {
    let mut i = skip_sign(bytes, 0);

    match bytes.get(i) {
        Some(b) if b.is_ascii_digit() => {
            i = skip_digits(bytes, i);
            if bytes.get(i) == Some(&b'.') {
                i = skip_digits(bytes, i + 1);
            }
        }
        Some(b'.') => {
            let frac_start = i + 1;
            i = skip_digits(bytes, frac_start);
            if i == frac_start {
                return None;
            }
        }
        _ => return None,
    }

    if let Some(b'e' | b'E' | b'd' | b'D') = bytes.get(i) {
        let exp_start = skip_sign(bytes, i + 1);
        i = skip_digits(bytes, exp_start);
        if i == exp_start {
            return None;
        }
    }

    Some(i)
}
