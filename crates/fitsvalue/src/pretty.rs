use alloc::string::String;

/// Normalize a FITS string value into a freshly allocated `String`.
///
/// See [`pretty_string_into`] for the rules. `None` in, `None` out.
pub fn pretty_string(token: Option<&str>) -> Option<String> {
    let token = token?;
    let mut pretty = String::with_capacity(token.len());
    pretty_string_into(Some(token), &mut pretty);
    Some(pretty)
}

/// Normalize a FITS string value into a caller-owned buffer.
///
/// `pretty` is cleared first, so after an absent token it is left empty and
/// `None` is returned. A token that does not open with `'` is copied
/// unchanged. Otherwise:
///
/// - the opening quote and any blanks after it are skipped; if that leaves
///   at most one character, the result is empty;
/// - the rest is copied, except that each `'` is dropped and the character
///   after it is copied as-is, so `''` yields `'` and the closing quote
///   yields nothing;
/// - trailing blanks are trimmed.
///
/// There is no search for the closing quote: anything after it is copied
/// as well. The output is never longer than the token.
pub fn pretty_string_into<'a>(token: Option<&str>, pretty: &'a mut String) -> Option<&'a str> {
    pretty.clear();
    let token = token?;

    if !token.starts_with('\'') {
        pretty.push_str(token);
        return Some(pretty.as_str());
    }

    let bytes = token.as_bytes();
    let len = bytes.len();
    pretty.reserve(len);

    let mut i = 1; // skip opening quote
    while i < len && bytes[i] == b' ' {
        i += 1;
    }
    if i + 1 >= len {
        return Some(pretty.as_str());
    }

    // `i` sits on an ASCII byte boundary, so slicing is safe.
    let mut chars = token[i..].chars();
    while let Some(c) = chars.next() {
        if c == '\'' {
            match chars.next() {
                Some(escaped) => pretty.push(escaped),
                None => break,
            }
        } else {
            pretty.push(c);
        }
    }

    let trimmed = pretty.trim_end_matches(' ').len();
    pretty.truncate(trimmed);
    Some(pretty.as_str())
}
