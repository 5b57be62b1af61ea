//! Character classes shared by the match and rewrite grammars.
//!
//! Literals follow the RFC 3986 `pchar` production: unreserved characters,
//! percent-encoding, the sub-delimiters except `*`, plus `:`, `@` and `=`.

#[inline]
pub fn is_literal_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'-' | b'.'
                | b'_'
                | b'~'
                | b'%'
                | b'!'
                | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'+'
                | b','
                | b';'
                | b':'
                | b'@'
                | b'='
        )
}

/// Non-empty run made only of literal characters.
#[inline]
pub fn is_literal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_literal_byte)
}

/// Rewrite literals may also carry `/`; empty runs are accepted.
#[inline]
pub fn is_rewrite_literal(s: &str) -> bool {
    s.bytes().all(|b| b == b'/' || is_literal_byte(b))
}

/// Graphically printable ASCII (`[[:graph:]]`), the empty string included.
#[inline]
pub fn is_printable(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_graphic())
}

/// Length of the leading literal run of `s`, in bytes.
#[inline]
pub fn literal_prefix_len(s: &str) -> usize {
    s.bytes().take_while(|&b| is_literal_byte(b)).count()
}

#[inline]
pub fn is_variable_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

#[inline]
pub fn is_variable_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
