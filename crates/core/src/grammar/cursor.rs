use super::error::ParseError;

/// A parse position over a query string.
///
/// All grammar rules advance a shared cursor and follow one discipline:
/// a rule that reports "no match" must leave the cursor where it found it,
/// while a rule that has committed (matched its `key=` prefix) may consume
/// input and fail hard at the offending offset. Ordered choice falls out of
/// that discipline — alternatives are tried in declaration order against an
/// unchanged position, and [`save`](Self::save)/[`restore`](Self::restore)
/// cover the cases where a rule must probe past its decision point.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset into the input.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// `true` once the entire input has been consumed.
    pub fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// A parse failure positioned at the current offset.
    pub fn error(&self) -> ParseError {
        ParseError { offset: self.pos }
    }

    /// Snapshot the current position for a later [`restore`](Self::restore).
    pub fn save(&self) -> usize {
        self.pos
    }

    /// Roll back to a position obtained from [`save`](Self::save).
    pub fn restore(&mut self, saved: usize) {
        debug_assert!(saved <= self.input.len());
        self.pos = saved;
    }

    // ── Literal matching ────────────────────────────────────────────────

    /// Consume `lit` if the remaining input starts with it.
    ///
    /// Matching is exact and case-sensitive; on a mismatch the cursor does
    /// not move.
    pub fn eat_lit(&mut self, lit: &str) -> bool {
        if self.rest().starts_with(lit) {
            self.pos += lit.len();
            true
        } else {
            false
        }
    }

    /// Consume a single character if it is next in the input.
    pub fn eat_char(&mut self, c: char) -> bool {
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume the longest non-empty run of ASCII bytes satisfying `pred`.
    ///
    /// Returns `None` without moving when the run would be empty. The
    /// predicate only ever sees ASCII ranges in this grammar, so UTF-8
    /// continuation bytes (0x80–0xBF) can never match.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> Option<&'a str> {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        let mut end = start;
        while end < bytes.len() && pred(bytes[end]) {
            end += 1;
        }
        if end == start {
            return None;
        }
        self.pos = end;
        Some(&self.input[start..end])
    }

    // ── Numeric primitives ──────────────────────────────────────────────

    /// Consume a non-negative integer in the native index width.
    ///
    /// Returns `None` without moving when the next byte is not a digit or
    /// the digit run overflows `usize` — an overflowing token is treated
    /// identically to any other unmatched token.
    pub fn uint(&mut self) -> Option<usize> {
        let bytes = self.input.as_bytes();
        let mut end = self.pos;
        let mut value: usize = 0;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            value = value
                .checked_mul(10)?
                .checked_add(usize::from(bytes[end] - b'0'))?;
            end += 1;
        }
        if end == self.pos {
            return None;
        }
        self.pos = end;
        Some(value)
    }

    /// Consume one or more `;`-separated non-negative integers.
    ///
    /// Order and duplicates are preserved exactly as given. The list is
    /// committed once the first integer has matched: a separator that is
    /// not followed by a valid integer fails at the offending offset.
    pub fn uint_list(&mut self) -> Result<Vec<usize>, ParseError> {
        let Some(first) = self.uint() else {
            return Err(self.error());
        };
        let mut list = vec![first];
        while self.eat_char(';') {
            match self.uint() {
                Some(value) => list.push(value),
                None => return Err(self.error()),
            }
        }
        Ok(list)
    }

    /// Consume a decimal floating-point number.
    ///
    /// Accepts an optional sign, an integer part, a fractional part, and an
    /// exponent. A `.` not followed by a digit is left unconsumed, so
    /// `4.0.json` yields `4.0` with `.json` remaining.
    pub fn double(&mut self) -> Option<f64> {
        let bytes = self.input.as_bytes();
        let len = bytes.len();
        let mut end = self.pos;
        if end < len && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let mut has_digits = false;
        while end < len && bytes[end].is_ascii_digit() {
            end += 1;
            has_digits = true;
        }
        if end + 1 < len && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
            end += 1;
            while end < len && bytes[end].is_ascii_digit() {
                end += 1;
                has_digits = true;
            }
        }
        if !has_digits {
            return None;
        }
        if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
            let mut exp = end + 1;
            if exp < len && (bytes[exp] == b'+' || bytes[exp] == b'-') {
                exp += 1;
            }
            if exp < len && bytes[exp].is_ascii_digit() {
                while exp < len && bytes[exp].is_ascii_digit() {
                    exp += 1;
                }
                end = exp;
            }
        }
        let value = self.input[self.pos..end].parse::<f64>().ok()?;
        self.pos = end;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eat_lit_is_exact_and_restores_on_mismatch() {
        let mut cur = Cursor::new("sources=0");
        assert!(!cur.eat_lit("Sources="));
        assert_eq!(cur.pos(), 0);
        assert!(cur.eat_lit("sources="));
        assert_eq!(cur.rest(), "0");
    }

    #[test]
    fn uint_stops_at_first_non_digit() {
        let mut cur = Cursor::new("42;7");
        assert_eq!(cur.uint(), Some(42));
        assert_eq!(cur.rest(), ";7");
    }

    #[test]
    fn uint_overflow_does_not_consume() {
        // 21 digits cannot fit in any usize width in use.
        let mut cur = Cursor::new("999999999999999999999");
        assert_eq!(cur.uint(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn uint_list_preserves_order_and_duplicates() {
        let mut cur = Cursor::new("3;1;1;2");
        assert_eq!(cur.uint_list().unwrap(), vec![3, 1, 1, 2]);
        assert!(cur.at_end());
    }

    #[test]
    fn uint_list_fails_after_dangling_separator() {
        let mut cur = Cursor::new("1;2;x");
        let err = cur.uint_list().unwrap_err();
        assert_eq!(err.offset, 4, "failure should point at the bad token");
    }

    #[test]
    fn double_leaves_trailing_dot_unconsumed() {
        let mut cur = Cursor::new("4.0.json");
        assert_eq!(cur.double(), Some(4.0));
        assert_eq!(cur.rest(), ".json");

        let mut cur = Cursor::new("4.json");
        assert_eq!(cur.double(), Some(4.0));
        assert_eq!(cur.rest(), ".json");
    }

    #[test]
    fn double_handles_sign_fraction_and_exponent() {
        let mut cur = Cursor::new("-13.388");
        assert_eq!(cur.double(), Some(-13.388));

        let mut cur = Cursor::new("1.5e-3,");
        assert_eq!(cur.double(), Some(0.0015));
        assert_eq!(cur.rest(), ",");

        // `e` not followed by digits is not an exponent.
        let mut cur = Cursor::new("2e");
        assert_eq!(cur.double(), Some(2.0));
        assert_eq!(cur.rest(), "e");

        let mut cur = Cursor::new(".5;");
        assert_eq!(cur.double(), Some(0.5));
        assert_eq!(cur.rest(), ";");
    }

    #[test]
    fn double_rejects_bare_sign_and_dot() {
        for input in ["-", ".", "-.", "x"] {
            let mut cur = Cursor::new(input);
            assert_eq!(cur.double(), None, "{input:?} is not a number");
            assert_eq!(cur.pos(), 0);
        }
    }
}
