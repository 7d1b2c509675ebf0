use super::cursor::Cursor;
use super::error::ParseError;
use route_query_params::{AsBaseParams, BaseParameters, Bearing, Coordinate};

/// Grammar for the parameters shared by every service.
///
/// Exposes two composable rules: [`query`](Self::query), the path/coordinate
/// prefix every request starts with, and [`option`](Self::option), the
/// generic `key=value` option parser. Service grammars build their own root
/// from these, trying their service-specific options first and falling back
/// to [`option`](Self::option).
///
/// The grammar holds no mutable state; a single value can drive any number
/// of concurrent parses.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseGrammar;

impl BaseGrammar {
    /// Parse the coordinate prefix: one or more `lon,lat` pairs separated
    /// by `;`, appended to `coordinates`.
    pub fn query<P: AsBaseParams>(
        &self,
        cur: &mut Cursor<'_>,
        out: &mut P,
    ) -> Result<(), ParseError> {
        let params = out.base_params_mut();
        loop {
            let coord = Self::coordinate(cur)?;
            params.coordinates.push(coord);
            if !cur.eat_char(';') {
                break;
            }
        }
        Ok(())
    }

    /// Try the generic options shared by every service.
    ///
    /// Ordered choice over `bearings=`, `radiuses=`, `hints=`,
    /// `generate_hints=`, and `exclude=`. Returns `Ok(false)` with the
    /// cursor unmoved when no key matches; once a key has matched, a
    /// malformed value is a hard failure at the offending offset.
    pub fn option<P: AsBaseParams>(
        &self,
        cur: &mut Cursor<'_>,
        out: &mut P,
    ) -> Result<bool, ParseError> {
        let params = out.base_params_mut();
        if cur.eat_lit("bearings=") {
            Self::bearings(cur, params)?;
            return Ok(true);
        }
        if cur.eat_lit("radiuses=") {
            Self::radiuses(cur, params)?;
            return Ok(true);
        }
        if cur.eat_lit("hints=") {
            Self::hints(cur, params)?;
            return Ok(true);
        }
        if cur.eat_lit("generate_hints=") {
            params.generate_hints = Self::boolean(cur)?;
            return Ok(true);
        }
        if cur.eat_lit("exclude=") {
            Self::exclude(cur, params)?;
            return Ok(true);
        }
        Ok(false)
    }

    // ── Value rules ─────────────────────────────────────────────────────

    fn coordinate(cur: &mut Cursor<'_>) -> Result<Coordinate, ParseError> {
        let Some(lon) = cur.double() else {
            return Err(cur.error());
        };
        if !cur.eat_char(',') {
            return Err(cur.error());
        }
        let Some(lat) = cur.double() else {
            return Err(cur.error());
        };
        Ok(Coordinate::new(lon, lat))
    }

    /// `;`-separated list of optional `value,range` pairs. An omitted entry
    /// (nothing before the next `;` or end of value) stays `None`.
    fn bearings(cur: &mut Cursor<'_>, params: &mut BaseParameters) -> Result<(), ParseError> {
        let mut list = Vec::new();
        loop {
            list.push(Self::bearing(cur)?);
            if !cur.eat_char(';') {
                break;
            }
        }
        params.bearings = list;
        Ok(())
    }

    fn bearing(cur: &mut Cursor<'_>) -> Result<Option<Bearing>, ParseError> {
        let Some(value) = Self::degrees(cur) else {
            return Ok(None);
        };
        if !cur.eat_char(',') {
            return Err(cur.error());
        }
        let Some(range) = Self::degrees(cur) else {
            return Err(cur.error());
        };
        Ok(Some(Bearing { value, range }))
    }

    /// An integer that fits a degree field; out-of-range values are treated
    /// as unmatched tokens, not a distinct error.
    fn degrees(cur: &mut Cursor<'_>) -> Option<u16> {
        let saved = cur.save();
        if let Some(value) = cur.uint() {
            if let Ok(value) = u16::try_from(value) {
                return Some(value);
            }
        }
        cur.restore(saved);
        None
    }

    /// `;`-separated list of `unlimited` | radius | empty entries.
    fn radiuses(cur: &mut Cursor<'_>, params: &mut BaseParameters) -> Result<(), ParseError> {
        let mut list = Vec::new();
        loop {
            if cur.eat_lit("unlimited") {
                list.push(None);
            } else {
                list.push(cur.double());
            }
            if !cur.eat_char(';') {
                break;
            }
        }
        params.radiuses = list;
        Ok(())
    }

    /// `;`-separated list of optional hint tokens from a previous response.
    fn hints(cur: &mut Cursor<'_>, params: &mut BaseParameters) -> Result<(), ParseError> {
        let mut list = Vec::new();
        loop {
            list.push(cur.eat_while(is_hint_byte).map(str::to_string));
            if !cur.eat_char(';') {
                break;
            }
        }
        params.hints = list;
        Ok(())
    }

    fn boolean(cur: &mut Cursor<'_>) -> Result<bool, ParseError> {
        if cur.eat_lit("true") {
            Ok(true)
        } else if cur.eat_lit("false") {
            Ok(false)
        } else {
            Err(cur.error())
        }
    }

    /// `,`-separated list of one or more road class names.
    fn exclude(cur: &mut Cursor<'_>, params: &mut BaseParameters) -> Result<(), ParseError> {
        let mut list = Vec::new();
        loop {
            match cur.eat_while(|b| b.is_ascii_alphanumeric()) {
                Some(class) => list.push(class.to_string()),
                None => return Err(cur.error()),
            }
            if !cur.eat_char(',') {
                break;
            }
        }
        params.exclude = list;
        Ok(())
    }
}

/// Hints are URL-safe base64 with `=` padding.
fn is_hint_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=' | b'-' | b'_')
}
