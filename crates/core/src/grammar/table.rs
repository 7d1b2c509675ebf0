use std::fmt;

use super::base::BaseGrammar;
use super::cursor::Cursor;
use super::error::ParseError;
use route_query_params::{AnnotationsType, AsTableParams, TableParameters};

/// An externally supplied root rule for an embedding grammar.
///
/// The rule receives the grammar so it can compose the exposed parsers
/// ([`TableGrammar::prefix`], [`TableGrammar::table_option`],
/// [`TableGrammar::option`]) into its own structure.
pub type RootRule<P> =
    Box<dyn Fn(&TableGrammar<P>, &mut Cursor<'_>, &mut P) -> Result<(), ParseError> + Send + Sync>;

/// Static token → flag table for `annotations=` list values.
///
/// Lookup is exact and case-sensitive; no prefix or fuzzy matching.
const ANNOTATION_FLAGS: &[(&str, AnnotationsType)] = &[
    ("duration", AnnotationsType::DURATION),
    ("distance", AnnotationsType::DISTANCE),
];

fn annotation_flag(cur: &mut Cursor<'_>) -> Option<AnnotationsType> {
    ANNOTATION_FLAGS
        .iter()
        .find_map(|&(token, flag)| cur.eat_lit(token).then_some(flag))
}

/// Grammar for the table/matrix service query string:
/// `<coordinates>[.json][?<option>(&<option>)*]`.
///
/// Recognizes `sources=`, `destinations=`, and `annotations=` on top of the
/// options inherited from [`BaseGrammar`]. The output type is generic so a
/// composite endpoint's parameter struct (anything implementing
/// [`AsTableParams`]) can be driven through the same rules.
///
/// The grammar is immutable after construction and `Send + Sync`; one value
/// can serve any number of concurrent parses, since all parse-time state
/// lives on the caller's [`Cursor`] and output structure.
pub struct TableGrammar<P: AsTableParams = TableParameters> {
    base: BaseGrammar,
    root: RootRule<P>,
}

impl<P: AsTableParams> TableGrammar<P> {
    /// A standalone grammar owning the default root rule.
    pub fn new() -> Self {
        Self::with_root(Box::new(|grammar, cur, out| grammar.root(cur, out)))
    }

    /// Composition variant: the root rule is supplied by an embedding
    /// grammar, which builds it from the exposed parsers instead of this
    /// grammar owning the whole root.
    pub fn with_root(root: RootRule<P>) -> Self {
        Self {
            base: BaseGrammar,
            root,
        }
    }

    /// Parse a full query string into `params`.
    ///
    /// Succeeds only if the root rule consumes the entire input; trailing
    /// input fails at its offset. On failure, `params` may have been
    /// partially written and should be discarded.
    pub fn parse(&self, input: &str, params: &mut P) -> Result<(), ParseError> {
        let mut cur = Cursor::new(input);
        (self.root)(self, &mut cur, params)?;
        if cur.at_end() { Ok(()) } else { Err(cur.error()) }
    }

    // ── Exposed parsers ─────────────────────────────────────────────────

    /// The path/coordinate prefix, delegated to the base grammar.
    pub fn prefix(&self, cur: &mut Cursor<'_>, out: &mut P) -> Result<(), ParseError> {
        self.base.query(cur, out)
    }

    /// Try the table-specific options: `destinations=` then `sources=`.
    ///
    /// The value is either the literal `all`, which leaves the field
    /// absent, or a `;`-separated index list assigned to the field, so a
    /// repeated key overwrites the earlier occurrence.
    pub fn table_option(&self, cur: &mut Cursor<'_>, out: &mut P) -> Result<bool, ParseError> {
        if cur.eat_lit("destinations=") {
            if !cur.eat_lit("all") {
                out.table_params_mut().destinations = Some(cur.uint_list()?);
            }
            return Ok(true);
        }
        if cur.eat_lit("sources=") {
            if !cur.eat_lit("all") {
                out.table_params_mut().sources = Some(cur.uint_list()?);
            }
            return Ok(true);
        }
        Ok(false)
    }

    /// Try the inherited generic options, then the `annotations=` extension.
    ///
    /// The base grammar is delegated to first so the extension never
    /// competes with a prefix the base already claims.
    pub fn option(&self, cur: &mut Cursor<'_>, out: &mut P) -> Result<bool, ParseError> {
        if self.base.option(cur, out)? {
            return Ok(true);
        }
        self.annotations_option(cur, out)
    }

    // ── Private rules ───────────────────────────────────────────────────

    /// `annotations=` followed by `true`, `false`, or a `,`-separated list
    /// of flag tokens, each unioned into `annotations_type` as it matches.
    ///
    /// `false` unions `NONE`, which never clears previously set bits; the
    /// derived `annotations` field is recomputed on every combination.
    fn annotations_option(&self, cur: &mut Cursor<'_>, out: &mut P) -> Result<bool, ParseError> {
        if !cur.eat_lit("annotations=") {
            return Ok(false);
        }
        let params = out.table_params_mut();
        if cur.eat_lit("true") {
            params.combine_annotations(AnnotationsType::ALL);
        } else if cur.eat_lit("false") {
            params.combine_annotations(AnnotationsType::NONE);
        } else {
            loop {
                match annotation_flag(cur) {
                    Some(flag) => params.combine_annotations(flag),
                    None => return Err(cur.error()),
                }
                if !cur.eat_char(',') {
                    break;
                }
            }
        }
        Ok(true)
    }

    /// Default root: coordinate prefix, optional `.json` suffix, optional
    /// `?` introducing one or more `&`-separated options, each tried as a
    /// table option before falling back to the generic options.
    fn root(&self, cur: &mut Cursor<'_>, out: &mut P) -> Result<(), ParseError> {
        self.prefix(cur, out)?;
        cur.eat_lit(".json");
        if cur.eat_char('?') {
            loop {
                if !self.table_option(cur, out)? && !self.option(cur, out)? {
                    return Err(cur.error());
                }
                if !cur.eat_char('&') {
                    break;
                }
            }
        }
        Ok(())
    }
}

impl<P: AsTableParams> Default for TableGrammar<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: AsTableParams> fmt::Debug for TableGrammar<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableGrammar")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}
