//! Match patterns derived from the canonicalization tables
//!
//! Alternatives inside every generated pattern are ordered with
//! [`precedence`], so the leftmost-first regex engine always tries the most
//! specific token first ("northeast" before "north", "streets" before
//! "street").

use crate::error::{AddressError, Result};
use crate::tables::CanonicalizationTables;
use regex::{Captures, Regex, RegexBuilder};
use std::cmp::Ordering;

/// Unit designator word (or a bare `#`) with trailing separators
const UNIT_DESIGNATOR: &str = r"(?:(?:su?i?te|p\W*[om]\W*b(?:ox)?|dept|ro*m|fl(?:oor)?|apt|unit|box|lot|tr(?:ai)?l(?:e)?r)\W*|#\W*)";

/// Leading house number; may start with letters but needs a digit
const HOUSE_NUMBER: &str = r"^(?<number>\w*\d+-?\w*)(?::?\d+/\d+\W*)?";

/// Ordinal street names ("101ST") are never house numbers
const ORDINAL_STREET: &str = r"^\d+(?:ST|ND|RD|TH)";

const PO_BOX: &str = r"^(?<street>(?:(?:P\s?[O0]\s?)?|R\s?[RT]\s\d+\s)BOX|POB|P0B|H\s?C(?:\s?R|\s?1)?(?:\s?BOX)?)(?:\s(?<number>\w+))?";

const HIGHWAY: &str = r"\b(?:US|STATE|HIGHWAY|HWY|ROUTE|COUNTY|FM)\b";

/// Courtesy prefix and periods
const SANITIZE: &str = r"^MR-?|\.";

const LEADING_DIGITS: &str = r"^(?<number>[\d-]+)";

const RURAL_ROUTE: &str = r"^R\s?[RT]\s\d+\s(?:BOX|B)";
const RURAL_ROUTE_PREFIX: &str = r"^R\s?[RT]";
const HIGHWAY_CONTRACT: &str = r"^H\s?C(?:\s?R|\s?1)?(?:\s?BOX)?";
const BOX_WORD: &str = r"\sBOX";
const POST_OFFICE: &str = r"^(?:(?:P\s?[O0]\s?)?BOX|POB|P0B)";

/// Ordering used for every alternation: longer first, then alphabetical,
/// both case-insensitive.
#[must_use]
pub fn precedence(a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    b.chars()
        .count()
        .cmp(&a.chars().count())
        .then_with(|| a.cmp(&b))
}

/// Compiled, read-only patterns shared by every parse.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    directions: Vec<String>,
    street_types: Vec<String>,
    street: Regex,

    pub(crate) sanitize: Regex,
    pub(crate) po_box: Regex,
    pub(crate) leading_number: Regex,
    pub(crate) ordinal_street: Regex,
    pub(crate) unit: Regex,
    pub(crate) leading_unit: Regex,
    pub(crate) leading_digits: Regex,
    pub(crate) highway: Regex,

    pub(crate) direction_prefix: Regex,
    pub(crate) direction_suffix: Regex,
    pub(crate) type_prefix: Regex,
    pub(crate) type_anywhere: Regex,
    pub(crate) type_suffix: Regex,
    pub(crate) type_infix: Regex,

    pub(crate) rural_route: Regex,
    pub(crate) rural_route_prefix: Regex,
    pub(crate) highway_contract: Regex,
    pub(crate) box_word: Regex,
    pub(crate) post_office: Regex,
}

impl PatternLibrary {
    /// Derive and compile every pattern from the given tables.
    pub fn new(tables: &CanonicalizationTables) -> Result<Self> {
        let directions = direction_alternatives(tables);
        let street_types = ordered(tables.street_type_tokens().map(str::to_string));

        let dir = alternation(&directions);
        let typ = alternation(&street_types);

        let street = compile(
            "street",
            &format!(
                r"^(?:(?<name_dir>{dir})\W+(?<name_type>{typ})\W*$|(?:(?<prefix>{dir})\W+)?(?<street>[^,]+)[^\w,]+(?<type>{typ})(?:[^\w,]+(?<suffix>{dir}))?\W*$)"
            ),
        )?;

        Ok(Self {
            street,
            sanitize: compile("sanitize", SANITIZE)?,
            po_box: compile("PO box", PO_BOX)?,
            leading_number: compile("house number", HOUSE_NUMBER)?,
            ordinal_street: compile("ordinal street", ORDINAL_STREET)?,
            unit: compile(
                "unit",
                &format!(r"(?<type>\W+{UNIT_DESIGNATOR})(?<number>[\w-]+)?"),
            )?,
            leading_unit: compile(
                "leading unit",
                &format!(r"^(?<type>{UNIT_DESIGNATOR})(?<number>[\w-]+)?\s"),
            )?,
            leading_digits: compile("leading digits", LEADING_DIGITS)?,
            highway: compile("highway", HIGHWAY)?,

            direction_prefix: compile("direction prefix", &format!(r"^(?<dir>{dir})\W+"))?,
            direction_suffix: compile("direction suffix", &format!(r"\W+(?<dir>{dir})\W*$"))?,
            type_prefix: compile("street type prefix", &format!(r"^(?<type>{typ})\b"))?,
            type_anywhere: compile("street type", &format!(r"\b(?:{typ})\b"))?,
            type_suffix: compile("street type suffix", &format!(r"\W+(?<type>{typ})\W*$"))?,
            type_infix: compile("street type infix", &format!(r"\W+(?<type>{typ})\W*\W+"))?,

            rural_route: compile("rural route", RURAL_ROUTE)?,
            rural_route_prefix: compile("rural route prefix", RURAL_ROUTE_PREFIX)?,
            highway_contract: compile("highway contract", HIGHWAY_CONTRACT)?,
            box_word: compile("box word", BOX_WORD)?,
            post_office: compile("post office", POST_OFFICE)?,

            directions,
            street_types,
        })
    }

    /// Direction alternatives in match order, dotted forms included
    #[must_use]
    pub fn direction_alternatives(&self) -> &[String] {
        &self.directions
    }

    /// Street type alternatives in match order
    #[must_use]
    pub fn street_type_alternatives(&self) -> &[String] {
        &self.street_types
    }

    /// Whole-segment grammar `[direction] name type [direction]`, plus the
    /// `direction type` form where the direction is the street name.
    ///
    /// Groups: `name_dir`/`name_type` for the special form, otherwise
    /// `prefix`, `street`, `type` and `suffix`.
    #[must_use]
    pub const fn street(&self) -> &Regex {
        &self.street
    }

    /// Match a house number at the start of `text`.
    ///
    /// Returns the captured number and the byte length of the whole match.
    #[must_use]
    pub fn house_number<'t>(&self, text: &'t str) -> Option<(&'t str, usize)> {
        if self.ordinal_street.is_match(text) {
            return None;
        }

        let caps = self.leading_number.captures(text)?;
        Some((group(&caps, "number"), caps.get(0)?.end()))
    }

    /// Whether the text names a highway, route or county road
    #[must_use]
    pub fn is_highway(&self, text: &str) -> bool {
        self.highway.is_match(text)
    }
}

/// Trimmed text of a named group, empty when it did not participate
#[must_use]
pub fn group<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map_or("", |m| m.as_str().trim())
}

fn direction_alternatives(tables: &CanonicalizationTables) -> Vec<String> {
    let mut res = Vec::new();

    for token in tables.direction_tokens() {
        res.push(token.to_string());

        // dotted abbreviations such as "N." and "N.E"
        if token.chars().count() < 3 {
            let mut chars = token.chars();
            if let Some(first) = chars.next() {
                res.push(format!("{first}.{}", chars.as_str()));
            }
        }
    }

    ordered(res)
}

fn ordered(tokens: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut res: Vec<String> = tokens.into_iter().collect();
    res.sort_by(|a, b| precedence(a, b));
    res.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
    res
}

fn alternation(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|")
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| AddressError::Pattern { name, source })
}
