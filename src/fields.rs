//! Classification of `strftime` directives into the semantic groups that
//! drive globbing, and template rewriting with wildcards.
//!
//! Directive syntax follows chrono: a `%` marker, an optional padding,
//! precision or offset modifier (`%-d`, `%0e`, `%.3f`, `%:z`, ...) and one
//! specifier letter. `%%` is the escaped literal marker and is never treated
//! as a field.

/// The character substituted for suppressed fields.
pub const WILDCARD: char = '*';

/// The semantic group a directive letter belongs to.
///
/// The mapping is fixed configuration matching chrono's specifier set, see
/// [`classify`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum FieldClass {
    /// Sub-day divisions and timezones (`%H`, `%Z`, ...), always safe to
    /// replace with a wildcard.
    Time,
    /// Weekday names and numbers (`%a`, `%A`, `%u`, `%w`).
    DayOfWeek,
    /// Day number in the month (`%d`, `%e`).
    DayOfMonth,
    /// Day number in the year (`%j`).
    DayOfYear,
    /// Week number with weeks starting on Sunday (`%U`).
    WeekFromSunday,
    /// Week number with weeks starting on Monday (`%W`).
    WeekFromMonday,
    /// ISO 8601 week number and week-based years (`%V`, `%G`, `%g`).
    IsoWeek,
    /// Month names and numbers, including the quarter (`%b`, `%B`, `%h`,
    /// `%m`, `%q`).
    Month,
    /// Year numbers, including the century (`%y`, `%Y`, `%C`).
    Year,
    /// Directives rendering the whole date as one opaque token (`%c`, `%x`,
    /// `%D`, `%F`, `%v`, `%s`, `%+`). These make globbing impossible.
    WholeDate,
    /// Literal specials that render fixed text (`%t`, `%n`).
    Literal,
}

/// Map a specifier letter to its [`FieldClass`], or `None` for letters chrono
/// does not recognize.
///
/// ```
/// use date_glob::fields::{classify, FieldClass};
///
/// assert_eq!(classify('d'), Some(FieldClass::DayOfMonth));
/// assert_eq!(classify('Z'), Some(FieldClass::Time));
/// assert_eq!(classify('o'), None);
/// ```
pub fn classify(letter: char) -> Option<FieldClass> {
    match letter {
        'f' | 'H' | 'I' | 'k' | 'l' | 'M' | 'p' | 'P' | 'r' | 'R' | 'S' | 'T' | 'X' | 'z'
        | 'Z' => Some(FieldClass::Time),
        'a' | 'A' | 'u' | 'w' => Some(FieldClass::DayOfWeek),
        'd' | 'e' => Some(FieldClass::DayOfMonth),
        'j' => Some(FieldClass::DayOfYear),
        'U' => Some(FieldClass::WeekFromSunday),
        'W' => Some(FieldClass::WeekFromMonday),
        'V' | 'G' | 'g' => Some(FieldClass::IsoWeek),
        'b' | 'B' | 'h' | 'm' | 'q' => Some(FieldClass::Month),
        'y' | 'Y' | 'C' => Some(FieldClass::Year),
        'c' | 'x' | 'D' | 'F' | 'v' | 's' | '+' => Some(FieldClass::WholeDate),
        't' | 'n' => Some(FieldClass::Literal),
        _ => None,
    }
}

/// Classes that can be wildcarded once every day of a year is covered.
pub(crate) const YEAR_GLOB: &[FieldClass] = &[
    FieldClass::Time,
    FieldClass::DayOfWeek,
    FieldClass::DayOfMonth,
    FieldClass::DayOfYear,
    FieldClass::WeekFromSunday,
    FieldClass::WeekFromMonday,
    FieldClass::IsoWeek,
    FieldClass::Month,
];

/// Classes that preclude globbing even with every day of a year covered.
pub(crate) const YEAR_BLOCKING: &[FieldClass] = &[FieldClass::WholeDate];

/// Classes that can be wildcarded once every day of a month is covered. The
/// decade pass uses the same day-of-month substitution with a digit prefix.
pub(crate) const MONTH_GLOB: &[FieldClass] = &[FieldClass::Time, FieldClass::DayOfMonth];

/// Classes that preclude globbing even with every day of a month covered.
pub(crate) const MONTH_BLOCKING: &[FieldClass] = &[
    FieldClass::WholeDate,
    FieldClass::DayOfYear,
    FieldClass::DayOfWeek,
    FieldClass::WeekFromSunday,
    FieldClass::WeekFromMonday,
    FieldClass::IsoWeek,
];

/// Check whether the template contains at least one directive belonging to
/// one of the given classes.
///
/// ```
/// use date_glob::fields::{has_any_field, FieldClass};
///
/// assert!(has_any_field("%Y-%m-%d", &[FieldClass::DayOfMonth]));
/// assert!(!has_any_field("%Y-%m", &[FieldClass::DayOfMonth]));
/// assert!(!has_any_field("100%%d", &[FieldClass::DayOfMonth]));
/// ```
pub fn has_any_field(template: &str, classes: &[FieldClass]) -> bool {
    Tokens::new(template).any(|token| match token {
        Token::Directive { letter, .. } => {
            classify(letter).is_some_and(|class| classes.contains(&class))
        }
        Token::Literal(_) => false,
    })
}

/// Replace every directive of the given classes with a `*`, then collapse
/// runs of adjacent wildcards into a single one.
///
/// ```
/// use date_glob::fields::{wildcard_fields, FieldClass};
///
/// let glob = wildcard_fields("%Y-%m-%d", &[FieldClass::Month, FieldClass::DayOfMonth]);
/// assert_eq!(glob, "%Y-*-*");
///
/// let glob = wildcard_fields("%H%M%S", &[FieldClass::Time]);
/// assert_eq!(glob, "*");
/// ```
pub fn wildcard_fields(template: &str, classes: &[FieldClass]) -> String {
    wildcard_fields_with(template, classes, "*")
}

/// Same as [`wildcard_fields`] with an arbitrary replacement string. The
/// decade pass uses a prefixed wildcard such as `"2*"` to keep the shared
/// tens digit of the day-of-month field.
///
/// ```
/// use date_glob::fields::{wildcard_fields_with, FieldClass};
///
/// let glob = wildcard_fields_with("%Y-%m-%d", &[FieldClass::DayOfMonth], "2*");
/// assert_eq!(glob, "%Y-%m-2*");
/// ```
pub fn wildcard_fields_with(template: &str, classes: &[FieldClass], replacement: &str) -> String {
    let mut out = String::with_capacity(template.len());

    for token in Tokens::new(template) {
        match token {
            Token::Directive { letter, .. }
                if classify(letter).is_some_and(|class| classes.contains(&class)) =>
            {
                out.push_str(replacement)
            }
            Token::Directive { raw, .. } | Token::Literal(raw) => out.push_str(raw),
        }
    }

    collapse_wildcards(&out)
}

/// Merge runs of adjacent wildcards, so two suppressed neighbour fields
/// yield a single `*`.
fn collapse_wildcards(glob: &str) -> String {
    let mut out = String::with_capacity(glob.len());

    for c in glob.chars() {
        if c == WILDCARD && out.ends_with(WILDCARD) {
            continue;
        }

        out.push(c);
    }

    out
}

/// Emit a warning for each directive whose specifier the formatter will
/// reject. Detection of the resulting error stays lazy, this is advisory.
#[cfg(feature = "log")]
pub(crate) fn warn_unknown_specifiers(template: &str) {
    for token in Tokens::new(template) {
        if let Token::Directive { raw, letter } = token {
            if classify(letter).is_none() {
                log::warn!("Unrecognized strftime directive `{raw}` in `{template}`");
            }
        }
    }
}

enum Token<'a> {
    /// Raw text copied verbatim, including `%%` escapes and unterminated
    /// trailing markers.
    Literal(&'a str),
    /// A directive, `raw` spanning the marker and any modifier.
    Directive { raw: &'a str, letter: char },
}

/// Iterator over the directives and literal chunks of a template, in the
/// spirit of chrono's own `StrftimeItems`.
struct Tokens<'a> {
    remainder: &'a str,
}

impl<'a> Tokens<'a> {
    fn new(template: &'a str) -> Self {
        Self { remainder: template }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let s = self.remainder;

        if s.is_empty() {
            return None;
        }

        if !s.starts_with('%') {
            let end = s.find('%').unwrap_or(s.len());
            self.remainder = &s[end..];
            return Some(Token::Literal(&s[..end]));
        }

        if s.starts_with("%%") {
            self.remainder = &s[2..];
            return Some(Token::Literal("%%"));
        }

        // padding, precision and offset modifiers, as supported by chrono
        // (`%-d`, `%.3f`, `%::z`, `%#z`, ...)
        let mut pos = 1;

        for c in s[1..].chars() {
            if matches!(c, '-' | '0' | '_' | '.' | ':' | '#') || c.is_ascii_digit() {
                pos += c.len_utf8();
                continue;
            }

            let end = pos + c.len_utf8();
            self.remainder = &s[end..];
            return Some(Token::Directive { raw: &s[..end], letter: c });
        }

        // trailing marker with no specifier, let the formatter reject it
        self.remainder = "";
        Some(Token::Literal(s))
    }
}
