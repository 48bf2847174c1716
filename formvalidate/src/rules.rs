//! Built-in format rules, custom patterns and rule selection by name.
//!
//! A field opts into a rule with `data-validate-rule`; a custom pattern comes
//! from `data-validate-regex`. Lookup is by exact name and never fails:
//! unknown names fall back to [`Rule::Required`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9][a-zA-Z0-9._-]+@([a-zA-Z0-9._-]+\.)[a-zA-Z0-9]{2,3}$";
const PHONE_PATTERN: &str = r"^(?:\()?(1[1-9]|2[12478]|3[1234578]|4[1-9]|5[1345]|6[1-9]|7[134579]|8[1-9]|9[1-9])(?:\))?(?:\s)?(9)?([0-9]{4})(?:-)?([0-9]{4})$";
const CPF_PATTERN: &str = r"^[0-9]{3}\.?[0-9]{3}\.?[0-9]{3}-?[0-9]{2}$";
const RG_PATTERN: &str = r"^[0-9]{2}\.?[0-9]{3}\.?[0-9]{3}-?[0-9]$";
const CEP_PATTERN: &str = r"^[0-9]{5}-?[0-9]{3}$";

static EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| compile(EMAIL_PATTERN));
static PHONE: LazyLock<Option<Regex>> = LazyLock::new(|| compile(PHONE_PATTERN));
static CPF: LazyLock<Option<Regex>> = LazyLock::new(|| compile(CPF_PATTERN));
static RG: LazyLock<Option<Regex>> = LazyLock::new(|| compile(RG_PATTERN));
static CEP: LazyLock<Option<Regex>> = LazyLock::new(|| compile(CEP_PATTERN));

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            log::error!("[rules] built-in pattern failed to compile: {e}");
            None
        }
    }
}

fn matches(re: &LazyLock<Option<Regex>>, raw: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(raw))
}

/// Rules selected by name through `data-validate-rule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Email,
    /// Brazilian fixed or mobile phone number.
    Phone,
    /// Brazilian individual taxpayer number, format plus check digits.
    Cpf,
    /// Brazilian general registry number, format only.
    Rg,
    /// Brazilian postal code.
    Cep,
    Url,
}

impl Builtin {
    pub const ALL: [Builtin; 6] = [
        Self::Email,
        Self::Phone,
        Self::Cpf,
        Self::Rg,
        Self::Cep,
        Self::Url,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.name() == name)
    }

    /// The name used in `data-validate-rule`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Cpf => "cpf",
            Self::Rg => "rg",
            Self::Cep => "cep",
            Self::Url => "url",
        }
    }

    pub fn check(&self, raw: &str) -> bool {
        match self {
            Self::Email => is_email(raw),
            Self::Phone => is_phone(raw),
            Self::Cpf => is_cpf(raw),
            Self::Rg => is_rg(raw),
            Self::Cep => is_cep(raw),
            Self::Url => is_url(raw),
        }
    }

    /// Maximum input length the rule forces onto its field, if any.
    pub fn max_length(&self) -> Option<usize> {
        match self {
            Self::Cpf => Some(14),
            Self::Rg => Some(12),
            Self::Cep => Some(9),
            _ => None,
        }
    }
}

/// A user-supplied pattern from `data-validate-regex`.
///
/// Matching is a search, not a full match, like `RegExp.test`. A pattern
/// that does not compile matches nothing.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Option<Regex>,
}

impl Pattern {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let regex = match Regex::new(&source) {
            Ok(re) => Some(re),
            Err(e) => {
                log::warn!("[rules] unusable data-validate-regex {source:?}: {e}");
                None
            }
        };
        Self { source, regex }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_usable(&self) -> bool {
        self.regex.is_some()
    }

    pub fn check(&self, raw: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(raw))
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

/// The rule a field is classified with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty (and, when strict, not padded with whitespace).
    Required,
    Builtin(Builtin),
    Pattern(Pattern),
}

impl Rule {
    /// Pick the rule for a field from its declared name and custom pattern.
    ///
    /// A named built-in wins over a custom pattern; a custom pattern wins over
    /// the default. Unknown names are ignored.
    pub fn resolve(name: Option<&str>, pattern: Option<&str>) -> Self {
        if let Some(builtin) = name.and_then(Builtin::from_name) {
            return Self::Builtin(builtin);
        }
        if let Some(name) = name {
            log::trace!("[rules] unknown rule name {name:?}, using default");
        }
        match pattern {
            Some(source) if !source.is_empty() => Self::Pattern(Pattern::new(source)),
            _ => Self::Required,
        }
    }

    pub fn check(&self, raw: &str, strict_whitespace: bool) -> bool {
        match self {
            Self::Required => is_filled(raw, strict_whitespace),
            Self::Builtin(builtin) => builtin.check(raw),
            Self::Pattern(pattern) => pattern.check(raw),
        }
    }

    pub fn max_length(&self) -> Option<usize> {
        match self {
            Self::Builtin(builtin) => builtin.max_length(),
            _ => None,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("required"),
            Self::Builtin(builtin) => f.write_str(builtin.name()),
            Self::Pattern(pattern) => write!(f, "/{}/", pattern.source()),
        }
    }
}

/// Default rule.
pub fn is_filled(raw: &str, strict_whitespace: bool) -> bool {
    if raw.is_empty() {
        return false;
    }
    !strict_whitespace
        || !(raw.starts_with(char::is_whitespace) || raw.ends_with(char::is_whitespace))
}

pub fn is_email(raw: &str) -> bool {
    matches(&EMAIL, raw)
}

pub fn is_phone(raw: &str) -> bool {
    matches(&PHONE, raw)
}

/// Format and check digits.
pub fn is_cpf(raw: &str) -> bool {
    matches(&CPF, raw) && cpf_is_valid(raw)
}

pub fn is_rg(raw: &str) -> bool {
    matches(&RG, raw)
}

pub fn is_cep(raw: &str) -> bool {
    matches(&CEP, raw)
}

/// Absolute `ftp`, `http` or `https` URL with a host and no whitespace.
pub fn is_url(raw: &str) -> bool {
    if raw.is_empty() || raw.chars().any(char::is_whitespace) {
        return false;
    }
    match url::Url::parse(raw) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "ftp" | "http" | "https")
                && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// CPF check digits alone: separators are ignored, the layout is not checked.
///
/// Rejects fewer than 11 digits and runs of one repeated digit. Each check
/// digit is a weighted sum mod 11 (weights 10..2, then 11..2); a remainder
/// below 2 gives 0, otherwise `11 - remainder`.
pub fn cpf_is_valid(raw: &str) -> bool {
    let digits: Vec<u32> = raw
        .chars()
        .filter(|c| *c != '.' && *c != '-')
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default();

    if digits.len() != 11 {
        return false;
    }
    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    let check_digit = |len: usize| {
        let sum: u32 = digits[..len]
            .iter()
            .zip((2..=len as u32 + 1).rev())
            .map(|(d, w)| d * w)
            .sum();
        let rem = sum % 11;
        if rem < 2 { 0 } else { 11 - rem }
    };

    check_digit(9) == digits[9] && check_digit(10) == digits[10]
}
