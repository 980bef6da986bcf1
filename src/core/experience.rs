use once_cell::sync::Lazy;
use regex::Regex;

/// Largest number of years a single experience string can contribute
pub const MAX_EXPERIENCE_YEARS: u32 = 999;

/// Upper bound for any normalized experience value, in months
pub const MAX_EXPERIENCE_MONTHS: u32 = MAX_EXPERIENCE_YEARS * 12;

// Unit words are matched case-sensitively; "years"/"months" match via the prefix.
static YEARS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)\s*year").unwrap());
static MONTHS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)\s*month").unwrap());

/// Convert a free-form experience duration into a total month count
///
/// The first `<digits> year` and the first `<digits> month` occurrences are
/// looked up independently in the same input, so `"3 months and 2 years"`
/// yields 27. Anything that does not match contributes nothing; the function
/// never fails and returns 0 for empty or unrecognised input.
///
/// Values saturate at [`MAX_EXPERIENCE_MONTHS`].
///
/// # Examples
/// ```
/// use resumatch::core::normalize_experience;
///
/// assert_eq!(normalize_experience("2 years 3 months"), 27);
/// assert_eq!(normalize_experience("no experience"), 0);
/// ```
pub fn normalize_experience(text: &str) -> u32 {
    let years = first_quantity(&YEARS_RE, text).min(MAX_EXPERIENCE_YEARS);
    let months = first_quantity(&MONTHS_RE, text).min(MAX_EXPERIENCE_MONTHS);

    (years * 12).saturating_add(months).min(MAX_EXPERIENCE_MONTHS)
}

/// Number captured by the first match of `re`, or 0 when there is none
#[inline]
fn first_quantity(re: &Regex, text: &str) -> u32 {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        // The capture is all ASCII digits, so parsing only fails on overflow.
        .map(|digits| digits.as_str().parse::<u32>().unwrap_or(u32::MAX))
        .unwrap_or(0)
}
