//! Rough pixel estimates for CSS lengths, used as a display hint next to sizes.
//!
//! Only `clamp(min, preferred, max)` expressions get an estimate: each argument is converted
//! to pixels on its own and the three values are averaged. This is nowhere near what a browser
//! computes and is not meant to be.

/// Pixels per `rem`, assuming the browser default root font size.
pub const ROOT_FONT_SIZE_PX: f64 = 16.0;

/// Viewport width assumed when converting `vw` units. A common desktop width, nothing more.
pub const VIEWPORT_WIDTH_PX: f64 = 1920.0;

const CLAMP_OPEN: &str = "clamp(";

/// The three raw arguments of a `clamp()` expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampExpr<'a> {
    pub min: &'a str,
    pub preferred: &'a str,
    pub max: &'a str,
}

impl<'a> ClampExpr<'a> {
    /// Finds the first `clamp(min, preferred, max)` in the input, ignoring case and any text
    /// around it. `min` and `preferred` can't contain a comma and `max` can't contain a `)`.
    pub fn parse(input: &'a str) -> Option<Self> {
        let lowered = input.to_ascii_lowercase();
        let mut search_from = 0;

        while let Some(found) = lowered[search_from..].find(CLAMP_OPEN) {
            let args_start = search_from + found + CLAMP_OPEN.len();
            if let Some(expr) = Self::parse_args(&input[args_start..]) {
                return Some(expr);
            }
            search_from = args_start;
        }

        None
    }

    fn parse_args(args: &'a str) -> Option<Self> {
        let (min, rest) = args.split_once(',')?;
        if min.is_empty() {
            return None;
        }

        // Whitespace after a comma is skipped, unless it is all the argument has
        let (preferred, rest) = rest.split_once(',')?;
        if preferred.is_empty() {
            return None;
        }

        let close = rest.find(')')?;
        let max = &rest[..close];
        if max.is_empty() {
            return None;
        }

        Some(Self {
            min,
            preferred: skip_leading_whitespace(preferred),
            max: skip_leading_whitespace(max),
        })
    }

    /// Average of the three arguments in pixels, before rounding
    pub fn average_px(&self) -> f64 {
        (parse_length_px(self.min) + parse_length_px(self.preferred) + parse_length_px(self.max))
            / 3.0
    }
}

fn skip_leading_whitespace(arg: &str) -> &str {
    match arg.trim_start() {
        "" => arg,
        trimmed => trimmed,
    }
}

/// Converts a single length to pixels. Unknown units are read as a bare number and anything
/// that doesn't start with a number is 0.
pub fn parse_length_px(value: &str) -> f64 {
    let value = value.trim();
    let number = leading_number(value);

    if value.ends_with("rem") {
        number.map_or(0.0, |n| n * ROOT_FONT_SIZE_PX)
    } else if value.ends_with("px") {
        number.unwrap_or(0.0)
    } else if value.ends_with("vw") {
        number.map_or(0.0, |n| n * VIEWPORT_WIDTH_PX / 100.0)
    } else {
        number.unwrap_or(0.0)
    }
}

/// Approximate pixel size of a `clamp()` expression, rounded half up.
/// Returns `None` for anything that isn't a clamp expression.
pub fn length_to_approx_pixels(value: &str) -> Option<i64> {
    let expr = ClampExpr::parse(value)?;
    let average = expr.average_px();
    if !average.is_finite() {
        return None;
    }
    Some((average + 0.5).floor() as i64)
}

/// Parses the longest numeric prefix: optional sign, digits, fraction and exponent.
fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts if it has at least one digit
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
