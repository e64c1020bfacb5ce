use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use super::Decision;

/// Map a raw verdict onto the three supported decisions. Only exact case-insensitive
/// matches count; everything else is a rejection.
pub fn normalize_decision(raw: &str) -> Decision {
    match raw.to_lowercase().as_str() {
        "hire" | "accept" => Decision::Hire,
        "review" => Decision::Review,
        _ => Decision::Reject,
    }
}

/// Collapse a raw confidence value to an integer.
///
/// All characters other than Unicode decimal digits are dropped and the remaining
/// digits read as one number, so "12 out of 100" becomes 12100. Values up to 10 are
/// treated as a 1-10 scale and multiplied by ten. Oversized digit runs saturate.
pub fn normalize_confidence(raw: &str) -> u64 {
    let mut digits = raw.chars().filter_map(decimal_value).peekable();
    if digits.peek().is_none() {
        return 0;
    }

    let score = digits.fold(0u64, |score, digit| {
        score.saturating_mul(10).saturating_add(u64::from(digit))
    });
    if score <= 10 {
        score * 10
    } else {
        score
    }
}

fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

/// Value of a decimal digit in any script.
///
/// Unicode encodes every decimal digit set as a contiguous run starting at zero, so
/// the value is the distance from the start of the run, modulo ten.
fn decimal_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let run_offset = (0..u32::from(c))
        .rev()
        .map_while(char::from_u32)
        .take_while(|&previous| is_decimal_digit(previous))
        .count();
    u32::try_from(run_offset % 10).ok()
}
