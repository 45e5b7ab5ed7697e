//! Money display for the dashboard.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a USD amount with no fraction digits, the way an `en-US` currency
/// formatter with `maximumFractionDigits: 0` does: `$1,235`, `-$40`, `$0`.
///
/// Halves round away from zero.
#[must_use]
pub fn format_usd_whole(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().trunc().to_string();

    format!("{sign}${}", group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
