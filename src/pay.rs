//! Daily pay arithmetic shared by the detail and work-log views.
//!
//! The remote API owns every authoritative figure; this is only the preview
//! formula `hours1 × rate1 + hours2 × rate2 − deduction`.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DailyPay {
    pub pay_rate1: f64,
    pub pay_rate2: f64,
    pub hours_payrate1: f64,
    pub hours_payrate2: f64,
    pub deduction: f64,
}

impl DailyPay {
    pub fn amount(&self) -> f64 {
        self.hours_payrate1 * self.pay_rate1 + self.hours_payrate2 * self.pay_rate2
            - self.deduction
    }
}

impl fmt::Display for DailyPay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(self.amount()))
    }
}

/// Two decimals, rounded from the exact binary value like the browser's
/// `toFixed(2)`: `0.25 × 12.34` is 3.0849999.. and shows as "3.08".
///
/// The only exact midpoints a double can hold at two decimals are odd
/// multiples of 1/8; those round away from zero.
pub fn format_amount(value: f64) -> String {
    let eighths = value * 8.0;
    let value = if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        (value * 100.0).round() / 100.0
    } else {
        value
    };
    let formatted = format!("{value:.2}");
    // keep "-0.00" out of the UI
    if formatted == "-0.00" {
        "0.00".to_string()
    } else {
        formatted
    }
}

/// Reads the longest numeric prefix of `input`, the way form fields are read
/// everywhere in the UI. Blank or non-numeric input is zero.
pub fn parse_amount(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0.0;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
