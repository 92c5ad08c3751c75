//! Formatting utilities used for CLI outputs.

/// Minutes → "01h 05m".
pub fn mins2readable(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.abs();
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

pub fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}
