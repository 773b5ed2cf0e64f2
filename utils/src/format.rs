//! Human-readable formatting for log lines.

use civic_types::TOKEN_UNIT;

/// Format a duration in seconds to a human-readable string.
pub fn format_duration(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs < 86400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
    }
}

/// Format a raw amount as whole tokens with up to four decimals, e.g. `64`, `0.5`.
pub fn format_tokens(raw: u128) -> String {
    let whole = raw / TOKEN_UNIT;
    let frac = (raw % TOKEN_UNIT) / (TOKEN_UNIT / 10_000);
    if frac == 0 {
        whole.to_string()
    } else {
        let digits = format!("{:04}", frac);
        format!("{}.{}", whole, digits.trim_end_matches('0'))
    }
}
