use chrono::NaiveDate;

/// Formats a runtime in minutes as `"H hour(s) M min(s)"`.
///
/// The minutes clause is omitted when the remainder is zero; a zero or
/// absent runtime formats as `"N/A"`.
pub fn format_runtime(runtime: Option<u32>) -> String {
    match runtime {
        None | Some(0) => "N/A".to_string(),
        Some(minutes) => {
            let hours = minutes / 60;
            let rest = minutes % 60;
            if rest == 0 {
                format!("{} hour(s)", hours)
            } else {
                format!("{} hour(s) {} min(s)", hours, rest)
            }
        }
    }
}

/// Formats a provider `YYYY-MM-DD` date as a weekday-stripped date string
/// (month, zero-padded day, year — e.g. `"Jul 16 2010"`).
///
/// Missing or unparseable dates format as `"N/A"`.
pub fn format_date(date: Option<&str>) -> String {
    date.and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(|d| d.format("%b %d %Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Formats a count with thousands separators (`1234567` → `"1,234,567"`).
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
