/// Groups thousands with commas: `1247` -> `"1,247"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Renders an ISO `YYYY-MM-DD` date as `M/D/YYYY`. Anything else is
/// returned unchanged.
pub fn format_reported_date(iso: &str) -> String {
    let mut parts = iso.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_string();
    };
    match (month.parse::<u32>(), day.parse::<u32>()) {
        (Ok(month), Ok(day)) if year.len() == 4 => format!("{}/{}/{}", month, day, year),
        _ => iso.to_string(),
    }
}

/// Summary line value, or "Not specified" while the field is blank.
pub fn or_not_specified(value: &str) -> &str {
    if value.is_empty() {
        "Not specified"
    } else {
        value
    }
}
