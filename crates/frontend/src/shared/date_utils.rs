/// Date formatting for backend timestamps.
///
/// The backend stores `dataInclusao` either as ISO 8601 (`2025-02-10T12:00:00`)
/// or as SQL text (`2025-02-10 12:00:00`); both are shown as `dd/mm/aaaa hh:mm`.

fn split_date_time(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once(|c| c == 'T' || c == ' ') {
        Some((date, time)) => (date, Some(time)),
        None => (raw, None),
    }
}

fn format_date_part(date: &str) -> Option<String> {
    let mut parts = date.splitn(3, '-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return None;
    }
    Some(format!("{}/{}/{}", day, month, year))
}

/// "2025-02-10T12:34:56.123Z" -> "10/02/2025 12:34"
pub fn format_datetime(raw: &str) -> String {
    let trimmed = raw.trim();
    let (date, time) = split_date_time(trimmed);
    let Some(date) = format_date_part(date) else {
        return trimmed.to_string();
    };
    match time.and_then(|t| t.get(..5)) {
        Some(hh_mm) => format!("{} {}", date, hh_mm),
        None => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2025-02-10T12:34:56.123Z"), "10/02/2025 12:34");
        assert_eq!(format_datetime("2025-02-10 08:05:00"), "10/02/2025 08:05");
        assert_eq!(format_datetime("2025-02-10"), "10/02/2025");
    }

    #[test]
    fn test_unrecognized_text_is_kept() {
        assert_eq!(format_datetime("ontem"), "ontem");
        assert_eq!(format_datetime(""), "");
    }
}
