use chrono::{DateTime, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::format_datetime;
    use mentor_core::time::fixed_now;

    #[test]
    fn format_is_short_and_readable() {
        assert_eq!(format_datetime(fixed_now()), "Nov 14, 2023 22:13");
    }
}
