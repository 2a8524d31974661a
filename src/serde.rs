//! (De)serialization helpers shared by the inputs of the calculators.

// ISO 8601 calendar dates ("2024-01-01"), as used by factor repositories
time::serde::format_description!(date_format, Date, "[year]-[month]-[day]");

pub(crate) use date_format::option as optional_date;

/// Parses an ISO 8601 calendar date ("2024-01-31")
pub fn parse_date(date: &str) -> Result<time::Date, time::error::Parse> {
    time::Date::parse(date, time::macros::format_description!("[year]-[month]-[day]"))
}

/// Deserializes an optional integer, mapping numbers out of the range of a `u8` to `None`
pub(crate) fn lenient_u8<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: ::serde::Deserializer<'de>,
{
    let number: Option<i64> = ::serde::Deserialize::deserialize(deserializer)?;
    Ok(number.and_then(|number| u8::try_from(number).ok()))
}

/// Rounds `value` to `decimals` decimal places, half away from zero
pub fn round(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::date;

    #[test]
    fn parses() {
        assert_eq!(parse_date("2024-02-29").unwrap(), date!(2024 - 02 - 29));
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn rounds() {
        assert_eq!(round(1.23456789, 6), 1.234568);
        assert_eq!(round(-4.0000001, 6), -4.0);
        assert_eq!(round(2.5, 0), 3.0);
    }
}
