//! Formatting helpers for presenting content.

use time::macros::format_description;
use time::Date;

use crate::i18n::Lang;

/// Short numeric date in the reader's convention (`15.3.2024` / `3/15/2024`).
/// Falls back to ISO-8601 if formatting fails.
pub fn format_date(date: Date, lang: Lang) -> String {
    let formatted = match lang {
        Lang::De => date.format(format_description!(
            "[day padding:none].[month padding:none].[year]"
        )),
        Lang::En => date.format(format_description!(
            "[month padding:none]/[day padding:none]/[year]"
        )),
    };
    formatted.unwrap_or_else(|_| date.to_string())
}

/// Machine-readable value for `<time datetime=...>`.
pub fn iso_date(date: Date) -> String {
    date.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn german_dates_are_day_first() {
        assert_eq!(format_date(date!(2024 - 03 - 15), Lang::De), "15.3.2024");
        assert_eq!(format_date(date!(2024 - 05 - 01), Lang::De), "1.5.2024");
    }

    #[test]
    fn english_dates_are_month_first() {
        assert_eq!(format_date(date!(2024 - 03 - 15), Lang::En), "3/15/2024");
        assert_eq!(format_date(date!(2024 - 07 - 15), Lang::En), "7/15/2024");
    }

    #[test]
    fn iso_is_zero_padded() {
        assert_eq!(iso_date(date!(2024 - 05 - 01)), "2024-05-01");
    }
}
