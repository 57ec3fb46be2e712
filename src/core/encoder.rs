//! Parsing of `HH:MM:SS` text and encoding into Berlin clock lamp rows.

use crate::domain::model::{FiveRowDisplay, Lamp, LampRow, TimeField, TimeOfDay};
use crate::utils::error::{ClockError, Result};
use std::str::FromStr;

const HOUR_ROW_LEN: usize = 4;
const MINUTE_FIVE_ROW_LEN: usize = 11;
const MINUTE_ONE_ROW_LEN: usize = 4;

/// Cells of the five-minute row that mark quarter hours (15, 30, 45).
const QUARTER_HOUR_CELLS: [usize; 3] = [2, 5, 8];

/// Parses `HH:MM:SS` into a validated [`TimeOfDay`].
///
/// `None` and the empty string both mean no time was provided.
pub fn parse(input: Option<&str>) -> Result<TimeOfDay> {
    let input = match input {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ClockError::MissingInput),
    };

    // At most three fields; anything after the second colon belongs to seconds.
    let fields: Vec<&str> = input.splitn(3, ':').collect();
    if fields.len() != 3 {
        tracing::debug!("Rejected '{}': {} field(s)", input, fields.len());
        return Err(ClockError::MalformedFormat {
            input: input.to_string(),
            fields: fields.len(),
        });
    }

    let mut values = [0i32; 3];
    for ((value, raw), field) in values.iter_mut().zip(&fields).zip(TimeField::ALL) {
        *value = raw.parse::<i32>().map_err(|_| ClockError::NonNumericField {
            field,
            value: raw.to_string(),
        })?;
    }

    let [hours, minutes, seconds] = values;
    let time = TimeOfDay::new(hours, minutes, seconds)?;
    if time.hours() == 24 {
        tracing::debug!("Accepting hour 24 in '{}'", input);
    }
    Ok(time)
}

pub fn encode(time: TimeOfDay) -> FiveRowDisplay {
    FiveRowDisplay::new(
        seconds_row(time.seconds()),
        LampRow::filled(HOUR_ROW_LEN, usize::from(time.hours() / 5), Lamp::Red),
        LampRow::filled(HOUR_ROW_LEN, usize::from(time.hours() % 5), Lamp::Red),
        minutes_five_row(time.minutes()),
        LampRow::filled(
            MINUTE_ONE_ROW_LEN,
            usize::from(time.minutes() % 5),
            Lamp::Yellow,
        ),
    )
}

fn seconds_row(seconds: u8) -> LampRow {
    let lamp = if seconds % 2 == 0 { Lamp::Yellow } else { Lamp::Off };
    LampRow::from(vec![lamp])
}

fn minutes_five_row(minutes: u8) -> LampRow {
    let lit = usize::from(minutes / 5);
    let mut lamps = LampRow::filled(MINUTE_FIVE_ROW_LEN, lit, Lamp::Yellow)
        .lamps()
        .to_vec();
    for &cell in &QUARTER_HOUR_CELLS {
        if lamps[cell] == Lamp::Yellow {
            lamps[cell] = Lamp::Red;
        }
    }
    LampRow::from(lamps)
}

impl FromStr for TimeOfDay {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self> {
        parse(Some(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(input: &str) -> Vec<String> {
        let display = encode(parse(Some(input)).unwrap());
        display.rows().iter().map(|row| row.to_string()).collect()
    }

    #[test]
    fn test_midnight() {
        assert_eq!(rows("00:00:00"), ["Y", "OOOO", "OOOO", "OOOOOOOOOOO", "OOOO"]);
    }

    #[test]
    fn test_afternoon() {
        assert_eq!(rows("13:17:01"), ["O", "RROO", "RRRO", "YYROOOOOOOO", "YYOO"]);
    }

    #[test]
    fn test_hour_twenty_four_is_accepted() {
        assert_eq!(rows("24:00:00"), ["Y", "RRRR", "RRRR", "OOOOOOOOOOO", "OOOO"]);
    }

    #[test]
    fn test_last_second_before_midnight() {
        assert_eq!(rows("23:59:59"), ["O", "RRRR", "RRRO", "YYRYYRYYRYY", "YYYY"]);
    }

    #[test]
    fn test_quarter_cell_stays_off_when_unlit() {
        let row = minutes_five_row(10);
        assert_eq!(row.to_string(), "YYOOOOOOOOO");
        let row = minutes_five_row(15);
        assert_eq!(row.to_string(), "YYROOOOOOOO");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse(None), Err(ClockError::MissingInput)));
        assert!(matches!(parse(Some("")), Err(ClockError::MissingInput)));
        assert!(matches!(
            parse(Some("12:30")),
            Err(ClockError::MalformedFormat { fields: 2, .. })
        ));
        assert!(matches!(
            parse(Some("12:ab:00")),
            Err(ClockError::NonNumericField {
                field: TimeField::Minutes,
                ..
            })
        ));
        assert!(matches!(
            parse(Some("25:00:00")),
            Err(ClockError::OutOfRange {
                field: TimeField::Hours,
                value: 25,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_follows_integer_rules() {
        assert_eq!(parse(Some("+5:07:9")).unwrap().to_string(), "05:07:09");
        assert!(matches!(
            parse(Some("-1:00:00")),
            Err(ClockError::OutOfRange { value: -1, .. })
        ));
        assert!(matches!(
            parse(Some(" 1:00:00")),
            Err(ClockError::NonNumericField { .. })
        ));
        assert!(matches!(
            parse(Some("12:30:")),
            Err(ClockError::NonNumericField {
                field: TimeField::Seconds,
                ..
            })
        ));
    }

    #[test]
    fn test_extra_colons_fold_into_seconds() {
        match parse(Some("1:2:3:4")) {
            Err(ClockError::NonNumericField { field, value }) => {
                assert_eq!(field, TimeField::Seconds);
                assert_eq!(value, "3:4");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            parse(Some("12:00:00:")),
            Err(ClockError::NonNumericField {
                field: TimeField::Seconds,
                ..
            })
        ));
        assert!(matches!(
            parse(Some("12")),
            Err(ClockError::MalformedFormat { fields: 1, .. })
        ));
    }

    #[test]
    fn test_from_str() {
        let time: TimeOfDay = "08:45:30".parse().unwrap();
        assert_eq!(time.minutes(), 45);
    }
}
