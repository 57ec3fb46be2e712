use crate::utils::error::Result;
use crate::utils::validation::validate_field_range;
use chrono::Timelike;
use serde::Serialize;
use std::fmt;

/// One of the three colon-separated fields of a clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeField {
    Hours,
    Minutes,
    Seconds,
}

impl TimeField {
    pub const ALL: [TimeField; 3] = [TimeField::Hours, TimeField::Minutes, TimeField::Seconds];

    /// Largest accepted value. Hours allow 24 so that `24:00:00` is encodable.
    pub fn max(self) -> i32 {
        match self {
            TimeField::Hours => 24,
            TimeField::Minutes | TimeField::Seconds => 59,
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeField::Hours => "Hours",
            TimeField::Minutes => "Minutes",
            TimeField::Seconds => "Seconds",
        };
        f.write_str(name)
    }
}

/// A validated clock time. Every value of this type is within the encodable bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeOfDay {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl TimeOfDay {
    pub fn new(hours: i32, minutes: i32, seconds: i32) -> Result<Self> {
        validate_field_range(TimeField::Hours, hours)?;
        validate_field_range(TimeField::Minutes, minutes)?;
        validate_field_range(TimeField::Seconds, seconds)?;

        Ok(Self {
            hours: hours as u8,
            minutes: minutes as u8,
            seconds: seconds as u8,
        })
    }

    /// Wall-clock time from chrono. A leap second is reported by chrono as second 59.
    pub fn from_chrono<T: Timelike>(time: &T) -> Self {
        Self {
            hours: time.hour() as u8,
            minutes: time.minute() as u8,
            seconds: time.second().min(59) as u8,
        }
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Lamp {
    Off,
    Yellow,
    Red,
}

impl Lamp {
    pub fn symbol(self) -> char {
        match self {
            Lamp::Off => 'O',
            Lamp::Yellow => 'Y',
            Lamp::Red => 'R',
        }
    }

    pub fn is_lit(self) -> bool {
        self != Lamp::Off
    }
}

/// A row of lamp cells, serialised as its `Y`/`R`/`O` string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct LampRow {
    lamps: Vec<Lamp>,
}

impl LampRow {
    /// First `lit` cells take `colour`, the rest are off.
    pub fn filled(len: usize, lit: usize, colour: Lamp) -> Self {
        let lamps = (0..len)
            .map(|i| if i < lit { colour } else { Lamp::Off })
            .collect();
        Self { lamps }
    }

    pub fn lamps(&self) -> &[Lamp] {
        &self.lamps
    }

    pub fn len(&self) -> usize {
        self.lamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lamps.is_empty()
    }

    pub fn lit_count(&self) -> usize {
        self.lamps.iter().filter(|lamp| lamp.is_lit()).count()
    }
}

impl From<Vec<Lamp>> for LampRow {
    fn from(lamps: Vec<Lamp>) -> Self {
        Self { lamps }
    }
}

impl From<LampRow> for String {
    fn from(row: LampRow) -> Self {
        row.to_string()
    }
}

impl fmt::Display for LampRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lamp in &self.lamps {
            write!(f, "{}", lamp.symbol())?;
        }
        Ok(())
    }
}

/// The five rows of a Berlin clock, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FiveRowDisplay {
    seconds: LampRow,
    hours_five: LampRow,
    hours_one: LampRow,
    minutes_five: LampRow,
    minutes_one: LampRow,
}

impl FiveRowDisplay {
    pub const ROW_LENGTHS: [usize; 5] = [1, 4, 4, 11, 4];

    pub(crate) fn new(
        seconds: LampRow,
        hours_five: LampRow,
        hours_one: LampRow,
        minutes_five: LampRow,
        minutes_one: LampRow,
    ) -> Self {
        Self {
            seconds,
            hours_five,
            hours_one,
            minutes_five,
            minutes_one,
        }
    }

    pub fn seconds(&self) -> &LampRow {
        &self.seconds
    }

    pub fn hours_five(&self) -> &LampRow {
        &self.hours_five
    }

    pub fn hours_one(&self) -> &LampRow {
        &self.hours_one
    }

    pub fn minutes_five(&self) -> &LampRow {
        &self.minutes_five
    }

    pub fn minutes_one(&self) -> &LampRow {
        &self.minutes_one
    }

    pub fn rows(&self) -> [&LampRow; 5] {
        [
            &self.seconds,
            &self.hours_five,
            &self.hours_one,
            &self.minutes_five,
            &self.minutes_one,
        ]
    }
}

impl fmt::Display for FiveRowDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}
