use anyhow::Context;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";
pub const BIRTH_TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// What the user entered on the input screen.
///
/// Only `birth_date` feeds the classifier; the other fields are carried along
/// so a reading can echo back what it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthProfile {
    pub birth_date: NaiveDate,
    /// `None` when the birth time is unknown.
    #[serde(default, with = "hhmm")]
    pub birth_time: Option<NaiveTime>,
    #[serde(default)]
    pub gender: Gender,
}

impl BirthProfile {
    pub fn new(birth_date: NaiveDate) -> Self {
        Self {
            birth_date,
            birth_time: None,
            gender: Gender::default(),
        }
    }
}

pub fn parse_birth_date(s: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), BIRTH_DATE_FORMAT)
        .with_context(|| format!("birth date must be YYYY-MM-DD (got {s:?})"))
}

pub fn parse_birth_time(s: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), BIRTH_TIME_FORMAT)
        .with_context(|| format!("birth time must be HH:MM (got {s:?})"))
}

mod hhmm {
    use super::BIRTH_TIME_FORMAT;
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_some(&t.format(BIRTH_TIME_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|s| {
            NaiveTime::parse_from_str(s.trim(), BIRTH_TIME_FORMAT)
                .map_err(serde::de::Error::custom)
        })
        .transpose()
    }
}
