use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Serialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DayKey {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayKey {
    /// Days elapsed since the Monday that starts the week.
    pub fn offset(&self) -> i64 {
        match self {
            DayKey::Monday => 0,
            DayKey::Tuesday => 1,
            DayKey::Wednesday => 2,
            DayKey::Thursday => 3,
            DayKey::Friday => 4,
            DayKey::Saturday => 5,
            DayKey::Sunday => 6,
        }
    }
}

impl From<time::Weekday> for DayKey {
    fn from(value: time::Weekday) -> Self {
        match value {
            time::Weekday::Monday => DayKey::Monday,
            time::Weekday::Tuesday => DayKey::Tuesday,
            time::Weekday::Wednesday => DayKey::Wednesday,
            time::Weekday::Thursday => DayKey::Thursday,
            time::Weekday::Friday => DayKey::Friday,
            time::Weekday::Saturday => DayKey::Saturday,
            time::Weekday::Sunday => DayKey::Sunday,
        }
    }
}

#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Serialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SlotType {
    Lunch,
    Dinner,
}

/// Calendar cell of a week plan, written `"{day}_{slot}"` (e.g. `wednesday_dinner`).
///
/// Ordering follows the calendar: monday lunch, monday dinner, tuesday lunch...
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId {
    pub day: DayKey,
    pub slot: SlotType,
}

impl SlotId {
    pub fn new(day: DayKey, slot: SlotType) -> Self {
        Self { day, slot }
    }

    /// All fourteen slots of a week in calendar order.
    pub fn all() -> impl Iterator<Item = SlotId> {
        DayKey::VARIANTS.iter().flat_map(|day| {
            SlotType::VARIANTS
                .iter()
                .map(move |slot| SlotId::new(*day, *slot))
        })
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.day, self.slot)
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("invalid slot id '{0}'")]
pub struct ParseSlotIdError(String);

impl FromStr for SlotId {
    type Err = ParseSlotIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((day, slot)) = s.split_once('_') else {
            return Err(ParseSlotIdError(s.to_owned()));
        };

        let day = DayKey::from_str(day).map_err(|_| ParseSlotIdError(s.to_owned()))?;
        let slot = SlotType::from_str(slot).map_err(|_| ParseSlotIdError(s.to_owned()))?;

        Ok(Self { day, slot })
    }
}

impl Serialize for SlotId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
