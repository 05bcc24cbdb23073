//! Weekly training schedule definitions.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// The activity planned for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrainingActivity {
    #[default]
    Rest,
    Workout,
    Run,
    Bike,
    Swim,
    Walk,
    Other,
}

impl TrainingActivity {
    /// Every known activity.
    pub const ALL: [TrainingActivity; 7] = [
        TrainingActivity::Rest,
        TrainingActivity::Workout,
        TrainingActivity::Run,
        TrainingActivity::Walk,
        TrainingActivity::Bike,
        TrainingActivity::Swim,
        TrainingActivity::Other,
    ];

    /// Returns the persisted name of this activity.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingActivity::Rest => "rest",
            TrainingActivity::Workout => "workout",
            TrainingActivity::Run => "run",
            TrainingActivity::Bike => "bike",
            TrainingActivity::Swim => "swim",
            TrainingActivity::Walk => "walk",
            TrainingActivity::Other => "other",
        }
    }
}

impl fmt::Display for TrainingActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A training activity name outside the known vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown training activity: {0:?}")]
pub struct UnknownTrainingActivity(pub String);

impl FromStr for TrainingActivity {
    type Err = UnknownTrainingActivity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrainingActivity::ALL
            .into_iter()
            .find(|activity| activity.as_str() == s)
            .ok_or_else(|| UnknownTrainingActivity(s.to_string()))
    }
}

/// A day of the week, named in lowercase on the wire and in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// The days of a week, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Returns the lowercase day name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A day name that is not one of the seven weekdays.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown day of week: {0:?}")]
pub struct UnknownDayOfWeek(pub String);

impl FromStr for DayOfWeek {
    type Err = UnknownDayOfWeek;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayOfWeek::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| UnknownDayOfWeek(s.to_string()))
    }
}

/// A persisted schedule entry. One exists per user and weekday at most.
///
/// The activity is kept as stored so that values written outside the known
/// vocabulary surface as integrity errors when the dashboard is composed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingDay {
    /// Unique identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    pub day_of_week: DayOfWeek,
    pub activity: String,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
    /// When this record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl TrainingDay {
    /// Creates a new schedule entry.
    pub fn new(user_id: Uuid, day_of_week: DayOfWeek, activity: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            day_of_week,
            activity: activity.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A complete week: always exactly one activity per weekday.
///
/// Serialized as a map from lowercase day name to activity name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrainingWeek(BTreeMap<DayOfWeek, String>);

impl TrainingWeek {
    /// A week of rest days.
    pub fn all_rest() -> Self {
        Self(
            DayOfWeek::ALL
                .into_iter()
                .map(|day| (day, TrainingActivity::Rest.as_str().to_string()))
                .collect(),
        )
    }

    /// Normalizes a partial set of schedule entries into a complete week.
    /// Missing days are rest days.
    pub fn complete<I>(days: I) -> Self
    where
        I: IntoIterator<Item = TrainingDay>,
    {
        let mut week = Self::all_rest();
        for day in days {
            week.0.insert(day.day_of_week, day.activity);
        }
        week
    }

    /// Returns the activity planned for a day.
    pub fn activity_for(&self, day: DayOfWeek) -> &str {
        self.0
            .get(&day)
            .map(String::as_str)
            .unwrap_or(TrainingActivity::Rest.as_str())
    }

    /// Iterates over the week, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (DayOfWeek, &str)> {
        self.0.iter().map(|(day, activity)| (*day, activity.as_str()))
    }
}

impl Default for TrainingWeek {
    fn default() -> Self {
        Self::all_rest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_round_trips_through_name() {
        for activity in TrainingActivity::ALL {
            assert_eq!(activity.as_str().parse::<TrainingActivity>().unwrap(), activity);
        }
    }

    #[test]
    fn test_unknown_activity_rejected() {
        let err = "yoga".parse::<TrainingActivity>().unwrap_err();
        assert_eq!(err, UnknownTrainingActivity("yoga".to_string()));
        assert!("Run".parse::<TrainingActivity>().is_err());
    }

    #[test]
    fn test_day_from_chrono_weekday() {
        assert_eq!(DayOfWeek::from(Weekday::Mon), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::from(Weekday::Sun), DayOfWeek::Sunday);
        assert_eq!("friday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Friday);
        assert!("Friday".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn test_complete_week_defaults_to_rest() {
        let user_id = Uuid::new_v4();
        let week = TrainingWeek::complete([
            TrainingDay::new(user_id, DayOfWeek::Tuesday, "run"),
            TrainingDay::new(user_id, DayOfWeek::Saturday, "swim"),
        ]);

        assert_eq!(week.iter().count(), 7);
        assert_eq!(week.activity_for(DayOfWeek::Tuesday), "run");
        assert_eq!(week.activity_for(DayOfWeek::Saturday), "swim");
        assert_eq!(week.activity_for(DayOfWeek::Monday), "rest");
        assert_eq!(week.activity_for(DayOfWeek::Sunday), "rest");
    }

    #[test]
    fn test_week_serializes_as_day_map() {
        let week = TrainingWeek::complete([TrainingDay::new(
            Uuid::new_v4(),
            DayOfWeek::Wednesday,
            "bike",
        )]);
        let json = serde_json::to_value(&week).unwrap();

        assert_eq!(json["wednesday"], "bike");
        assert_eq!(json["monday"], "rest");
        assert_eq!(json.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_week_iterates_monday_first() {
        let days: Vec<DayOfWeek> = TrainingWeek::all_rest().iter().map(|(d, _)| d).collect();
        assert_eq!(days, DayOfWeek::ALL.to_vec());
    }
}
