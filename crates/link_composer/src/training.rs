//! Training-day cards.

use entities::{DayOfWeek, LinkDescriptor, LinkType, TrainingActivity, TrainingWeek};

use crate::ComposeResult;

/// Id of the training card.
pub const TRAINING_CARD_ID: &str = "training-week";

struct TrainingCardStyle {
    title: &'static str,
    icon: &'static str,
    color: &'static str,
}

fn style_of(activity: TrainingActivity) -> TrainingCardStyle {
    let (title, icon, color) = match activity {
        TrainingActivity::Rest => ("Rest Day", "💤", "from-gray-500 to-gray-600"),
        TrainingActivity::Workout => ("Workout Day", "💪", "from-blue-500 to-blue-600"),
        TrainingActivity::Run => ("Run Day", "🏃", "from-green-500 to-green-600"),
        TrainingActivity::Walk => ("Walk Day", "🚶", "from-yellow-500 to-yellow-600"),
        TrainingActivity::Bike => ("Bike Day", "🚴", "from-purple-500 to-purple-600"),
        TrainingActivity::Swim => ("Swim Day", "🏊", "from-cyan-500 to-cyan-600"),
        TrainingActivity::Other => ("Training Day", "🤷", "from-red-500 to-red-600"),
    };
    TrainingCardStyle { title, icon, color }
}

/// Builds the card for an activity.
pub fn training_card(activity: TrainingActivity) -> LinkDescriptor {
    let style = style_of(activity);
    LinkDescriptor::new(TRAINING_CARD_ID, style.title, "#", style.icon, style.color)
        .with_type(LinkType::TrainingWeek)
}

/// Builds the card for a stored activity name.
///
/// Fails on names outside the known vocabulary instead of producing a card
/// that does nothing.
pub fn training_card_for(activity: &str) -> ComposeResult<LinkDescriptor> {
    let activity: TrainingActivity = activity.parse()?;
    Ok(training_card(activity))
}

/// Resolves the activity planned for `today`.
///
/// An unknown week counts as a week of rest days.
pub fn todays_activity(week: Option<&TrainingWeek>, today: DayOfWeek) -> &str {
    match week {
        Some(week) => week.activity_for(today),
        None => TrainingActivity::Rest.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use entities::TrainingDay;
    use uuid::Uuid;

    use super::*;
    use crate::ComposeError;

    #[test]
    fn test_every_activity_has_a_distinct_title() {
        let titles: std::collections::HashSet<String> = TrainingActivity::ALL
            .into_iter()
            .map(|a| training_card(a).title)
            .collect();
        assert_eq!(titles.len(), 7);
    }

    #[test]
    fn test_training_card_shape() {
        let card = training_card_for("run").unwrap();

        assert_eq!(card.id, TRAINING_CARD_ID);
        assert_eq!(card.title, "Run Day");
        assert_eq!(card.link_type, Some(LinkType::TrainingWeek));
    }

    #[test]
    fn test_unknown_activity_is_an_error() {
        let err = training_card_for("yoga").unwrap_err();
        assert_eq!(
            err,
            ComposeError::UnknownTrainingActivity {
                activity: "yoga".to_string()
            }
        );
    }

    #[test]
    fn test_todays_activity_defaults_to_rest() {
        assert_eq!(todays_activity(None, DayOfWeek::Monday), "rest");
    }

    #[test]
    fn test_todays_activity_reads_week() {
        let week = TrainingWeek::complete([TrainingDay::new(
            Uuid::new_v4(),
            DayOfWeek::Thursday,
            "swim",
        )]);

        assert_eq!(todays_activity(Some(&week), DayOfWeek::Thursday), "swim");
        assert_eq!(todays_activity(Some(&week), DayOfWeek::Friday), "rest");
    }
}
