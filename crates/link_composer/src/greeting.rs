//! Time-of-day greeting and background.

/// Part of the day used to pick the greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    /// 05:00 to 11:59.
    Morning,
    /// 12:00 to 16:59.
    Afternoon,
    /// 17:00 to 20:59.
    Evening,
    /// 21:00 to 04:59.
    Night,
}

impl TimeOfDay {
    /// Classifies an hour in `0..24`.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    fn salutation(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Good morning",
            TimeOfDay::Afternoon => "Good afternoon",
            TimeOfDay::Evening => "Good evening",
            TimeOfDay::Night => "Good night",
        }
    }
}

/// Returns the first word of a name, capitalised.
pub fn first_name(full_name: &str) -> Option<String> {
    let word = full_name.split_whitespace().next()?;
    let mut chars = word.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect())
}

/// Builds the greeting for an hour, addressing the user by first name when
/// one is known.
pub fn greeting(hour: u32, name: Option<&str>) -> String {
    let salutation = TimeOfDay::from_hour(hour).salutation();
    match name.and_then(first_name) {
        Some(first) => format!("{salutation}, {first}"),
        None => salutation.to_string(),
    }
}

/// Background gradient class for an hour.
pub fn gradient_class(hour: u32) -> &'static str {
    match hour {
        5..=7 => "sunrise-gradient",
        8..=11 => "morning-gradient",
        12..=16 => "afternoon-gradient",
        17..=19 => "sunset-gradient",
        20 => "evening-gradient",
        _ => "night-gradient",
    }
}
