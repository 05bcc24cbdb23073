//! Wire representations of stored records and weather data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entities::User> for User {
    fn from(user: entities::User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            name: user.name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// A custom link as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomLink {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub url: String,
    pub icon: String,
    pub color: String,
    pub gradient: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entities::CustomLink> for CustomLink {
    fn from(link: entities::CustomLink) -> Self {
        Self {
            id: link.id.to_string(),
            user_id: link.user_id.to_string(),
            title: link.title,
            url: link.url,
            icon: link.icon,
            color: link.color,
            gradient: link.gradient,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

/// An address book entry as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAddress {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub inbox_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entities::EmailAddress> for EmailAddress {
    fn from(address: entities::EmailAddress) -> Self {
        Self {
            id: address.id.to_string(),
            user_id: address.user_id.to_string(),
            name: address.name,
            email: address.email,
            inbox_url: address.inbox_url,
            created_at: address.created_at,
            updated_at: address.updated_at,
        }
    }
}

/// A quote shown under the greeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// Current conditions reported by the weather provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherCurrent {
    pub temperature: f64,
    pub condition: String,
    pub humidity: f64,
    pub wind_speed: f64,
    pub feels_like: f64,
    pub uv_index: f64,
    pub precipitation_intensity: f64,
}

/// One day of the weather forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecastDay {
    pub day: String,
    pub high: f64,
    pub low: f64,
    pub condition: String,
    pub precipitation_chance: f64,
}

/// Current conditions plus the forecast for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: WeatherCurrent,
    #[serde(default)]
    pub forecast: Vec<WeatherForecastDay>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_custom_link_wire_names() {
        let link = entities::CustomLink::new(Uuid::new_v4(), "Docs", "https://docs.rs", "📚");
        let json = serde_json::to_value(CustomLink::from(link.clone())).unwrap();

        assert_eq!(json["userId"], link.user_id.to_string());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn test_weather_report_parses_provider_payload() {
        let payload = serde_json::json!({
            "current": {
                "temperature": 21.5,
                "condition": "Sunny",
                "humidity": 40,
                "windSpeed": 12.0,
                "feelsLike": 20.0,
                "uvIndex": 6,
                "precipitationIntensity": 0
            },
            "forecast": [
                {"day": "Mon", "high": 24, "low": 15, "condition": "Cloudy", "precipitationChance": 20}
            ]
        });

        let report: WeatherReport = serde_json::from_value(payload).unwrap();
        assert_eq!(report.current.condition, "Sunny");
        assert_eq!(report.current.humidity, 40.0);
        assert_eq!(report.forecast.len(), 1);
        assert_eq!(report.forecast[0].precipitation_chance, 20.0);
    }
}
