//! Weather provider client.

use std::time::Duration;

use api_protocol::WeatherReport;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

const USER_AGENT: &str = "Dashboard-App/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Weather lookup errors.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// The provider does not know the city.
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// The provider could not be reached or answered with an error.
    #[error("Weather provider unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for WeatherError {
    fn from(e: reqwest::Error) -> Self {
        WeatherError::Unavailable(e.to_string())
    }
}

/// Source of current conditions and forecasts by city name.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches the report for `city`.
    async fn fetch(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}

/// Client for the cereal.sh weather API.
#[derive(Debug, Clone)]
pub struct CerealWeatherClient {
    client: Client,
    base_url: String,
}

impl CerealWeatherClient {
    /// Creates a client against `base_url`, e.g. `https://www.cereal.sh`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl WeatherProvider for CerealWeatherClient {
    async fn fetch(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let response = self
            .client
            .get(format!("{}/api/weather", self.base_url))
            .query(&[("city", city)])
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(WeatherError::CityNotFound(city.to_string())),
            status if !status.is_success() => Err(WeatherError::Unavailable(format!(
                "provider returned {status}"
            ))),
            _ => Ok(response.json::<WeatherReport>().await?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"{
        "current": {
            "temperature": 18.0,
            "condition": "Partly cloudy",
            "humidity": 65,
            "windSpeed": 14.5,
            "feelsLike": 17.0,
            "uvIndex": 3,
            "precipitationIntensity": 0.1
        },
        "forecast": [
            {"day": "Tue", "high": 20, "low": 12, "condition": "Rain", "precipitationChance": 80}
        ]
    }"#;

    #[tokio::test]
    async fn test_fetch_report() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/weather")
            .match_query(mockito::Matcher::UrlEncoded("city".into(), "New York".into()))
            .match_header("user-agent", USER_AGENT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(REPORT)
            .create_async()
            .await;

        let client = CerealWeatherClient::new(server.url()).unwrap();
        let report = client.fetch("New York").await.unwrap();

        mock.assert_async().await;
        assert_eq!(report.current.condition, "Partly cloudy");
        assert_eq!(report.forecast.len(), 1);
        assert_eq!(report.forecast[0].condition, "Rain");
    }

    #[tokio::test]
    async fn test_unknown_city() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/weather")
            .match_query(mockito::Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let client = CerealWeatherClient::new(server.url()).unwrap();
        let err = client.fetch("Atlantis").await.unwrap_err();

        assert!(matches!(err, WeatherError::CityNotFound(city) if city == "Atlantis"));
    }

    #[tokio::test]
    async fn test_provider_failure_is_unavailable() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/weather")
            .match_query(mockito::Matcher::Any)
            .with_status(502)
            .create_async()
            .await;

        let client = CerealWeatherClient::new(server.url()).unwrap();
        let err = client.fetch("Sydney").await.unwrap_err();

        assert!(matches!(err, WeatherError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_unavailable() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/weather")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = CerealWeatherClient::new(server.url()).unwrap();
        let err = client.fetch("Sydney").await.unwrap_err();

        assert!(matches!(err, WeatherError::Unavailable(_)));
    }
}
