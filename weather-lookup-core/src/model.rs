use serde::{Deserialize, Serialize};

/// A stored weather record as returned by `GET /weather/{id}`.
///
/// The backend keeps the whole upstream weather payload under `weather`;
/// only the fields shown to the user are modelled here, the rest is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub weather: WeatherSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub weather_descriptions: Vec<String>,
}

impl LookupResult {
    /// Notes worth showing; an empty string counts as no notes.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.is_empty())
    }

    pub fn temperature_c(&self) -> f64 {
        self.weather.current.temperature
    }

    /// First weather description, if the record has any.
    pub fn condition(&self) -> Option<&str> {
        self.weather
            .current
            .weather_descriptions
            .first()
            .map(String::as_str)
    }
}

/// Body of `POST /weather`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecord {
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub notes: String,
}

/// Response of `POST /weather`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRecord {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_record_and_ignores_extra_fields() {
        let body = r#"{
            "date": "2025-06-01",
            "location": "Berlin",
            "notes": "picnic",
            "weather": {
                "request": { "type": "City", "query": "Berlin, Germany" },
                "current": {
                    "temperature": 21,
                    "weather_code": 113,
                    "weather_descriptions": ["Sunny", "Clear"]
                }
            }
        }"#;

        let record: LookupResult = serde_json::from_str(body).expect("valid record");

        assert_eq!(record.date, "2025-06-01");
        assert_eq!(record.location, "Berlin");
        assert_eq!(record.notes(), Some("picnic"));
        assert_eq!(record.temperature_c(), 21.0);
        assert_eq!(record.condition(), Some("Sunny"));
    }

    #[test]
    fn missing_or_empty_notes_are_treated_as_absent() {
        let without: LookupResult = serde_json::from_str(
            r#"{"date":"d","location":"l","weather":{"current":{"temperature":1.5,"weather_descriptions":[]}}}"#,
        )
        .expect("valid record");
        assert_eq!(without.notes(), None);
        assert_eq!(without.condition(), None);

        let empty: LookupResult = serde_json::from_str(
            r#"{"date":"d","location":"l","notes":"","weather":{"current":{"temperature":1.5,"weather_descriptions":["Mist"]}}}"#,
        )
        .expect("valid record");
        assert_eq!(empty.notes(), None);
    }

    #[test]
    fn missing_weather_block_is_a_parse_error() {
        let err = serde_json::from_str::<LookupResult>(r#"{"date":"d","location":"l"}"#).unwrap_err();
        assert!(err.to_string().contains("weather"));
    }
}
