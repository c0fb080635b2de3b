//! Health event models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::coerce;

/// Condition recorded with a health event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HealthStatus {
    Healthy,
    Sick,
    Recovering,
    UnderTreatment,
    Critical,
    /// Absent or not one of the known values
    #[default]
    Unknown,
}

impl HealthStatus {
    /// Parse the wire value; anything unrecognised is `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "healthy" => HealthStatus::Healthy,
            "sick" => HealthStatus::Sick,
            "recovering" => HealthStatus::Recovering,
            "under_treatment" => HealthStatus::UnderTreatment,
            "critical" => HealthStatus::Critical,
            _ => HealthStatus::Unknown,
        }
    }

    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Sick => "sick",
            HealthStatus::Recovering => "recovering",
            HealthStatus::UnderTreatment => "under_treatment",
            HealthStatus::Critical => "critical",
            HealthStatus::Unknown => "unknown",
        }
    }

    /// Human-readable badge text.
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Sick => "Sick",
            HealthStatus::Recovering => "Recovering",
            HealthStatus::UnderTreatment => "Under treatment",
            HealthStatus::Critical => "Critical",
            HealthStatus::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, HealthStatus::Unknown)
    }
}

impl Serialize for HealthStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HealthStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
            Some(serde_json::Value::String(s)) => HealthStatus::parse(&s),
            _ => HealthStatus::Unknown,
        })
    }
}

/// A health event as returned by the `/health` collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthRecord {
    #[serde(default, deserialize_with = "coerce::id")]
    pub id: String,
    /// Animal this event belongs to (may reference an animal that no longer exists)
    #[serde(default, deserialize_with = "coerce::id")]
    pub animal_id: String,
    /// Denormalized animal name, when the API joins it in
    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub animal_name: Option<String>,
    /// When the event happened
    #[serde(default, deserialize_with = "coerce::timestamp")]
    pub date: Option<DateTime<Utc>>,
    /// Next scheduled check
    #[serde(default, deserialize_with = "coerce::timestamp")]
    pub next_check: Option<DateTime<Utc>>,
    #[serde(default)]
    pub health_status: HealthStatus,
    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub vaccine_name: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub disease: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub treatment: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub observations: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub veterinarian: Option<String>,
}

impl HealthRecord {
    /// Create a new, not yet stored health event for an animal.
    pub fn new(animal_id: String, date: DateTime<Utc>) -> Self {
        Self {
            id: String::new(),
            animal_id,
            animal_name: None,
            date: Some(date),
            next_check: None,
            health_status: HealthStatus::Healthy,
            vaccine_name: None,
            disease: None,
            treatment: None,
            observations: None,
            veterinarian: None,
        }
    }

    /// Who the event is about: the joined animal name, or `#<animal_id>`.
    pub fn subject(&self) -> String {
        match &self.animal_name {
            Some(name) => name.clone(),
            None => format!("#{}", self.animal_id),
        }
    }

    /// One-line summary: vaccine, disease, treatment, then the status.
    pub fn headline(&self) -> String {
        self.vaccine_name
            .as_deref()
            .or(self.disease.as_deref())
            .or(self.treatment.as_deref())
            .or_else(|| {
                self.health_status
                    .is_known()
                    .then(|| self.health_status.label())
            })
            .unwrap_or("Record")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_parse() {
        assert_eq!(HealthStatus::parse("under_treatment"), HealthStatus::UnderTreatment);
        assert_eq!(HealthStatus::parse("critical"), HealthStatus::Critical);
        assert_eq!(HealthStatus::parse("zombie"), HealthStatus::Unknown);
        assert_eq!(HealthStatus::Unknown.label(), "Unknown");
    }

    #[test]
    fn test_deserialize_record() {
        let record: HealthRecord = serde_json::from_value(json!({
            "id": 11,
            "animal_id": 7,
            "date": "2024-01-02",
            "next_check": "2024-02-02",
            "health_status": "sick",
            "disease": "mastitis",
            "vaccine_name": "",
            "veterinarian": null
        }))
        .unwrap();

        assert_eq!(record.id, "11");
        assert_eq!(record.animal_id, "7");
        assert!(record.date.is_some());
        assert!(record.next_check.is_some());
        assert_eq!(record.health_status, HealthStatus::Sick);
        assert_eq!(record.vaccine_name, None);
        assert_eq!(record.disease.as_deref(), Some("mastitis"));
    }

    #[test]
    fn test_missing_status_and_dates() {
        let record: HealthRecord = serde_json::from_value(json!({
            "id": 1,
            "animal_id": 2,
            "next_check": "",
            "health_status": 3
        }))
        .unwrap();

        assert_eq!(record.date, None);
        assert_eq!(record.next_check, None);
        assert_eq!(record.health_status, HealthStatus::Unknown);
    }

    #[test]
    fn test_headline_precedence() {
        let mut record: HealthRecord =
            serde_json::from_value(json!({"id": 1, "animal_id": 2})).unwrap();
        assert_eq!(record.headline(), "Record");

        record.health_status = HealthStatus::Recovering;
        assert_eq!(record.headline(), "Recovering");

        record.treatment = Some("antibiotics".into());
        assert_eq!(record.headline(), "antibiotics");

        record.vaccine_name = Some("aftosa".into());
        assert_eq!(record.headline(), "aftosa");
    }

    #[test]
    fn test_subject() {
        let mut record: HealthRecord =
            serde_json::from_value(json!({"id": 1, "animal_id": 42})).unwrap();
        assert_eq!(record.subject(), "#42");

        record.animal_name = Some("Lola".into());
        assert_eq!(record.subject(), "Lola");
    }
}
