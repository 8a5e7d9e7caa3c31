use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// A posted job as the board sees it on the wire
///
/// The jobs table is populated by an external process, so every field
/// beyond the id decodes leniently: anything missing or malformed
/// becomes a fallback at render time instead of a decode failure.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Job {
    pub id: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default, deserialize_with = "skills_or_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
}

/// Anything that is not a JSON array of strings counts as "not specified"
fn skills_or_none<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(items) => {
            let skills = items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(skill) => Some(skill),
                    _ => None,
                })
                .collect();
            Ok(Some(skills))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_job() {
        let job: Job = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Backend",
                "description": "Servicio de ofertas",
                "cost": 1500.0,
                "skills": ["Rust", "SQL"],
                "posted_at": "2024-05-01T12:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(job.title, "Backend");
        assert_eq!(job.skills, Some(vec!["Rust".to_string(), "SQL".to_string()]));
    }

    #[test]
    fn missing_optional_fields_decode_to_none() {
        let job: Job = serde_json::from_str(r#"{"id": 2, "title": "Minimal"}"#).unwrap();

        assert_eq!(job.description, None);
        assert_eq!(job.cost, None);
        assert_eq!(job.skills, None);
        assert_eq!(job.posted_at, None);
    }

    #[test]
    fn non_sequence_skills_decode_to_none() {
        let job: Job =
            serde_json::from_str(r#"{"id": 3, "title": "Odd", "skills": "Rust"}"#).unwrap();
        assert_eq!(job.skills, None);

        let job: Job =
            serde_json::from_str(r#"{"id": 4, "title": "Odd", "skills": null}"#).unwrap();
        assert_eq!(job.skills, None);
    }

    #[test]
    fn non_string_entries_are_dropped_from_skills() {
        let job: Job =
            serde_json::from_str(r#"{"id": 5, "title": "Mixed", "skills": ["Rust", 7]}"#).unwrap();
        assert_eq!(job.skills, Some(vec!["Rust".to_string()]));
    }
}
