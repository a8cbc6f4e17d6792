use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// The structured resume the ATS rubric scores.
///
/// Every field is optional on the wire. Absent and `null` fields both
/// deserialize to empty values so a half-finished draft still scores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub personal: PersonalInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<CertificationEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub linkedin: String,
    #[serde(deserialize_with = "lenient_string")]
    pub summary: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(deserialize_with = "lenient_string")]
    pub position: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub current: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub school: String,
    #[serde(deserialize_with = "lenient_string")]
    pub degree: String,
    #[serde(deserialize_with = "lenient_string")]
    pub field: String,
    #[serde(deserialize_with = "lenient_string")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub end_date: String,
    /// Clients send this as either `"3.8"` or `3.8`.
    #[serde(deserialize_with = "lenient_string")]
    pub gpa: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    /// Free text, loosely comma separated.
    #[serde(deserialize_with = "lenient_string")]
    pub technologies: String,
    #[serde(deserialize_with = "lenient_string")]
    pub link: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub issuer: String,
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub link: String,
}

/// True when the field carries something other than whitespace.
pub fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

impl ExperienceEntry {
    pub fn is_filled(&self) -> bool {
        present(&self.position) || present(&self.company)
    }
}

impl EducationEntry {
    pub fn is_filled(&self) -> bool {
        present(&self.school) || present(&self.degree)
    }
}

impl ProjectEntry {
    pub fn is_filled(&self) -> bool {
        present(&self.name) || present(&self.description)
    }
}

impl CertificationEntry {
    pub fn is_filled(&self) -> bool {
        present(&self.name) || present(&self.issuer)
    }
}

impl ResumeRecord {
    pub fn filled_experience(&self) -> impl Iterator<Item = &ExperienceEntry> {
        self.experience.iter().filter(|e| e.is_filled())
    }

    pub fn filled_education(&self) -> impl Iterator<Item = &EducationEntry> {
        self.education.iter().filter(|e| e.is_filled())
    }

    pub fn filled_projects(&self) -> impl Iterator<Item = &ProjectEntry> {
        self.projects.iter().filter(|p| p.is_filled())
    }

    pub fn filled_certifications(&self) -> impl Iterator<Item = &CertificationEntry> {
        self.certifications.iter().filter(|c| c.is_filled())
    }

    /// Skills with blank strings dropped. Deduplication is the caller's job.
    pub fn listed_skills(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .map(String::as_str)
            .filter(|s| present(s))
    }
}

/// A resume as persisted by the dashboard. `data` holds the `ResumeRecord` JSON.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub data: Value,
    pub ats_score: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_deserializes_to_empty_record() {
        let record: ResumeRecord = serde_json::from_value(json!({})).unwrap();
        assert!(record.experience.is_empty());
        assert!(record.personal.name.is_empty());
    }

    #[test]
    fn test_null_fields_treated_as_empty() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "personal": null,
            "experience": null,
            "skills": null,
            "education": [{"school": null, "gpa": null}]
        }))
        .unwrap();
        assert!(record.experience.is_empty());
        assert!(record.skills.is_empty());
        assert_eq!(record.education.len(), 1);
        assert!(!record.education[0].is_filled());
    }

    #[test]
    fn test_camel_case_dates_and_numeric_gpa() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "experience": [{"company": "Acme", "startDate": "2020-01", "current": true}],
            "education": [{"school": "MIT", "gpa": 3.9}]
        }))
        .unwrap();
        assert_eq!(record.experience[0].start_date, "2020-01");
        assert!(record.experience[0].current);
        assert_eq!(record.education[0].gpa, "3.9");
    }

    #[test]
    fn test_filled_requires_identity_field() {
        let blank = ExperienceEntry {
            description: "Led a team".to_string(),
            ..Default::default()
        };
        assert!(!blank.is_filled());

        let filled = ExperienceEntry {
            position: "Engineer".to_string(),
            ..Default::default()
        };
        assert!(filled.is_filled());

        let whitespace = CertificationEntry {
            name: "   ".to_string(),
            ..Default::default()
        };
        assert!(!whitespace.is_filled());
    }

    #[test]
    fn test_listed_skills_skips_blanks() {
        let record = ResumeRecord {
            skills: vec!["Rust".to_string(), " ".to_string(), "SQL".to_string()],
            ..Default::default()
        };
        assert_eq!(record.listed_skills().collect::<Vec<_>>(), vec!["Rust", "SQL"]);
    }
}
