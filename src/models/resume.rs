use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Structured resume data as produced by the extraction service or edited by a user
///
/// Decoding is total: any JSON value becomes a `StructuredResume`. An object whose
/// only key is a string `raw` is the extraction fallback; every other object is
/// read field by field, with mistyped fields treated as absent. Non-object values
/// decode to empty fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StructuredResume {
    Raw(RawResume),
    Fields(ResumeFields),
}

/// Extraction output that could not be parsed as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawResume {
    pub raw: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeFields {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub total_experience: Option<String>,
    #[serde(default, deserialize_with = "lenient_string_list", skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub recent_job_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, deserialize_with = "lenient_string_list", skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_string_list", skip_serializing_if = "Option::is_none")]
    pub companies_worked: Option<Vec<String>>,
    /// Keys outside the known field set, kept so user edits round-trip
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StructuredResume {
    pub fn raw(content: impl Into<String>) -> Self {
        StructuredResume::Raw(RawResume { raw: content.into() })
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, StructuredResume::Raw(_))
    }

    /// Structured fields, or `None` for the raw fallback
    pub fn fields(&self) -> Option<&ResumeFields> {
        match self {
            StructuredResume::Fields(fields) => Some(fields),
            StructuredResume::Raw(_) => None,
        }
    }

    /// Candidate skills, empty when missing
    pub fn skills(&self) -> &[String] {
        self.fields()
            .and_then(|f| f.skills.as_deref())
            .unwrap_or(&[])
    }

    /// Experience string, `"0"` when missing
    pub fn total_experience(&self) -> &str {
        self.fields()
            .and_then(|f| f.total_experience.as_deref())
            .unwrap_or("0")
    }

    /// Education string, empty when missing
    pub fn education(&self) -> &str {
        self.fields()
            .and_then(|f| f.education.as_deref())
            .unwrap_or("")
    }
}

impl Default for StructuredResume {
    fn default() -> Self {
        StructuredResume::Fields(ResumeFields::default())
    }
}

impl From<ResumeFields> for StructuredResume {
    fn from(fields: ResumeFields) -> Self {
        StructuredResume::Fields(fields)
    }
}

impl From<Value> for StructuredResume {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                if map.len() == 1 {
                    if let Some(Value::String(raw)) = map.get("raw") {
                        return StructuredResume::raw(raw.clone());
                    }
                }
                // Field decoders never reject a value, so this only falls back on a serde bug.
                serde_json::from_value::<ResumeFields>(Value::Object(map))
                    .map(StructuredResume::Fields)
                    .unwrap_or_default()
            }
            _ => StructuredResume::default(),
        }
    }
}

impl<'de> Deserialize<'de> for StructuredResume {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(StructuredResume::from)
    }
}

impl From<&StructuredResume> for Value {
    fn from(resume: &StructuredResume) -> Self {
        serde_json::to_value(resume).unwrap_or(Value::Null)
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_object() {
        let resume: StructuredResume = serde_json::from_value(json!({
            "name": "Ada Lovelace",
            "total_experience": "2 years 3 months",
            "skills": ["Python", "SQL"],
            "recent_job_title": "Engineer",
            "education": "B.Sc in Computer Science",
            "certifications": [],
            "companies_worked": ["Acme"]
        }))
        .unwrap();

        let fields = resume.fields().expect("structured");
        assert_eq!(fields.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(resume.skills(), ["Python", "SQL"]);
        assert_eq!(resume.total_experience(), "2 years 3 months");
        assert_eq!(fields.companies_worked.as_deref(), Some(&["Acme".to_string()][..]));
    }

    #[test]
    fn test_decode_raw_fallback() {
        let resume: StructuredResume =
            serde_json::from_value(json!({ "raw": "Sorry, I cannot parse this" })).unwrap();

        assert!(resume.is_raw());
        assert!(resume.skills().is_empty());
        assert_eq!(resume.total_experience(), "0");
        assert_eq!(resume.education(), "");
    }

    #[test]
    fn test_raw_key_with_other_fields_is_structured() {
        let resume = StructuredResume::from(json!({ "raw": "x", "skills": ["Go"] }));

        assert!(!resume.is_raw());
        assert_eq!(resume.skills(), ["Go"]);
        assert_eq!(resume.fields().unwrap().extra.get("raw"), Some(&json!("x")));
    }

    #[test]
    fn test_mistyped_fields_degrade_to_absent() {
        let resume = StructuredResume::from(json!({
            "skills": "Python, SQL",
            "education": 42,
            "total_experience": null,
            "certifications": ["AWS", 7, null]
        }));

        assert!(resume.skills().is_empty());
        assert_eq!(resume.education(), "");
        assert_eq!(resume.total_experience(), "0");
        assert_eq!(
            resume.fields().unwrap().certifications.as_deref(),
            Some(&["AWS".to_string()][..])
        );
    }

    #[test]
    fn test_non_object_values_are_empty() {
        for value in [json!(null), json!("text"), json!([1, 2]), json!(3)] {
            assert_eq!(StructuredResume::from(value), StructuredResume::default());
        }
    }

    #[test]
    fn test_serialize_keeps_original_shape() {
        let raw = StructuredResume::raw("plain output");
        assert_eq!(Value::from(&raw), json!({ "raw": "plain output" }));

        let edited = StructuredResume::from(json!({ "name": "Bo", "linkedin": "bo-dev" }));
        assert_eq!(Value::from(&edited), json!({ "name": "Bo", "linkedin": "bo-dev" }));
    }
}
