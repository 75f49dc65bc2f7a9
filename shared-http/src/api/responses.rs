use serde::{Deserialize, Deserializer, Serialize};

/// A previously saved resume as returned by the resume service.
///
/// Decoding is lenient field by field so one odd record never fails the
/// whole list: nulls become blanks, numbers are kept as their text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawResume")]
pub struct Resume {
    /// Backend document id, used as the display key only
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub skills: Vec<String>,
    /// Timestamp as the server sent it; epoch milliseconds arrive as digits
    pub saved_at: String,
    pub last_updated: String,
}

/// Wire shape of [`Resume`]. `_id` wins over `id` when both are present.
#[derive(Deserialize)]
struct RawResume {
    #[serde(rename = "_id", default, deserialize_with = "lenient_text")]
    backend_id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    email: String,
    #[serde(default, deserialize_with = "lenient_text")]
    phone: String,
    #[serde(default, deserialize_with = "lenient_text")]
    location: String,
    #[serde(default, deserialize_with = "lenient_text")]
    summary: String,
    #[serde(default, deserialize_with = "lenient_list")]
    skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    saved_at: String,
    #[serde(default, deserialize_with = "lenient_text")]
    last_updated: String,
}

impl From<RawResume> for Resume {
    fn from(raw: RawResume) -> Self {
        Self {
            id: if raw.backend_id.is_empty() {
                raw.id
            } else {
                raw.backend_id
            },
            name: raw.name,
            email: raw.email,
            phone: raw.phone,
            location: raw.location,
            summary: raw.summary,
            skills: raw.skills,
            saved_at: raw.saved_at,
            last_updated: raw.last_updated,
        }
    }
}

/// Identity cached on the client after sign-in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// Response body for the saved resumes endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedResumesResponse {
    #[serde(default)]
    pub resumes: Option<Vec<Resume>>,
}

// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(alias = "detail", alias = "message")]
    pub error: String,
}

/// Any JSON scalar a text field may arrive as.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(text) => text,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                (f as i64).to_string()
            }
            Scalar::Float(f) => f.to_string(),
            Scalar::Flag(flag) => flag.to_string(),
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_text)
        .unwrap_or_default())
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Option<Scalar>>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .map(Scalar::into_text)
        .collect())
}
