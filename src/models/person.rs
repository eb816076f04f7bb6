use serde::{Deserialize, Serialize};

/// One individual in the tree.
///
/// `id` is the sole cross-reference key used by relationships and by
/// `meta.rootPersonId`. Once assigned it never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Nicknames and alternate names (maiden names, spellings).
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub death_year: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Recorded gender of a person.
///
/// `"M"`, `"F"` and `"Other"` map to named variants; any other string is kept
/// verbatim so hand-edited files round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    Other,
    Custom(String),
}

impl Gender {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Other => "Other",
            Self::Custom(s) => s,
        }
    }

    /// Lenient parse for typed input: case-insensitive, accepts full words.
    /// Returns `None` for blank input.
    pub fn parse_input(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        let gender = match trimmed.to_lowercase().as_str() {
            "m" | "male" => Self::Male,
            "f" | "female" => Self::Female,
            "other" | "o" => Self::Other,
            _ => Self::Custom(trimmed.to_string()),
        };
        Some(gender)
    }
}

impl From<String> for Gender {
    fn from(s: String) -> Self {
        match s.as_str() {
            "M" => Self::Male,
            "F" => Self::Female,
            "Other" => Self::Other,
            _ => Self::Custom(s),
        }
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Custom(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

/// Input for adding a person.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPerson {
    /// Required. Rejected if blank after trimming.
    pub name: String,
    /// Explicit id. Generated from `name` when `None` or blank.
    pub id: Option<String>,
    pub gender: Option<Gender>,
    pub aliases: Vec<String>,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub notes: Option<String>,
    /// Designate this person as the root. Only honoured for the first person
    /// added to an empty document.
    #[serde(default)]
    pub set_as_root: bool,
}

impl NewPerson {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
