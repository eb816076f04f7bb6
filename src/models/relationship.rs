use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// An edge between two people, tagged by `type` in JSON.
///
/// Relationships hold plain id references. The ids were checked when the
/// relationship was recorded, but a loaded document may hold ids with no
/// matching person; readers must treat that as a lookup miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Relationship {
    Spouse(Spouse),
    ParentChild(ParentChild),
}

impl Relationship {
    /// The two person ids this relationship connects.
    pub fn person_ids(&self) -> [&str; 2] {
        match self {
            Self::Spouse(s) => [&s.people[0], &s.people[1]],
            Self::ParentChild(pc) => [&pc.parent_id, &pc.child_id],
        }
    }

    pub fn involves(&self, id: &str) -> bool {
        self.person_ids().contains(&id)
    }
}

/// A marriage or partnership. The pair is unordered in meaning but stored in
/// the order it was entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spouse {
    pub people: [String; 2],
    #[serde(default)]
    pub start_year: Option<i32>,
    #[serde(default)]
    pub end_year: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentChild {
    pub parent_id: String,
    pub child_id: String,
    #[serde(default = "default_true")]
    pub biological: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Input for recording a spouse relationship.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSpouse {
    pub first: String,
    pub second: String,
    pub start_year: Option<i32>,
    /// Divorce or death year. `None` while ongoing.
    pub end_year: Option<i32>,
    pub notes: Option<String>,
}

impl NewSpouse {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            ..Self::default()
        }
    }
}

/// Input for recording a parent-child relationship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewParentChild {
    pub parent_id: String,
    pub child_id: String,
    #[serde(default = "default_true")]
    pub biological: bool,
    pub notes: Option<String>,
}

impl NewParentChild {
    /// A biological link with no notes.
    pub fn new(parent_id: impl Into<String>, child_id: impl Into<String>) -> Self {
        Self {
            parent_id: parent_id.into(),
            child_id: child_id.into(),
            biological: true,
            notes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn spouse_serializes_with_type_tag() {
        let rel = Relationship::Spouse(Spouse {
            people: ["ramesh".to_string(), "aneeta".to_string()],
            start_year: Some(1985),
            end_year: None,
            notes: None,
        });

        assert_eq!(
            serde_json::to_value(&rel).unwrap(),
            json!({
                "type": "spouse",
                "people": ["ramesh", "aneeta"],
                "startYear": 1985,
                "endYear": null,
                "notes": null
            })
        );
    }

    #[test]
    fn parent_child_reads_camel_case_and_defaults_biological() {
        let rel: Relationship = serde_json::from_value(json!({
            "type": "parentChild",
            "parentId": "ramesh",
            "childId": "kartik"
        }))
        .unwrap();

        match rel {
            Relationship::ParentChild(pc) => {
                assert_eq!(pc.parent_id, "ramesh");
                assert_eq!(pc.child_id, "kartik");
                assert!(pc.biological);
            }
            Relationship::Spouse(_) => panic!("expected parentChild"),
        }
    }

    #[test]
    fn unknown_type_is_rejected() {
        let result = serde_json::from_value::<Relationship>(json!({
            "type": "sibling",
            "people": ["a", "b"]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn involves_checks_both_ends() {
        let rel = Relationship::ParentChild(ParentChild {
            parent_id: "a".to_string(),
            child_id: "b".to_string(),
            biological: false,
            notes: None,
        });
        assert!(rel.involves("a"));
        assert!(rel.involves("b"));
        assert!(!rel.involves("c"));
    }
}
