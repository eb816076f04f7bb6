//! Sample family used by `ftree example` and in tests.

use super::{FamilyTree, Result};
use crate::models::{Gender, NewParentChild, NewPerson, NewSpouse};

const PEOPLE: &[(&str, &str, &str, &[&str])] = &[
    ("kartik", "Kartik Hakim", "M", &["Navreh"]),
    ("ramesh", "Ramesh Hakim", "M", &["kuku ji"]),
    ("aneeta", "Aneeta Sapru", "F", &["Anita Hakim", "Bunty"]),
    ("giridhari", "Giridhari Lal Hakim", "M", &[]),
    ("rani", "Rani Hakim", "F", &["JaiKishori Razdan"]),
    ("bhushan", "Bhushan Lal Sapru", "M", &[]),
    ("veena", "Veena Sapru", "F", &["RajKumari Raina"]),
];

const SPOUSES: &[(&str, &str)] = &[
    ("ramesh", "aneeta"),
    ("ramesh", "veena"),
    ("giridhari", "rani"),
];

const PARENTS: &[(&str, &str)] = &[
    ("ramesh", "kartik"),
    ("aneeta", "kartik"),
    ("giridhari", "ramesh"),
    ("rani", "ramesh"),
    ("bhushan", "aneeta"),
    ("veena", "aneeta"),
];

impl FamilyTree {
    /// Three generations rooted at `kartik`.
    pub fn example() -> Result<Self> {
        let mut tree = Self::new();

        for (id, name, gender, aliases) in PEOPLE {
            tree.add_person(NewPerson {
                name: name.to_string(),
                id: Some(id.to_string()),
                gender: Some(Gender::from(gender.to_string())),
                aliases: aliases.iter().map(|a| a.to_string()).collect(),
                set_as_root: true,
                ..NewPerson::default()
            })?;
        }
        for (first, second) in SPOUSES {
            tree.add_spouse(NewSpouse::new(*first, *second))?;
        }
        for (parent, child) in PARENTS {
            tree.add_parent_child(NewParentChild::new(*parent, *child))?;
        }

        Ok(tree)
    }
}
