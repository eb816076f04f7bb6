//! In-memory family tree store.
//!
//! [`FamilyTree`] owns a [`Document`] plus an id index over its people.
//! People and relationships are append-only; referential integrity is checked
//! when a relationship is recorded, never afterwards. A document loaded from
//! disk is trusted as-is, so lookups by id can miss and callers fall back to
//! [`FamilyTree::name_or_id`].

mod example;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::Utc;

pub use crate::error::{Result, TreeError};
use crate::models::*;

/// Base id for names with no alphanumeric characters.
const FALLBACK_ID: &str = "person";

#[derive(Debug, Clone)]
pub struct FamilyTree {
    doc: Document,
    /// Person id -> position in `doc.people`. Derived, rebuilt after bulk loads.
    index: HashMap<String, usize>,
}

impl FamilyTree {
    pub fn new() -> Self {
        Self::from_document(Document::new())
    }

    pub fn from_document(doc: Document) -> Self {
        let mut tree = Self {
            doc,
            index: HashMap::new(),
        };
        tree.rebuild_index();
        tree
    }

    fn rebuild_index(&mut self) {
        // Duplicate ids in a hand-edited file resolve to the last entry.
        self.index = self
            .doc
            .people
            .iter()
            .enumerate()
            .map(|(pos, person)| (person.id.clone(), pos))
            .collect();
    }

    fn touch(&mut self) {
        self.doc.meta.modified = Utc::now();
    }

    fn require(&self, id: &str) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(TreeError::Reference(id.to_string()))
        }
    }

    // ============================================================
    // Queries
    // ============================================================

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    pub fn meta(&self) -> &Meta {
        &self.doc.meta
    }

    pub fn people(&self) -> &[Person] {
        &self.doc.people
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.doc.relationships
    }

    pub fn is_empty(&self) -> bool {
        self.doc.people.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.index.get(id).map(|&pos| &self.doc.people[pos])
    }

    /// The person's name, or the id itself when nobody has that id.
    pub fn name_or_id<'a>(&'a self, id: &'a str) -> &'a str {
        self.person(id).map_or(id, |p| p.name.as_str())
    }

    /// The root person, if one is set and still present.
    pub fn root(&self) -> Option<&Person> {
        self.doc
            .meta
            .root_person_id
            .as_deref()
            .and_then(|id| self.person(id))
    }

    /// Derive an id from `name` that is not yet taken.
    ///
    /// The name is lowercased, spaces become underscores, and anything that is
    /// not alphanumeric or an underscore is dropped. Taken ids get the
    /// smallest free `_N` suffix. Does not reserve the id.
    pub fn generate_id(&self, name: &str) -> String {
        let base: String = name
            .to_lowercase()
            .replace(' ', "_")
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_')
            .collect();
        let base = if base.is_empty() {
            FALLBACK_ID.to_string()
        } else {
            base
        };

        if !self.contains(&base) {
            return base;
        }

        let mut suffix = 1u32;
        loop {
            let candidate = format!("{base}_{suffix}");
            if !self.contains(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }

    // ============================================================
    // Mutations
    // ============================================================

    pub fn add_person(&mut self, input: NewPerson) -> Result<&Person> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(TreeError::validation("Name is required"));
        }

        let custom_id = input
            .id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty());
        let id = match custom_id {
            Some(id) if self.contains(id) => {
                return Err(TreeError::Validation(format!("Id `{id}` is already taken")));
            }
            Some(id) => id.to_string(),
            None => self.generate_id(&name),
        };

        let aliases = input
            .aliases
            .into_iter()
            .map(|alias| alias.trim().to_string())
            .filter(|alias| !alias.is_empty())
            .collect();

        self.doc.people.push(Person {
            id: id.clone(),
            name,
            gender: input.gender,
            aliases,
            birth_year: input.birth_year,
            death_year: input.death_year,
            notes: input.notes.filter(|n| !n.trim().is_empty()),
        });
        let pos = self.doc.people.len() - 1;
        self.index.insert(id.clone(), pos);

        if input.set_as_root && pos == 0 {
            self.doc.meta.root_person_id = Some(id.clone());
        }
        self.touch();

        tracing::debug!(id = %id, "Added person");
        Ok(&self.doc.people[pos])
    }

    /// Record a spouse pair. Repeated pairs are kept; remarriage is valid data.
    pub fn add_spouse(&mut self, input: NewSpouse) -> Result<&Relationship> {
        self.require(&input.first)?;
        self.require(&input.second)?;

        if self.doc.people.len() < 2 {
            return Err(TreeError::validation(
                "At least two people are needed to create a relationship",
            ));
        }
        if input.first == input.second {
            return Err(TreeError::validation("A person cannot be their own spouse"));
        }

        tracing::debug!(first = %input.first, second = %input.second, "Added spouse relationship");
        self.push_relationship(Relationship::Spouse(Spouse {
            people: [input.first, input.second],
            start_year: input.start_year,
            end_year: input.end_year,
            notes: input.notes.filter(|n| !n.trim().is_empty()),
        }))
    }

    /// Record a parent-child link. Cycles through longer chains are not detected.
    pub fn add_parent_child(&mut self, input: NewParentChild) -> Result<&Relationship> {
        self.require(&input.parent_id)?;
        self.require(&input.child_id)?;

        if input.parent_id == input.child_id {
            return Err(TreeError::validation("A person cannot be their own parent"));
        }

        tracing::debug!(parent = %input.parent_id, child = %input.child_id, "Added parent-child relationship");
        self.push_relationship(Relationship::ParentChild(ParentChild {
            parent_id: input.parent_id,
            child_id: input.child_id,
            biological: input.biological,
            notes: input.notes.filter(|n| !n.trim().is_empty()),
        }))
    }

    fn push_relationship(&mut self, relationship: Relationship) -> Result<&Relationship> {
        self.doc.relationships.push(relationship);
        self.touch();
        Ok(&self.doc.relationships[self.doc.relationships.len() - 1])
    }

    pub fn set_root(&mut self, id: &str) -> Result<()> {
        self.require(id)?;
        self.doc.meta.root_person_id = Some(id.to_string());
        self.touch();
        Ok(())
    }

    /// Apply a metadata edit. Blank strings keep the current value. Nothing
    /// changes if the new root does not exist.
    pub fn update_meta(&mut self, update: MetaUpdate) -> Result<&Meta> {
        let non_blank = |s: Option<String>| s.filter(|s| !s.trim().is_empty());
        let title = non_blank(update.title);
        let notes = non_blank(update.notes);
        let root = non_blank(update.root_person_id);

        if let Some(id) = &root {
            self.require(id)?;
        }

        let meta = &mut self.doc.meta;
        if let Some(title) = title {
            meta.title = title.trim().to_string();
        }
        if let Some(notes) = notes {
            meta.notes = Some(notes);
        }
        if let Some(root) = root {
            meta.root_person_id = Some(root);
        }
        self.touch();
        Ok(&self.doc.meta)
    }

    /// Discard everything and start over with an empty document.
    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::debug!("Reset family tree");
    }

    // ============================================================
    // Serialization
    // ============================================================

    /// The document as indented JSON. Absent optional fields are written as `null`.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&self.doc)?)
    }

    /// Replace the whole state with a parsed document. On error nothing changes.
    pub fn load_json(&mut self, bytes: &[u8]) -> Result<()> {
        self.doc = deserialize(bytes)?;
        self.rebuild_index();
        tracing::debug!(
            people = self.doc.people.len(),
            relationships = self.doc.relationships.len(),
            "Loaded family tree"
        );
        Ok(())
    }

    /// Read a document from `path` (`.json` appended if missing) and replace
    /// the in-memory tree with it. Returns the path actually read.
    pub fn import(&mut self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = with_json_extension(path.as_ref());
        let bytes = std::fs::read(&path)?;
        self.load_json(&bytes)?;
        Ok(path)
    }

    /// Stamp `modified` and write the tree to `path` (`.json` appended if
    /// missing). Refuses an empty tree. Returns the path actually written.
    pub fn export(&mut self, path: impl AsRef<Path>) -> Result<PathBuf> {
        if self.is_empty() {
            return Err(TreeError::validation("No data to export"));
        }
        let path = with_json_extension(path.as_ref());
        self.touch();
        self.write_to(&path)?;
        Ok(path)
    }

    /// Write the tree to `path` as-is.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.serialize()?)?;
        tracing::debug!(path = %path.display(), "Wrote family tree");
        Ok(())
    }
}

impl Default for FamilyTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a document.
///
/// Strict on structure: the top level must be an object with `people` and
/// `relationships` arrays. Lenient on metadata: a missing `meta` or missing
/// timestamps are filled with defaults.
pub fn deserialize(bytes: &[u8]) -> Result<Document> {
    Ok(serde_json::from_slice(bytes)?)
}

/// `path` with `.json` appended unless it already ends in `.json`.
pub fn with_json_extension(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == "json") {
        return path.to_path_buf();
    }
    let mut raw = path.as_os_str().to_os_string();
    raw.push(".json");
    PathBuf::from(raw)
}
