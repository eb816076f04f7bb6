//! Plain-text views of a family tree.
//!
//! Relationships and the root are looked up by id. A missing person is shown
//! by their raw id (or `Unknown` for the root) instead of failing, since a
//! loaded document may reference people that are not in it.

use crate::models::{timestamp, ParentChild, Person, Relationship, Spouse};
use crate::store::FamilyTree;

const ROOT: char = '★';
const SPOUSE: char = '⚭';
const PARENT_CHILD: char = '↳';

/// Label for a root id that names nobody.
const UNKNOWN: &str = "Unknown";

/// One line describing a person: `id: name (aliases) b.YYYY d.YYYY`, with a
/// marker when they are the root.
pub fn person_line(tree: &FamilyTree, person: &Person) -> String {
    let mut line = format!("{}: {}", person.id, person.name);
    if !person.aliases.is_empty() {
        line.push_str(&format!(" ({})", person.aliases.join(", ")));
    }
    if let Some(year) = person.birth_year {
        line.push_str(&format!(" b.{year}"));
    }
    if let Some(year) = person.death_year {
        line.push_str(&format!(" d.{year}"));
    }
    if tree.meta().root_person_id.as_deref() == Some(person.id.as_str()) {
        line.push(' ');
        line.push(ROOT);
    }
    line
}

/// One line describing a relationship, with names resolved where possible.
pub fn relationship_line(tree: &FamilyTree, relationship: &Relationship) -> String {
    match relationship {
        Relationship::Spouse(Spouse {
            people,
            start_year,
            end_year,
            ..
        }) => format!(
            "{SPOUSE} {} & {}{}",
            tree.name_or_id(&people[0]),
            tree.name_or_id(&people[1]),
            year_range(*start_year, *end_year)
        ),
        Relationship::ParentChild(ParentChild {
            parent_id,
            child_id,
            biological,
            ..
        }) => format!(
            "{PARENT_CHILD} {} -> {}{}",
            tree.name_or_id(parent_id),
            tree.name_or_id(child_id),
            if *biological { " (biological)" } else { "" }
        ),
    }
}

fn year_range(start: Option<i32>, end: Option<i32>) -> String {
    match (start, end) {
        (None, None) => String::new(),
        (Some(start), None) => format!(" ({start}-present)"),
        (start, Some(end)) => {
            let start = start.map_or_else(|| "?".to_string(), |y| y.to_string());
            format!(" ({start}-{end})")
        }
    }
}

/// Every person, one indented line each.
pub fn render_people(tree: &FamilyTree) -> String {
    let mut output = String::new();
    for person in tree.people() {
        output.push_str("  ");
        output.push_str(&person_line(tree, person));
        output.push('\n');
    }
    output
}

/// Header, people and relationships.
///
/// Example output:
/// ```text
/// Title: Family Tree
/// Root: Kartik Hakim (kartik)
/// Created: 2024-03-01T08:00:00Z
/// Modified: 2024-03-01T08:05:00Z
///
/// People: 2
///   kartik: Kartik Hakim (Navreh) ★
///   ramesh: Ramesh Hakim
///
/// Relationships: 1
///   ↳ Ramesh Hakim -> Kartik Hakim (biological)
/// ```
pub fn render_summary(tree: &FamilyTree) -> String {
    let meta = tree.meta();
    let mut output = format!("Title: {}\n", meta.title);

    if let Some(root_id) = meta.root_person_id.as_deref() {
        let name = tree.person(root_id).map_or(UNKNOWN, |p| p.name.as_str());
        output.push_str(&format!("Root: {name} ({root_id})\n"));
    }
    if let Some(notes) = meta.notes.as_deref().filter(|n| !n.is_empty()) {
        output.push_str(&format!("Notes: {notes}\n"));
    }
    output.push_str(&format!("Created: {}\n", timestamp::format(&meta.created)));
    output.push_str(&format!("Modified: {}\n", timestamp::format(&meta.modified)));

    output.push_str(&format!("\nPeople: {}\n", tree.people().len()));
    output.push_str(&render_people(tree));

    output.push_str(&format!("\nRelationships: {}\n", tree.relationships().len()));
    for relationship in tree.relationships() {
        output.push_str("  ");
        output.push_str(&relationship_line(tree, relationship));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Document, NewParentChild, NewPerson, NewSpouse};

    fn make_tree() -> FamilyTree {
        let mut tree = FamilyTree::new();
        let mut kartik = NewPerson::named("Kartik Hakim");
        kartik.id = Some("kartik".to_string());
        kartik.aliases = vec!["Navreh".to_string()];
        kartik.set_as_root = true;
        tree.add_person(kartik).unwrap();

        let mut ramesh = NewPerson::named("Ramesh Hakim");
        ramesh.id = Some("ramesh".to_string());
        ramesh.birth_year = Some(1955);
        tree.add_person(ramesh).unwrap();
        tree
    }

    #[test]
    fn test_person_line_with_root_marker() {
        let tree = make_tree();
        let kartik = tree.person("kartik").unwrap();
        assert_eq!(person_line(&tree, kartik), "kartik: Kartik Hakim (Navreh) ★");

        let ramesh = tree.person("ramesh").unwrap();
        assert_eq!(person_line(&tree, ramesh), "ramesh: Ramesh Hakim b.1955");
    }

    #[test]
    fn test_spouse_year_ranges() {
        let mut tree = make_tree();
        let mut spouse = NewSpouse::new("ramesh", "kartik");
        spouse.start_year = Some(1980);
        tree.add_spouse(spouse).unwrap();

        let mut ended = NewSpouse::new("ramesh", "kartik");
        ended.end_year = Some(1999);
        tree.add_spouse(ended).unwrap();

        tree.add_spouse(NewSpouse::new("ramesh", "kartik")).unwrap();

        let lines: Vec<_> = tree
            .relationships()
            .iter()
            .map(|r| relationship_line(&tree, r))
            .collect();
        assert_eq!(
            lines,
            [
                "⚭ Ramesh Hakim & Kartik Hakim (1980-present)",
                "⚭ Ramesh Hakim & Kartik Hakim (?-1999)",
                "⚭ Ramesh Hakim & Kartik Hakim",
            ]
        );
    }

    #[test]
    fn test_parent_child_line() {
        let mut tree = make_tree();
        tree.add_parent_child(NewParentChild::new("ramesh", "kartik")).unwrap();
        let mut adopted = NewParentChild::new("kartik", "ramesh");
        adopted.biological = false;
        tree.add_parent_child(adopted).unwrap();

        assert_eq!(
            relationship_line(&tree, &tree.relationships()[0]),
            "↳ Ramesh Hakim -> Kartik Hakim (biological)"
        );
        assert_eq!(
            relationship_line(&tree, &tree.relationships()[1]),
            "↳ Kartik Hakim -> Ramesh Hakim"
        );
    }

    #[test]
    fn test_dangling_ids_fall_back() {
        let mut doc = Document::new();
        doc.meta.root_person_id = Some("ghost".to_string());
        doc.relationships.push(Relationship::ParentChild(ParentChild {
            parent_id: "ghost".to_string(),
            child_id: "phantom".to_string(),
            biological: true,
            notes: None,
        }));
        let tree = FamilyTree::from_document(doc);

        let output = render_summary(&tree);
        assert!(output.contains("Root: Unknown (ghost)\n"));
        assert!(output.contains("  ↳ ghost -> phantom (biological)\n"));
        assert!(output.contains("People: 0\n"));
    }
}
