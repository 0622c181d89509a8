//! Section and tab synthesis from per-field `section` / `tab` tags.

use crate::{
    field::{ComponentField, GroupField},
    naming::group_key,
};
use blokform_schema::prelude::*;
use indexmap::IndexMap;
use tracing::debug;

const SECTION: &str = "section";
const TAB: &str = "tab";

/// Synthesize the section and tab fields of a type, numbered from `start`.
///
/// Sections come first in discovery order, then tabs. A field that is both
/// sectioned and tabbed joins its tab through the section key, never directly.
#[must_use]
pub fn build_groups(def: &TypeDefinition, start: u32) -> Vec<(String, ComponentField)> {
    let mut sections: IndexMap<&str, Vec<String>> = IndexMap::new();
    let mut tabs: IndexMap<&str, Vec<String>> = IndexMap::new();

    for field in def.fields() {
        let section = field.directive_text(DirectiveName::Field, Arg::Section);

        if let Some(section) = section {
            sections
                .entry(section)
                .or_default()
                .push(field.name.clone());
        }

        if let Some(tab) = field.directive_text(DirectiveName::Field, Arg::Tab) {
            let key = section.map_or_else(|| field.name.clone(), |s| group_key(SECTION, s));
            let keys = tabs.entry(tab).or_default();

            if !keys.contains(&key) {
                keys.push(key);
            }
        }
    }

    let sections = sections
        .into_iter()
        .map(|(name, keys)| (SECTION, name, keys));
    let tabs = tabs.into_iter().map(|(name, keys)| (TAB, name, keys));

    sections
        .chain(tabs)
        .zip(start..)
        .map(|((prefix, name, keys), position)| {
            debug!(kind = prefix, group = name, members = keys.len(), position, "synthesized group");

            let group = GroupField {
                position,
                display_name: name.to_string(),
                keys,
            };
            let field = if prefix == SECTION {
                ComponentField::Section(group)
            } else {
                ComponentField::Tab(group)
            };

            (group_key(prefix, name), field)
        })
        .collect()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;

    fn tagged(name: &str, section: Option<&str>, tab: Option<&str>) -> FieldDefinition {
        let mut directive = Directive::new("field");
        if let Some(section) = section {
            directive = directive.arg("section", section);
        }
        if let Some(tab) = tab {
            directive = directive.arg("tab", tab);
        }

        FieldDefinition::new(name, TypeRef::named("String")).directive(directive)
    }

    #[test]
    fn no_tags_no_groups() {
        let def = TypeDefinition::object("Page", vec![tagged("title", None, None)]);

        assert!(build_groups(&def, 1).is_empty());
    }

    #[test]
    fn sections_collect_members_in_declaration_order() {
        let def = TypeDefinition::object(
            "Page",
            vec![
                tagged("a", Some("Basics"), None),
                tagged("b", Some("Media"), None),
                tagged("c", Some("Basics"), None),
            ],
        );

        let groups = build_groups(&def, 3);
        let keys: Vec<_> = groups.iter().map(|(k, _)| k.as_str()).collect();

        assert_eq!(keys, vec!["section_basics", "section_media"]);
        assert_eq!(groups[0].1.keys().unwrap(), ["a", "c"]);
        assert_eq!(groups[0].1.position(), 3);
        assert_eq!(groups[1].1.position(), 4);
    }

    #[test]
    fn tab_references_section_instead_of_its_members() {
        let def = TypeDefinition::object(
            "Page",
            vec![
                tagged("title", Some("Basics"), Some("Info")),
                tagged("intro", None, Some("Info")),
                tagged("slug", Some("Basics"), Some("Info")),
            ],
        );

        let groups = build_groups(&def, 3);

        assert_eq!(groups.len(), 2);
        let (key, tab) = &groups[1];
        assert_eq!(key, "tab_info");
        assert_eq!(tab.kind(), FieldKind::Tab);
        assert_eq!(tab.keys().unwrap(), ["section_basics", "intro"]);
        assert_eq!(tab.position(), 4);
    }

    #[test]
    fn tabs_follow_sections_in_numbering() {
        let def = TypeDefinition::object(
            "Page",
            vec![
                tagged("a", None, Some("Second")),
                tagged("b", Some("One"), None),
                tagged("c", None, Some("First")),
            ],
        );

        let groups = build_groups(&def, 10);
        let order: Vec<_> = groups
            .iter()
            .map(|(k, f)| (k.as_str(), f.position()))
            .collect();

        assert_eq!(
            order,
            vec![("section_one", 10), ("tab_second", 11), ("tab_first", 12)]
        );
    }
}
