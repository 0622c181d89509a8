//! Naming conventions shared by component names, whitelists and group keys.

use convert_case::{Case, Casing};

/// Component technical name for a schema type (`BlogPost` -> `blog_post`).
#[must_use]
pub fn component_name(type_name: &str) -> String {
    type_name.to_case(Case::Snake)
}

/// Human readable label for a field or enum symbol (`heroImage` -> `Hero Image`).
#[must_use]
pub fn display_label(ident: &str) -> String {
    ident.to_case(Case::Title)
}

/// Schema key of a synthesized section or tab (`("tab", "SEO Data")` -> `tab_seo_data`).
#[must_use]
pub fn group_key(prefix: &str, name: &str) -> String {
    format!("{prefix} {name}").to_case(Case::Snake)
}

// icon symbols can't carry '@', so this one is spelled out in the schema
const ICON_AT: &str = "block_at";

/// Icon names are schema enum symbols; the CMS expects kebab-style names.
#[must_use]
pub fn icon_name(symbol: &str) -> String {
    if symbol == ICON_AT {
        return "block-@".to_string();
    }

    symbol.replace('_', "-")
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_names_are_snake_case() {
        assert_eq!(component_name("BlogPost"), "blog_post");
        assert_eq!(component_name("Hero"), "hero");
    }

    #[test]
    fn labels_are_title_case() {
        assert_eq!(display_label("heroImage"), "Hero Image");
        assert_eq!(display_label("DARK_RED"), "Dark Red");
        assert_eq!(display_label("Red"), "Red");
    }

    #[test]
    fn group_keys_join_prefix_and_name() {
        assert_eq!(group_key("section", "Basics"), "section_basics");
        assert_eq!(group_key("tab", "SEO Data"), "tab_seo_data");
    }

    #[test]
    fn icons_swap_underscores() {
        assert_eq!(icon_name("block_text"), "block-text");
        assert_eq!(icon_name("block_at"), "block-@");
        assert_eq!(icon_name("block"), "block");
    }
}
