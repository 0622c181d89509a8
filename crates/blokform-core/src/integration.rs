use crate::value::EmbeddedValue;
use blokform_config::IntegrationConfig;
use serde::Serialize;

/// Plugin backing the catalog product browser.
pub const CATALOG_PLUGIN: &str = "sb-commercetools";

/// Plugin backing the catalog category picker.
pub const CATEGORY_PLUGIN: &str = "sb-commercetools-categories";

/// Plugin backing the SEO metatag editor.
pub const SEO_PLUGIN: &str = "seo-metatags";

///
/// PluginOption
///
/// One `name`/`value` pair handed to a custom field plugin.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PluginOption {
    pub name: String,
    pub value: EmbeddedValue,
}

impl PluginOption {
    #[must_use]
    pub fn new(name: impl Into<String>, value: EmbeddedValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Option whose value is always a quoted literal.
    #[must_use]
    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, EmbeddedValue::literal(value))
    }

    fn configured(name: &str, raw: &str) -> Self {
        Self::new(name, EmbeddedValue::classify(raw))
    }
}

/// Connection options for the catalog product browser.
#[must_use]
pub fn connection_options(config: &IntegrationConfig) -> Vec<PluginOption> {
    vec![
        PluginOption::configured("endpoint", &config.endpoint),
        PluginOption::configured("clientId", &config.client_id),
        PluginOption::configured("clientSecret", &config.client_secret),
        PluginOption::configured("projectKey", &config.project_key),
        PluginOption::configured("locale", &config.locale),
    ]
}

/// Connection options for the catalog category picker.
#[must_use]
pub fn category_options(config: &IntegrationConfig) -> Vec<PluginOption> {
    vec![
        PluginOption::configured("project_key", &config.project_key),
        PluginOption::configured("client_id", &config.client_id),
        PluginOption::configured("client_secret", &config.client_secret),
        PluginOption::configured("api_url", &config.endpoint),
        PluginOption::configured("locale", &config.locale),
    ]
}

///
/// TESTS
///
