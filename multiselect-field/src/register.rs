//! Registration descriptors for the server and the admin panel.
//!
//! The host owns the registries. This module only describes what to
//! register and hands it over through [`CustomFieldRegistry`].

use crate::i18n::prefix_key;
use crate::{FIELD_NAME, PLUGIN_ID};
use multiselect_codec::Delimiter;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Column type the field is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    String,
}

/// Server-side declaration: field name, owning plugin, storage type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerFieldRegistration {
    pub name: String,
    pub plugin: String,
    #[serde(rename = "type")]
    pub storage_type: StorageType,
}

/// A translatable message: a key plus the text used when no translation exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntlMessage {
    pub id: String,
    pub default_message: String,
}

impl IntlMessage {
    pub fn new(id: impl Into<String>, default_message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            default_message: default_message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionInputType {
    /// Multi-line input, one entry per line, stored as a list.
    TextareaEnum,
    Text,
    Checkbox,
}

/// One input shown in the schema designer when configuring the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionInput {
    pub name: String,
    #[serde(rename = "type")]
    pub input_type: OptionInputType,
    pub intl_label: IntlMessage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<IntlMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<IntlMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSection {
    pub section_title: Option<IntlMessage>,
    pub items: Vec<OptionInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSections {
    pub base: Vec<OptionSection>,
    pub advanced: Vec<OptionSection>,
}

impl OptionSections {
    pub fn inputs(&self) -> impl Iterator<Item = &OptionInput> {
        self.base
            .iter()
            .chain(self.advanced.iter())
            .flat_map(|section| section.items.iter())
    }
}

/// Admin-side declaration of the custom field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomField {
    pub name: String,
    pub plugin_id: String,
    #[serde(rename = "type")]
    pub storage_type: StorageType,
    pub intl_label: IntlMessage,
    pub intl_description: IntlMessage,
    pub options: OptionSections,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginRegistration {
    pub id: String,
    pub name: String,
    pub is_ready: bool,
}

/// Everything the admin panel registers at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRegistration {
    pub custom_field: CustomField,
    pub plugin: PluginRegistration,
}

/// Receives registrations from the plugin. Implemented by the host.
///
/// Each method defaults to ignoring its input, so a server-only host only
/// implements `register_server_field`.
pub trait CustomFieldRegistry {
    fn register_server_field(&mut self, field: ServerFieldRegistration) {
        let _ = field;
    }

    fn register_admin_field(&mut self, field: CustomField) {
        let _ = field;
    }

    fn register_plugin(&mut self, plugin: PluginRegistration) {
        let _ = plugin;
    }
}

impl ServerFieldRegistration {
    pub fn register_with<R: CustomFieldRegistry + ?Sized>(self, registry: &mut R) {
        info!(field = %self.name, plugin = %self.plugin, "Registering custom field on server");
        registry.register_server_field(self);
    }
}

impl AdminRegistration {
    pub fn register_with<R: CustomFieldRegistry + ?Sized>(self, registry: &mut R) {
        info!(field = %self.custom_field.name, plugin = %self.plugin.id, "Registering custom field in admin");
        registry.register_admin_field(self.custom_field);
        registry.register_plugin(self.plugin);
    }
}

pub fn register_server() -> ServerFieldRegistration {
    ServerFieldRegistration {
        name: FIELD_NAME.to_string(),
        plugin: PLUGIN_ID.to_string(),
        storage_type: StorageType::String,
    }
}

pub fn register_admin() -> AdminRegistration {
    AdminRegistration {
        custom_field: CustomField {
            name: FIELD_NAME.to_string(),
            plugin_id: PLUGIN_ID.to_string(),
            storage_type: StorageType::String,
            intl_label: IntlMessage::new(prefix_key("label"), "Multiselect"),
            intl_description: IntlMessage::new(
                prefix_key("description"),
                "A custom field that allows users to select multiple options from a predefined list.",
            ),
            options: OptionSections {
                base: vec![OptionSection {
                    section_title: None,
                    items: vec![available_options_input(), delimiter_input()],
                }],
                advanced: vec![OptionSection {
                    section_title: Some(IntlMessage::new("global.settings", "Settings")),
                    items: vec![required_input(), private_input()],
                }],
            },
        },
        plugin: PluginRegistration {
            id: PLUGIN_ID.to_string(),
            name: PLUGIN_ID.to_string(),
            is_ready: false,
        },
    }
}

fn available_options_input() -> OptionInput {
    OptionInput {
        name: "options.availableOptions".into(),
        input_type: OptionInputType::TextareaEnum,
        intl_label: IntlMessage::new(
            prefix_key("options.availableOptions.label"),
            "Available Options",
        ),
        description: Some(IntlMessage::new(
            prefix_key("options.availableOptions.description"),
            "One option per line.",
        )),
        placeholder: Some(IntlMessage::new(
            prefix_key("options.availableOptions.placeholder"),
            "Option 1\nOption 2\nOption 3",
        )),
        default_value: None,
    }
}

fn delimiter_input() -> OptionInput {
    OptionInput {
        name: "options.delimiter".into(),
        input_type: OptionInputType::Text,
        intl_label: IntlMessage::new(prefix_key("options.delimiter.label"), "Delimiter"),
        description: Some(IntlMessage::new(
            prefix_key("options.delimiter.description"),
            "The delimiter to use when storing the selected options.",
        )),
        placeholder: Some(IntlMessage::new(
            prefix_key("options.delimiter.placeholder"),
            Delimiter::DEFAULT,
        )),
        default_value: Some(Delimiter::DEFAULT.to_string()),
    }
}

fn required_input() -> OptionInput {
    OptionInput {
        name: "required".into(),
        input_type: OptionInputType::Checkbox,
        intl_label: IntlMessage::new(
            "content-type-builder.form.attribute.item.requiredField",
            "Required field",
        ),
        description: Some(IntlMessage::new(
            "content-type-builder.form.attribute.item.requiredField.description",
            "You won't be able to create an entry if this field is empty",
        )),
        placeholder: None,
        default_value: None,
    }
}

fn private_input() -> OptionInput {
    OptionInput {
        name: "private".into(),
        input_type: OptionInputType::Checkbox,
        intl_label: IntlMessage::new(
            "content-type-builder.form.attribute.item.privateField",
            "Private field",
        ),
        description: Some(IntlMessage::new(
            "content-type-builder.form.attribute.item.privateField.description",
            "This field will not show up in the API response",
        )),
        placeholder: None,
        default_value: None,
    }
}
