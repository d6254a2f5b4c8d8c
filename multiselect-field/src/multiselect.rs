//! The multiselect input component.
//!
//! Renders one checkbox per available option and turns checkbox changes
//! into a new stored value for the host.

use crate::PLUGIN_ID;
use crate::host::{ChangeEvent, FieldHost};
use crate::i18n::prefix_key;
use crate::options::{FieldAttribute, ResolvedOptions};
use multiselect_codec::Selection;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Props the host passes to the input.
///
/// `attribute` and `value` drive behavior; everything else is passed
/// through to the rendered view or the change event unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldProps {
    pub name: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default)]
    pub attribute: FieldAttribute,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

fn default_kind() -> String {
    "string".to_string()
}

impl FieldProps {
    pub fn new(name: impl Into<String>, attribute: FieldAttribute) -> Self {
        Self {
            name: name.into(),
            kind: default_kind(),
            label: String::new(),
            hint: None,
            required: false,
            disabled: None,
            attribute,
            value: None,
        }
    }
}

/// Render output for one field instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub name: String,
    pub label: String,
    pub hint: Option<String>,
    pub required: bool,
    pub body: FieldBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FieldBody {
    /// No options configured; show the translated message instead.
    EmptyState { message_key: String },
    Checkboxes { items: Vec<CheckboxView> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckboxView {
    pub option: String,
    /// Display text: the option with its first letter uppercased.
    pub label: String,
    pub checked: bool,
    pub disabled: bool,
}

/// A multiselect field instance bound to its props.
#[derive(Debug, Clone)]
pub struct Multiselect {
    props: FieldProps,
    options: ResolvedOptions,
}

impl Multiselect {
    pub fn new(props: FieldProps) -> Self {
        let options = props.attribute.options.resolve();
        Self { props, options }
    }

    pub fn props(&self) -> &FieldProps {
        &self.props
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// The selection encoded in `props.value`.
    pub fn selection(&self) -> Selection {
        Selection::decode(self.props.value.as_deref(), &self.options.delimiter)
    }

    /// Replaces `props.value` with the host's current value.
    pub fn refresh<H: FieldHost + ?Sized>(&mut self, host: &H) {
        self.props.value = host.current_value(&self.props.name);
    }

    pub fn render(&self) -> FieldView {
        let body = if self.options.available_options.is_empty() {
            FieldBody::EmptyState {
                message_key: prefix_key("empty-state.text"),
            }
        } else {
            let selection = self.selection();
            let disabled = self.props.disabled.unwrap_or(false);
            FieldBody::Checkboxes {
                items: self
                    .options
                    .available_options
                    .iter()
                    .map(|option| CheckboxView {
                        option: option.clone(),
                        label: capitalize_first(option),
                        checked: selection.contains(option),
                        disabled,
                    })
                    .collect(),
            }
        };

        FieldView {
            name: self.props.name.clone(),
            label: self.props.label.clone(),
            hint: self.props.hint.clone(),
            required: self.props.required,
            body,
        }
    }

    /// Handles a checkbox change for `option` and emits the new value.
    ///
    /// The current value is read from `host` rather than from `props`, so
    /// successive toggles build on each other even if the view was not
    /// re-rendered in between. Returns the emitted value.
    pub fn on_checked_change<H: FieldHost + ?Sized>(
        &self,
        host: &mut H,
        option: &str,
        is_selected: bool,
    ) -> String {
        let current = host.current_value(&self.props.name);
        let selection = Selection::decode(current.as_deref(), &self.options.delimiter);
        let next = selection.toggled(&self.options.available_options, option, is_selected);
        let value = next.encode(&self.options.delimiter);

        debug!(
            plugin = PLUGIN_ID,
            field = %self.props.name,
            option,
            selected = is_selected,
            value = %value,
            "Multiselect value changed"
        );

        host.emit_change(ChangeEvent::new(
            self.props.name.clone(),
            value.clone(),
            self.props.kind.clone(),
        ));
        value
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
