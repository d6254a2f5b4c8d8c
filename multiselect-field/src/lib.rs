//! Multiselect custom field for the CMS admin panel.
//!
//! Lets an editor pick zero or more values from an administrator-defined
//! list and stores the selection as one delimited string column.
//!
//! - [`FieldAttribute`] / [`ResolvedOptions`] — per-field configuration with defaults
//! - [`Multiselect`] — the input component: view model plus toggle handling
//! - [`FieldHost`] — the narrow seam to the host's form state
//! - [`register_server`] / [`register_admin`] — registration descriptors
//! - [`TranslationLoader`] — best-effort locale bundles
//!
//! The string encoding itself lives in `multiselect-codec`.

mod error;
mod host;
mod i18n;
mod multiselect;
mod options;
mod register;

pub use error::{FieldError, Result};
pub use host::{ChangeEvent, ChangeTarget, FieldHost, FormState};
pub use i18n::{LocaleTranslations, TranslationLoader, prefix_key};
pub use multiselect::{CheckboxView, FieldBody, FieldProps, FieldView, Multiselect};
pub use options::{AttributeOptions, FieldAttribute, ResolvedOptions};
pub use register::{
    AdminRegistration, CustomField, CustomFieldRegistry, IntlMessage, OptionInput,
    OptionInputType, OptionSection, OptionSections, PluginRegistration, ServerFieldRegistration,
    StorageType, register_admin, register_server,
};

pub use multiselect_codec::{Delimiter, Selection};

/// Identifier shared by the plugin and its custom field.
pub const PLUGIN_ID: &str = "multiselect-field";

/// Name under which the custom field is registered.
pub const FIELD_NAME: &str = "multiselect-field";
