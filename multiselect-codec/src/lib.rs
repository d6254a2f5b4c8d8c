//! Selection codec for the multiselect field.
//!
//! A multiselect value is stored as a single delimited string (`"A,C"`) but
//! edited as an ordered list of option identifiers. This crate owns the two
//! boundaries between those forms and the toggle that produces the next
//! selection:
//! - [`decode`] — stored string to [`Selection`]
//! - [`toggle`] — add or remove one option, then re-sort to canonical order
//! - [`encode`] — [`Selection`] back to the stored string
//!
//! Everything here is pure. Configuration (available options, delimiter) is
//! passed in explicitly by the caller.

mod delimiter;
mod selection;

pub use delimiter::Delimiter;
pub use selection::Selection;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building codec inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("delimiter must not be empty")]
    EmptyDelimiter,
}

/// Splits a stored value into its selected options.
///
/// An absent or empty value is an empty selection. Duplicates are kept.
pub fn decode(value: Option<&str>, delimiter: &Delimiter) -> Selection {
    Selection::decode(value, delimiter)
}

/// Adds (`include == true`) or removes `option`, then re-sorts the result to
/// follow `available_options`.
pub fn toggle<S: AsRef<str>>(
    current: &Selection,
    available_options: &[S],
    option: &str,
    include: bool,
) -> Selection {
    current.toggled(available_options, option, include)
}

/// Joins a selection into its stored form.
pub fn encode(selection: &Selection, delimiter: &Delimiter) -> String {
    selection.encode(delimiter)
}
