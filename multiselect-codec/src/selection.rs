//! Ordered list of selected option identifiers.

use crate::Delimiter;
use serde::{Deserialize, Serialize};

/// The options currently chosen for one field instance, in stored order.
///
/// Duplicates are allowed: a stored value may already contain them and
/// [`Selection::toggled`] does not filter them out when adding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(Vec<String>);

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parses a stored value. `None` and `""` both decode to an empty selection.
    pub fn decode(value: Option<&str>, delimiter: &Delimiter) -> Self {
        match value {
            None | Some("") => Self::new(),
            Some(value) => value.split(delimiter.as_str()).map(str::to_owned).collect(),
        }
    }

    /// Joins the selection with `delimiter`. An empty selection encodes to `""`.
    pub fn encode(&self, delimiter: &Delimiter) -> String {
        self.0.join(delimiter.as_str())
    }

    /// Returns the selection after checking (`include`) or unchecking `option`.
    ///
    /// Removing drops every entry equal to `option`. The result is ordered by
    /// each entry's first position in `available_options`; entries not listed
    /// there come first. The sort is stable, so unlisted entries keep their
    /// prior relative order.
    pub fn toggled<S: AsRef<str>>(
        &self,
        available_options: &[S],
        option: &str,
        include: bool,
    ) -> Self {
        let mut next: Vec<String> = if include {
            let mut items = self.0.clone();
            items.push(option.to_owned());
            items
        } else {
            self.0.iter().filter(|item| item.as_str() != option).cloned().collect()
        };

        // `None` orders before every `Some`, which puts unlisted options first.
        next.sort_by_cached_key(|item| {
            available_options
                .iter()
                .position(|available| available.as_ref() == item.as_str())
        });
        Self(next)
    }

    pub fn contains(&self, option: &str) -> bool {
        self.0.iter().any(|item| item == option)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Selection {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Selection {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
