//! The seam between the field and the host's form state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What the field needs from the host: read the current stored value and
/// report a new one.
pub trait FieldHost {
    /// The stored value of field `name`, or `None` if nothing is stored yet.
    fn current_value(&self, name: &str) -> Option<String>;

    /// Delivers a change notification to the host's form state.
    fn emit_change(&mut self, event: ChangeEvent);
}

/// A change notification shaped like a standard text-input change:
/// `{"target": {"name": ..., "value": ..., "type": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub target: ChangeTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeTarget {
    pub name: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ChangeEvent {
    pub fn new(name: impl Into<String>, value: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            target: ChangeTarget {
                name: name.into(),
                value: value.into(),
                kind: kind.into(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.target.name
    }

    pub fn value(&self) -> &str {
        &self.target.value
    }
}

/// In-memory form state keyed by field name.
///
/// Applies every emitted change and keeps the events in emission order.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: HashMap<String, String>,
    events: Vec<ChangeEvent>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a stored value, e.g. when an existing entry is opened.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn events(&self) -> &[ChangeEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<ChangeEvent> {
        std::mem::take(&mut self.events)
    }
}

impl FieldHost for FormState {
    fn current_value(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }

    fn emit_change(&mut self, event: ChangeEvent) {
        self.values
            .insert(event.target.name.clone(), event.target.value.clone());
        self.events.push(event);
    }
}
