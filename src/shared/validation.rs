//! Form validation primitives shared by the report and signup forms.
//!
//! Each form declares a closed field enum implementing [`FormField`]; errors are
//! collected in a [`FormErrors`] map keyed by that enum, so a typo in a field
//! name is a compile error rather than a silently ignored key.

use std::collections::BTreeMap;
use std::fmt::Debug;

use lazy_static::lazy_static;
use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

use crate::modules::sink::SinkError;

lazy_static! {
    /// Regex for base64 data URIs produced by the image encoder
    /// - Valid: "data:image/png;base64,iVBORw0KGgo=", "data:image/jpeg;base64,"
    /// - Invalid: "image/png;base64,AAAA", "data:image/png,AAAA", "https://example.com/a.png"
    pub static ref DATA_URI_REGEX: Regex =
        Regex::new(r"^data:(?P<mime>[^;,]+);base64,(?P<payload>[A-Za-z0-9+/=]*)$").unwrap();
}

/// A field tag of one form.
pub trait FormField: Copy + Ord + Debug + Send + Sync + 'static {
    /// Wire name used when the error map leaves the process (e.g. `nationalId`)
    fn name(self) -> &'static str;
}

/// Field → message map. Any entry blocks submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors<F: FormField> {
    entries: BTreeMap<F, String>,
}

impl<F: FormField> Default for FormErrors<F> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<F: FormField> FormErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    pub fn clear(&mut self, field: F) {
        self.entries.remove(&field);
    }

    #[cfg(test)]
    pub fn get(&self, field: F) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    #[cfg(test)]
    pub fn contains(&self, field: F) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Fields carrying an error, in declaration order
    #[cfg(test)]
    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.entries.keys().copied()
    }

    /// Copy every entry of `other` over this map
    pub fn merge(&mut self, other: FormErrors<F>) {
        self.entries.extend(other.entries);
    }

    pub fn to_field_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(field, message)| (field.name().to_string(), message.clone()))
            .collect()
    }
}

impl<F: FormField> Serialize for FormErrors<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, message) in &self.entries {
            map.serialize_entry(field.name(), message)?;
        }
        map.end()
    }
}

/// Why a form submission did not go through
#[derive(Debug, Error)]
pub enum SubmitError<F: FormField> {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(FormErrors<F>),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Workflow position of a form: `Editing -> Validating -> {Editing, Submitted}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    Editing,
    Validating,
    Submitted,
}
