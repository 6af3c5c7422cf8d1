//! Argument binding for validated construction

use crate::error::{ConstructError, ValueError};
use crate::value::Value;

/// How construction treats a value that fails its field's type predicate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConstructMode {
    /// Reject the value with [`ConstructError::InvalidField`]
    #[default]
    Strict,

    /// Keep the field's default instead and ignore unknown or surplus values
    Lenient,
}

impl ConstructMode {
    /// Resolve one field's checked value against this mode
    pub fn accept<T>(
        self,
        field: &str,
        checked: Result<T, ValueError>,
        default: impl FnOnce() -> T,
    ) -> Result<T, ConstructError> {
        match (checked, self) {
            (Ok(value), _) => Ok(value),
            (Err(source), ConstructMode::Strict) => Err(ConstructError::InvalidField {
                field: field.to_string(),
                source,
            }),
            (Err(source), ConstructMode::Lenient) => {
                tracing::debug!(field, error = %source, "Value rejected, using field default");
                Ok(default())
            }
        }
    }
}

/// Positional and named values passed to a generated `construct`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    positional: Vec<Value>,
    named: Vec<(String, Value)>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_positional(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            positional: values.into_iter().collect(),
            named: Vec::new(),
        }
    }

    pub fn from_named(values: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self {
            positional: Vec::new(),
            named: values.into_iter().collect(),
        }
    }

    /// Append a positional value
    pub fn push(mut self, value: Value) -> Self {
        self.positional.push(value);
        self
    }

    /// Append a named value
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.named.push((name.into(), value));
        self
    }

    /// Bind values to `fields`, returning one slot per field in order
    ///
    /// Positional values fill the leading slots. A named value for a slot
    /// that is already filled, a name that is not a field, or more positional
    /// values than fields is an error in strict mode and is dropped in
    /// lenient mode, where the positional value wins.
    pub fn bind(
        self,
        fields: &[&str],
        mode: ConstructMode,
    ) -> Result<Vec<Option<Value>>, ConstructError> {
        if self.positional.len() > fields.len() {
            if mode == ConstructMode::Strict {
                return Err(ConstructError::TooManyValues {
                    given: self.positional.len(),
                    max: fields.len(),
                });
            }
            tracing::debug!(
                given = self.positional.len(),
                max = fields.len(),
                "Dropping surplus positional values"
            );
        }

        let mut slots: Vec<Option<Value>> = vec![None; fields.len()];
        for (slot, value) in slots.iter_mut().zip(self.positional) {
            *slot = Some(value);
        }

        for (name, value) in self.named {
            match fields.iter().position(|field| *field == name) {
                Some(index) if slots[index].is_none() => slots[index] = Some(value),
                Some(_) if mode == ConstructMode::Strict => {
                    return Err(ConstructError::DuplicateField(name));
                }
                None if mode == ConstructMode::Strict => {
                    return Err(ConstructError::UnknownField(name));
                }
                _ => tracing::debug!(field = %name, "Ignoring named value"),
            }
        }

        Ok(slots)
    }
}

#[cfg(test)]
#[path = "construct/construct_tests.rs"]
mod construct_tests;
