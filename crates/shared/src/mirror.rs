//! The permissive normalizing constructor shared by every mirrored kind.
//!
//! Normalization never validates. A field that is missing, `null`, or of the
//! wrong JSON type ends up as `None`; undeclared fields are dropped. The only
//! error is textual input that is not JSON.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::binding::{Binding, FieldType};
use crate::error::MirrorError;
use crate::source::Source;

/// A Rust type that can hold one declared wire field.
pub trait FieldValue: Sized {
    /// Declared type of fields holding this value
    const TYPE: FieldType;

    /// Read the value verbatim, or `None` when the JSON type does not fit
    fn read(value: &Value) -> Option<Self>;

    /// Wire form of the value
    fn write(&self) -> Value;
}

impl FieldValue for String {
    const TYPE: FieldType = FieldType::Text;

    fn read(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }

    fn write(&self) -> Value {
        Value::String(self.clone())
    }
}

// Integral JSON numbers only; 80.0 is not coerced.
impl FieldValue for i64 {
    const TYPE: FieldType = FieldType::Integer;

    fn read(value: &Value) -> Option<Self> {
        value.as_i64()
    }

    fn write(&self) -> Value {
        Value::from(*self)
    }
}

/// Read one declared field from a record.
pub fn read_field<T: FieldValue>(
    record: &Map<String, Value>,
    kind: &'static str,
    name: &'static str,
) -> Option<T> {
    let value = record.get(name).filter(|v| !v.is_null())?;
    let read = T::read(value);
    if read.is_none() {
        let expected = T::TYPE;
        tracing::trace!(
            kind,
            field = name,
            expected = %expected,
            "ignoring field with mismatched type"
        );
    }
    read
}

/// Write one field into a record; absent fields are left out.
pub fn write_field<T: FieldValue>(
    record: &mut Map<String, Value>,
    name: &'static str,
    value: Option<&T>,
) {
    if let Some(value) = value {
        record.insert(name.to_string(), value.write());
    }
}

/// A value object mirrored across the backend/frontend boundary.
///
/// Implementors provide the field mapping; normalization, collection handling
/// and the outbound wire form are shared.
pub trait ShapeMirror: Sized + Default {
    /// Kind name and declared wire fields
    const BINDING: Binding;

    /// Copy the declared fields out of a record
    fn from_record(record: &Map<String, Value>) -> Self;

    /// Wire form as a record, without absent fields
    fn to_record(&self) -> Map<String, Value>;

    /// Normalize a parsed JSON value. Non-object values give an empty instance.
    fn from_value(value: &Value) -> Self {
        match value.as_object() {
            Some(record) => Self::from_record(record),
            None => {
                tracing::trace!(
                    kind = Self::BINDING.kind,
                    "source is not a record, all fields absent"
                );
                Self::default()
            }
        }
    }

    /// Normalize text, a parsed value, or nothing into an instance.
    ///
    /// # Errors
    ///
    /// [`MirrorError::MalformedInput`] when a textual source is not JSON.
    fn normalize<'a, S: Into<Source<'a>>>(source: S) -> Result<Self, MirrorError> {
        let source = source.into();
        if source.is_textual() {
            tracing::trace!(kind = Self::BINDING.kind, "parsing textual source");
        }
        let value = source.resolve(Self::BINDING.kind)?;
        Ok(Self::from_value(&value))
    }

    /// Same as [`ShapeMirror::normalize`], named after the frontend constructor
    fn create_from<'a, S: Into<Source<'a>>>(source: S) -> Result<Self, MirrorError> {
        Self::normalize(source)
    }

    /// Normalize a JSON array into a list. Anything that is not an array
    /// gives an empty list.
    fn normalize_many<'a, S: Into<Source<'a>>>(source: S) -> Result<Vec<Self>, MirrorError> {
        let value = source.into().resolve(Self::BINDING.kind)?;
        match value.as_array() {
            Some(items) => Ok(items.iter().map(Self::from_value).collect()),
            None => {
                tracing::trace!(
                    kind = Self::BINDING.kind,
                    "list source is not an array, returning no items"
                );
                Ok(Vec::new())
            }
        }
    }

    fn to_value(&self) -> Value {
        Value::Object(self.to_record())
    }

    fn to_json_string(&self) -> String {
        self.to_value().to_string()
    }

    /// Wire names of declared fields that are absent on this value
    fn missing_fields(&self) -> Vec<&'static str> {
        let record = self.to_record();
        Self::BINDING
            .field_names()
            .filter(|name| !record.contains_key(*name))
            .collect()
    }
}

/// `Deserialize` body for mirrored kinds: buffer into a JSON value, then
/// read it with [`ShapeMirror::from_value`]. The value is already decoded, so
/// a string element is not parsed again and nothing here can fail beyond the
/// deserializer itself.
pub fn deserialize_permissive<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: ShapeMirror,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::from_value(&value))
}
