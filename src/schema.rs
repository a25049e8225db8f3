//! Search-index mapping definitions
//!
//! Defines the output of the mapper: an ordered schema of field name to
//! type descriptor, matching the `properties` shape of an Elasticsearch
//! index-mapping document. A descriptor is `{"type": <scalar type>}` for
//! plain columns, `{"type": null}` for columns with no known translation,
//! and `{"type": {"properties": {...}}}` for expanded foreign keys.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Search-engine scalar field type
///
/// The target vocabulary of the per-ORM lookup tables. Serializes to the
/// lowercase type names the index-mapping API expects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Full-text analyzed string
    Text,
    /// Exact-match, non-analyzed string
    Keyword,
    /// 32-bit integer
    Integer,
    /// 16-bit integer
    Short,
    /// 64-bit integer
    Long,
    /// 8-bit integer
    Byte,
    /// Boolean flag
    Boolean,
    /// Single-precision float
    Float,
    /// Double-precision float
    Double,
    /// Date or timestamp
    Date,
    /// Base64-encoded binary blob
    Binary,
    /// IPv4/IPv6 address
    Ip,
}

impl SearchType {
    /// The lowercase name used in mapping documents
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Text => "text",
            SearchType::Keyword => "keyword",
            SearchType::Integer => "integer",
            SearchType::Short => "short",
            SearchType::Long => "long",
            SearchType::Byte => "byte",
            SearchType::Boolean => "boolean",
            SearchType::Float => "float",
            SearchType::Double => "double",
            SearchType::Date => "date",
            SearchType::Binary => "binary",
            SearchType::Ip => "ip",
        }
    }
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a descriptor's `type` key
///
/// Either a scalar search type (`None` when the native column type had no
/// table entry) or an embedded sub-schema for a followed foreign key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TypeValue {
    /// `"type": "text"` or `"type": null`
    Scalar(Option<SearchType>),
    /// `"type": {"properties": {...}}`
    Nested { properties: Schema },
}

/// A single field descriptor in the mapping document
///
/// Serializes as `{"type": <TypeValue>, ...params}`. The `params` map holds
/// any extra descriptor keys (analyzer, format, and so on) supplied through
/// custom values; it must not itself contain a `type` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldMapping {
    /// The search-engine type of the field
    #[serde(rename = "type")]
    pub ty: TypeValue,

    /// Extra descriptor keys, carried verbatim
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub params: Map<String, Value>,
}

impl FieldMapping {
    pub fn new(ty: TypeValue) -> Self {
        Self {
            ty,
            params: Map::new(),
        }
    }

    /// Descriptor with a scalar search type
    pub fn scalar(ty: SearchType) -> Self {
        Self::new(TypeValue::Scalar(Some(ty)))
    }

    /// Descriptor for a column whose native type has no translation
    pub fn null() -> Self {
        Self::new(TypeValue::Scalar(None))
    }

    /// The `{"type": "keyword"}` descriptor
    pub fn keyword() -> Self {
        Self::scalar(SearchType::Keyword)
    }

    /// Descriptor embedding a sub-schema for a followed foreign key
    pub fn nested(properties: Schema) -> Self {
        Self::new(TypeValue::Nested { properties })
    }

    /// Attach an extra descriptor key (builder style)
    pub fn with_param(mut self, key: impl Into<String>, value: Value) -> Self {
        self.params.insert(key.into(), value);
        self
    }

    /// Copy of this descriptor keeping only the `type` value
    ///
    /// Renamed fields carry over just their type, never extra keys.
    pub fn type_only(&self) -> Self {
        Self::new(self.ty.clone())
    }

    /// The scalar search type, if this is a scalar descriptor
    pub fn search_type(&self) -> Option<SearchType> {
        match self.ty {
            TypeValue::Scalar(ty) => ty,
            TypeValue::Nested { .. } => None,
        }
    }
}

/// Ordered mapping of field name to descriptor
///
/// Field order follows the model's column order, with renamed fields moved
/// to the end. Serializes directly as the `properties` object of an
/// index-mapping document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Schema {
    fields: IndexMap<String, FieldMapping>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&FieldMapping> {
        self.fields.get(name)
    }

    /// Insert or replace a field, appending new names at the end
    pub fn insert(&mut self, name: impl Into<String>, mapping: FieldMapping) {
        self.fields.insert(name.into(), mapping);
    }

    /// Remove a field, preserving the order of the remaining ones
    pub fn remove(&mut self, name: &str) -> Option<FieldMapping> {
        self.fields.shift_remove(name)
    }

    /// Field names in schema order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldMapping)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for Schema {
    type Item = (String, FieldMapping);
    type IntoIter = indexmap::map::IntoIter<String, FieldMapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl FromIterator<(String, FieldMapping)> for Schema {
    fn from_iter<I: IntoIterator<Item = (String, FieldMapping)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
