//! ORM model descriptors
//!
//! The mapper does not talk to a database; it reads already-materialized
//! model metadata. [`ModelSchema`] is the introspection seam: anything that
//! can enumerate its columns as (name, native type, optional foreign-key
//! target) tuples can be mapped. One concrete descriptor type is provided
//! per supported ORM, each speaking that ORM's own type vocabulary and
//! deserializable from a JSON metadata dump.
//!
//! Foreign-key targets inside the provided descriptors are owned sub-trees,
//! so a descriptor built from data is always acyclic. Hand-written
//! [`ModelSchema`] implementations may share targets (and so form cycles);
//! the mapper detects those during nested expansion.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::orm::OrmKind;

/// Introspection capability over an ORM model
///
/// Implemented by the provided per-ORM descriptors; callers with their own
/// metadata source can implement it directly.
pub trait ModelSchema: fmt::Debug + Send + Sync {
    /// Model (or table) name, used in diagnostics and cycle detection
    fn model_name(&self) -> &str;

    /// Which ORM's type vocabulary the native types use
    fn orm(&self) -> OrmKind;

    /// Columns in declaration order
    fn fields(&self) -> Vec<FieldInfo>;
}

/// One column of a model, as seen by the mapper
#[derive(Debug, Clone)]
pub struct FieldInfo {
    /// Column name
    pub name: String,
    /// ORM-native type identifier
    pub native_type: String,
    /// Referenced model, when this column is a foreign key
    pub foreign_key: Option<Arc<dyn ModelSchema>>,
}

impl FieldInfo {
    pub fn new(name: impl Into<String>, native_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            native_type: native_type.into(),
            foreign_key: None,
        }
    }

    /// Mark this column as a foreign key to `target`
    pub fn references(mut self, target: Arc<dyn ModelSchema>) -> Self {
        self.foreign_key = Some(target);
        self
    }
}

// ---------------------------------------------------------------------------
// SQLAlchemy
// ---------------------------------------------------------------------------

/// A SQLAlchemy table descriptor
///
/// Column types are visit names, the lowercase identifiers of the type
/// compiler (`String` -> `"string"`, `SmallInteger` -> `"small_integer"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SqlAlchemyTable {
    pub name: String,
    pub columns: Vec<SqlAlchemyColumn>,
}

impl SqlAlchemyTable {
    pub fn new(name: impl Into<String>, columns: Vec<SqlAlchemyColumn>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }
}

/// One column of a [`SqlAlchemyTable`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SqlAlchemyColumn {
    pub name: String,
    /// Visit name of the column's type
    #[serde(rename = "type")]
    pub visit_name: String,
    /// Referenced table, for foreign-key columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<Box<SqlAlchemyTable>>,
}

impl SqlAlchemyColumn {
    pub fn new(name: impl Into<String>, visit_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visit_name: visit_name.into(),
            foreign_key: None,
        }
    }

    /// Make this column a foreign key to `table` (builder style)
    pub fn references(mut self, table: SqlAlchemyTable) -> Self {
        self.foreign_key = Some(Box::new(table));
        self
    }
}

impl ModelSchema for SqlAlchemyTable {
    fn model_name(&self) -> &str {
        &self.name
    }

    fn orm(&self) -> OrmKind {
        OrmKind::SqlAlchemy
    }

    fn fields(&self) -> Vec<FieldInfo> {
        self.columns
            .iter()
            .map(|column| FieldInfo {
                name: column.name.clone(),
                native_type: column.visit_name.clone(),
                foreign_key: column
                    .foreign_key
                    .as_deref()
                    .map(|table| Arc::new(table.clone()) as Arc<dyn ModelSchema>),
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// peewee
// ---------------------------------------------------------------------------

/// A peewee model descriptor
///
/// Column types are peewee column-type codes, the `field_type` attribute of
/// each field class (`CharField` -> `"VARCHAR"`, `AutoField` -> `"AUTO"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeeweeModel {
    pub name: String,
    pub columns: Vec<PeeweeColumn>,
}

impl PeeweeModel {
    pub fn new(name: impl Into<String>, columns: Vec<PeeweeColumn>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }
}

/// One column of a [`PeeweeModel`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeeweeColumn {
    pub name: String,
    /// Column-type code of the field class
    pub field_type: String,
    /// Referenced model, for foreign-key columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel_model: Option<Box<PeeweeModel>>,
}

impl PeeweeColumn {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            rel_model: None,
        }
    }

    /// Make this column a foreign key to `model` (builder style)
    pub fn references(mut self, model: PeeweeModel) -> Self {
        self.rel_model = Some(Box::new(model));
        self
    }
}

impl ModelSchema for PeeweeModel {
    fn model_name(&self) -> &str {
        &self.name
    }

    fn orm(&self) -> OrmKind {
        OrmKind::Peewee
    }

    fn fields(&self) -> Vec<FieldInfo> {
        self.columns
            .iter()
            .map(|column| FieldInfo {
                name: column.name.clone(),
                native_type: column.field_type.clone(),
                foreign_key: column
                    .rel_model
                    .as_deref()
                    .map(|model| Arc::new(model.clone()) as Arc<dyn ModelSchema>),
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Django
// ---------------------------------------------------------------------------

/// Internal type name marking a Django foreign key
const DJANGO_FOREIGN_KEY: &str = "ForeignKey";

/// A Django model descriptor
///
/// Field types are internal type names as reported by
/// `Field.get_internal_type()`. A field whose internal type is `ForeignKey`
/// must carry its related model to be resolved as a foreign key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DjangoModel {
    pub name: String,
    pub fields: Vec<DjangoField>,
}

impl DjangoModel {
    pub fn new(name: impl Into<String>, fields: Vec<DjangoField>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// One field of a [`DjangoModel`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DjangoField {
    pub name: String,
    /// Internal type name of the field
    pub internal_type: String,
    /// Related model, for `ForeignKey` fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_model: Option<Box<DjangoModel>>,
}

impl DjangoField {
    pub fn new(name: impl Into<String>, internal_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            internal_type: internal_type.into(),
            related_model: None,
        }
    }

    /// A `ForeignKey` field referencing `model`
    pub fn foreign_key(name: impl Into<String>, model: DjangoModel) -> Self {
        Self {
            name: name.into(),
            internal_type: DJANGO_FOREIGN_KEY.to_string(),
            related_model: Some(Box::new(model)),
        }
    }
}

impl ModelSchema for DjangoModel {
    fn model_name(&self) -> &str {
        &self.name
    }

    fn orm(&self) -> OrmKind {
        OrmKind::Django
    }

    fn fields(&self) -> Vec<FieldInfo> {
        self.fields
            .iter()
            .map(|field| FieldInfo {
                name: field.name.clone(),
                native_type: field.internal_type.clone(),
                foreign_key: match (field.internal_type.as_str(), field.related_model.as_deref()) {
                    (DJANGO_FOREIGN_KEY, Some(model)) => {
                        Some(Arc::new(model.clone()) as Arc<dyn ModelSchema>)
                    }
                    _ => None,
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlalchemy_fields_in_declaration_order() {
        let table = SqlAlchemyTable::new(
            "users",
            vec![
                SqlAlchemyColumn::new("id", "integer"),
                SqlAlchemyColumn::new("username", "string"),
            ],
        );
        let fields = table.fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "id");
        assert_eq!(fields[1].native_type, "string");
        assert!(fields[0].foreign_key.is_none());
    }

    #[test]
    fn test_django_foreign_key_requires_related_model() {
        let model = DjangoModel::new(
            "Post",
            vec![DjangoField::new("author", "ForeignKey")],
        );
        // No related model attached: treated as a plain (unknown) column.
        assert!(model.fields()[0].foreign_key.is_none());
    }

    #[test]
    fn test_descriptor_from_json_dump() {
        let table: SqlAlchemyTable = serde_json::from_value(serde_json::json!({
            "name": "posts",
            "columns": [
                {"name": "id", "type": "integer"},
                {"name": "author", "type": "integer", "foreign_key": {
                    "name": "users",
                    "columns": [{"name": "id", "type": "integer"}],
                }},
            ],
        }))
        .unwrap();
        let fields = table.fields();
        assert!(fields[1].foreign_key.is_some());
    }
}
