//! Model-to-mapping translation
//!
//! [`Mapper`] turns a [`ModelSchema`] into a [`Schema`]: each column's
//! native type is translated through the per-ORM lookup table, then a
//! sequence of optional passes filters, overrides and renames the result.
//!
//! Pass order matches the configuration surface: filtering happens while
//! columns are collected, then keyword forcing, then custom-value
//! replacement (which therefore wins over keyword forcing), then renames.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::{FieldInfo, ModelSchema};
use crate::orm::OrmKind;
use crate::schema::{FieldMapping, Schema, TypeValue};

/// Schema mapper with a builder-style configuration surface
///
/// All options are optional; a default mapper translates every column of
/// the model and flattens foreign keys to their target's primary-key type.
///
/// ```
/// use esmapper::{Mapper, SqlAlchemyColumn, SqlAlchemyTable};
///
/// let users = SqlAlchemyTable::new("users", vec![
///     SqlAlchemyColumn::new("id", "integer"),
///     SqlAlchemyColumn::new("username", "string"),
///     SqlAlchemyColumn::new("age", "small_integer"),
/// ]);
///
/// let schema = Mapper::new()
///     .include(["username", "age"])
///     .load(&users)
///     .unwrap();
///
/// assert_eq!(
///     serde_json::to_value(&schema).unwrap(),
///     serde_json::json!({
///         "username": {"type": "text"},
///         "age": {"type": "short"},
///     }),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    keyword_fields: HashSet<String>,
    alternative_names: Vec<(String, String)>,
    include: HashSet<String>,
    exclude: HashSet<String>,
    follow_nested: bool,
    custom_values: Vec<(String, FieldMapping)>,
}

impl Mapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the named fields to `{"type": "keyword"}`, whatever the
    /// lookup table produced for them
    pub fn keyword_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keyword_fields.extend(names.into_iter().map(Into::into));
        self
    }

    /// Rename `old` to `new` in the result
    ///
    /// The new field carries only the old field's `type` value; extra
    /// descriptor keys are dropped.
    pub fn rename(mut self, old: impl Into<String>, new: impl Into<String>) -> Self {
        self.alternative_names.push((old.into(), new.into()));
        self
    }

    /// Keep only the named fields (allow list)
    pub fn include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include.extend(names.into_iter().map(Into::into));
        self
    }

    /// Drop the named fields (deny list, layerable with `include`)
    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(names.into_iter().map(Into::into));
        self
    }

    /// Expand foreign keys into embedded sub-schemas instead of
    /// flattening them to the target's primary-key type
    pub fn follow_nested(mut self, follow: bool) -> Self {
        self.follow_nested = follow;
        self
    }

    /// Replace the named field's descriptor wholesale
    ///
    /// Applied after type lookup and keyword forcing; the caller-supplied
    /// descriptor wins over both. A name absent from the model is inserted
    /// as a new field.
    pub fn custom_value(mut self, name: impl Into<String>, mapping: FieldMapping) -> Self {
        self.custom_values.push((name.into(), mapping));
        self
    }

    /// Translate `model` into a search-index schema
    ///
    /// Fails only when nested expansion meets a foreign-key cycle; every
    /// other input maps totally, with unknown native types passed through
    /// as `{"type": null}`.
    pub fn load(&self, model: &dyn ModelSchema) -> Result<Schema> {
        let mut chain = Vec::new();
        self.load_with_chain(model, &mut chain)
    }

    fn load_with_chain(&self, model: &dyn ModelSchema, chain: &mut Vec<String>) -> Result<Schema> {
        let orm = model.orm();
        debug!(model = model.model_name(), orm = %orm, "mapping model schema");
        chain.push(model.model_name().to_string());

        let mut schema = Schema::new();
        for field in model.fields() {
            if self.is_filtered(&field.name) {
                continue;
            }
            let mapping = self.map_field(orm, &field, chain)?;
            schema.insert(field.name, mapping);
        }
        chain.pop();

        for name in &self.keyword_fields {
            if schema.contains(name) {
                schema.insert(name.clone(), FieldMapping::keyword());
            }
        }
        for (name, mapping) in &self.custom_values {
            schema.insert(name.clone(), mapping.clone());
        }
        for (old, new) in &self.alternative_names {
            if let Some(mapping) = schema.remove(old) {
                schema.insert(new.clone(), mapping.type_only());
            }
        }
        Ok(schema)
    }

    fn is_filtered(&self, name: &str) -> bool {
        (!self.include.is_empty() && !self.include.contains(name))
            || self.exclude.contains(name)
    }

    fn map_field(
        &self,
        orm: OrmKind,
        field: &FieldInfo,
        chain: &mut Vec<String>,
    ) -> Result<FieldMapping> {
        match &field.foreign_key {
            Some(target) => self.map_foreign_key(field, target.as_ref(), chain),
            None => {
                let ty = orm.lookup(&field.native_type);
                if ty.is_none() {
                    warn!(
                        column = %field.name,
                        native_type = %field.native_type,
                        "no search type for native column type"
                    );
                }
                Ok(FieldMapping::new(TypeValue::Scalar(ty)))
            }
        }
    }

    fn map_foreign_key(
        &self,
        field: &FieldInfo,
        target: &dyn ModelSchema,
        chain: &mut Vec<String>,
    ) -> Result<FieldMapping> {
        if !self.follow_nested {
            // Flatten to the referenced model's primary key, by convention
            // its first declared column.
            let ty = target
                .fields()
                .first()
                .and_then(|pk| target.orm().lookup(&pk.native_type));
            if ty.is_none() {
                warn!(
                    column = %field.name,
                    referenced_model = target.model_name(),
                    "no search type for referenced model's primary key"
                );
            }
            return Ok(FieldMapping::new(TypeValue::Scalar(ty)));
        }

        if chain.iter().any(|name| name == target.model_name()) {
            return Err(Error::ForeignKeyCycle {
                model: target.model_name().to_string(),
            });
        }

        // Nested expansion keeps following foreign keys but never inherits
        // filters, keyword forcing, custom values or renames.
        let nested_options = Mapper {
            follow_nested: true,
            ..Mapper::default()
        };
        let nested = nested_options.load_with_chain(target, chain)?;
        Ok(FieldMapping::nested(nested))
    }
}
