//! # esmapper
//!
//! Translate ORM model schemas into Elasticsearch field mappings.
//!
//! Given a model descriptor from one of the supported ORM ecosystems
//! (SQLAlchemy, peewee, Django), esmapper produces the `properties` object
//! of an index-mapping document: an ordered mapping of column name to
//! `{"type": ...}` descriptor. Columns can be filtered, renamed, forced to
//! `keyword`, replaced with literal descriptors, and foreign keys either
//! flattened to their target's primary-key type or expanded into embedded
//! sub-schemas.
//!
//! No database connection is involved; the input is already-materialized
//! model metadata, either built in code or deserialized from a JSON dump.
//!
//! ## Quick Start
//!
//! ```
//! use esmapper::{Mapper, SqlAlchemyColumn, SqlAlchemyTable};
//!
//! let users = SqlAlchemyTable::new("users", vec![
//!     SqlAlchemyColumn::new("id", "integer"),
//!     SqlAlchemyColumn::new("username", "string"),
//!     SqlAlchemyColumn::new("is_active", "boolean"),
//!     SqlAlchemyColumn::new("age", "small_integer"),
//! ]);
//!
//! let schema = Mapper::new()
//!     .exclude(["is_active"])
//!     .rename("age", "user_age")
//!     .load(&users)
//!     .unwrap();
//!
//! assert_eq!(
//!     serde_json::to_value(&schema).unwrap(),
//!     serde_json::json!({
//!         "id": {"type": "integer"},
//!         "username": {"type": "text"},
//!         "user_age": {"type": "short"},
//!     }),
//! );
//! ```
//!
//! ## Foreign Keys
//!
//! By default a foreign-key column maps to the primitive type of the
//! referenced model's primary key. With [`Mapper::follow_nested`] the
//! referenced model's full schema is embedded instead:
//!
//! ```
//! use esmapper::{Mapper, SqlAlchemyColumn, SqlAlchemyTable};
//!
//! let users = SqlAlchemyTable::new("users", vec![
//!     SqlAlchemyColumn::new("id", "integer"),
//!     SqlAlchemyColumn::new("username", "string"),
//! ]);
//! let posts = SqlAlchemyTable::new("posts", vec![
//!     SqlAlchemyColumn::new("id", "integer"),
//!     SqlAlchemyColumn::new("author", "integer").references(users),
//! ]);
//!
//! let schema = Mapper::new().follow_nested(true).load(&posts).unwrap();
//! assert_eq!(
//!     serde_json::to_value(schema.get("author").unwrap()).unwrap(),
//!     serde_json::json!({
//!         "type": {"properties": {
//!             "id": {"type": "integer"},
//!             "username": {"type": "text"},
//!         }}
//!     }),
//! );
//! ```

pub mod error;
pub mod mapper;
pub mod model;
pub mod orm;
pub mod schema;

pub use error::{Error, Result};
pub use mapper::Mapper;
pub use model::{
    DjangoField, DjangoModel, FieldInfo, ModelSchema, PeeweeColumn, PeeweeModel, SqlAlchemyColumn,
    SqlAlchemyTable,
};
pub use orm::OrmKind;
pub use schema::{FieldMapping, Schema, SearchType, TypeValue};
