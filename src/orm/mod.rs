//! Supported ORM ecosystems and their type lookup tables
//!
//! One lookup table per ORM maps that ORM's native column-type identifiers
//! to search-engine types. The tables are plain `match` expressions over a
//! closed vocabulary: static, allocation-free, and safe to share across
//! threads.

mod django;
mod peewee;
mod sqlalchemy;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::schema::SearchType;

/// The ORM ecosystem a model descriptor comes from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrmKind {
    /// SQLAlchemy tables, typed by visit name (`string`, `small_integer`, ...)
    SqlAlchemy,
    /// peewee models, typed by column-type code (`VARCHAR`, `SMALLINT`, ...)
    Peewee,
    /// Django models, typed by internal type (`CharField`, `SmallIntegerField`, ...)
    Django,
}

impl OrmKind {
    /// All supported kinds
    pub const ALL: [OrmKind; 3] = [OrmKind::SqlAlchemy, OrmKind::Peewee, OrmKind::Django];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrmKind::SqlAlchemy => "sqlalchemy",
            OrmKind::Peewee => "peewee",
            OrmKind::Django => "django",
        }
    }

    /// Translate a native column-type identifier for this ORM
    ///
    /// Returns `None` for identifiers with no table entry; callers treat
    /// that as a null type rather than an error.
    pub fn lookup(&self, native_type: &str) -> Option<SearchType> {
        match self {
            OrmKind::SqlAlchemy => sqlalchemy::lookup(native_type),
            OrmKind::Peewee => peewee::lookup(native_type),
            OrmKind::Django => django::lookup(native_type),
        }
    }
}

impl fmt::Display for OrmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrmKind {
    type Err = Error;

    /// Parse an ORM kind from configuration input (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sqlalchemy" => Ok(OrmKind::SqlAlchemy),
            "peewee" => Ok(OrmKind::Peewee),
            "django" => Ok(OrmKind::Django),
            _ => Err(Error::UnsupportedOrm {
                requested: s.to_string(),
            }),
        }
    }
}
