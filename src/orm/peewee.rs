//! peewee type lookup
//!
//! Keys are peewee column-type codes, the `field_type` attribute of each
//! field class (`CharField` -> `VARCHAR`, `AutoField` -> `AUTO`).

use crate::schema::SearchType;

pub(crate) fn lookup(field_type: &str) -> Option<SearchType> {
    let ty = match field_type {
        "VARCHAR" | "CHAR" | "TEXT" => SearchType::Text,
        "AUTO" | "INT" => SearchType::Integer,
        "SMALLINT" => SearchType::Short,
        "BIGAUTO" | "BIGINT" => SearchType::Long,
        "BOOL" => SearchType::Boolean,
        "FLOAT" | "DECIMAL" => SearchType::Float,
        "DOUBLE" => SearchType::Double,
        "DATE" | "DATETIME" | "TIME" => SearchType::Date,
        "BLOB" => SearchType::Binary,
        "UUID" => SearchType::Keyword,
        _ => return None,
    };
    Some(ty)
}
