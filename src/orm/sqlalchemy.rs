//! SQLAlchemy type lookup
//!
//! Keys are SQLAlchemy visit names, the lowercase identifiers the type
//! compiler uses (`String` -> `string`, `SmallInteger` -> `small_integer`).

use crate::schema::SearchType;

pub(crate) fn lookup(visit_name: &str) -> Option<SearchType> {
    let ty = match visit_name {
        "string" | "text" | "unicode" | "unicode_text" | "enum" => SearchType::Text,
        "integer" => SearchType::Integer,
        "small_integer" => SearchType::Short,
        "big_integer" => SearchType::Long,
        "float" | "numeric" => SearchType::Float,
        "boolean" => SearchType::Boolean,
        "date" | "datetime" | "time" => SearchType::Date,
        "large_binary" => SearchType::Binary,
        "uuid" => SearchType::Keyword,
        _ => return None,
    };
    Some(ty)
}
