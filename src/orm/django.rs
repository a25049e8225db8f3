//! Django type lookup
//!
//! Keys are Django internal type names as reported by
//! `Field.get_internal_type()` (`CharField`, `SmallIntegerField`, ...).
//! `ForeignKey` has no entry here; foreign keys are resolved against the
//! referenced model before the table is consulted.

use crate::schema::SearchType;

pub(crate) fn lookup(internal_type: &str) -> Option<SearchType> {
    let ty = match internal_type {
        "CharField" | "TextField" | "SlugField" | "EmailField" | "URLField" => SearchType::Text,
        "AutoField" | "IntegerField" | "PositiveIntegerField" => SearchType::Integer,
        "SmallAutoField" | "SmallIntegerField" | "PositiveSmallIntegerField" => SearchType::Short,
        "BigAutoField" | "BigIntegerField" | "PositiveBigIntegerField" => SearchType::Long,
        "BooleanField" => SearchType::Boolean,
        "FloatField" | "DecimalField" => SearchType::Float,
        "DateField" | "DateTimeField" | "TimeField" => SearchType::Date,
        "BinaryField" => SearchType::Binary,
        "UUIDField" => SearchType::Keyword,
        "GenericIPAddressField" => SearchType::Ip,
        _ => return None,
    };
    Some(ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_internal_types() {
        assert_eq!(lookup("AutoField"), Some(SearchType::Integer));
        assert_eq!(lookup("CharField"), Some(SearchType::Text));
        assert_eq!(lookup("SmallIntegerField"), Some(SearchType::Short));
        assert_eq!(lookup("BooleanField"), Some(SearchType::Boolean));
    }

    #[test]
    fn test_foreign_key_has_no_entry() {
        assert_eq!(lookup("ForeignKey"), None);
    }
}
