// Integration tests for esmapper
use esmapper::{
    DjangoField, DjangoModel, FieldMapping, Mapper, OrmKind, PeeweeColumn, PeeweeModel, Schema,
    SearchType, SqlAlchemyColumn, SqlAlchemyTable,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn sqlalchemy_users() -> SqlAlchemyTable {
    SqlAlchemyTable::new(
        "users",
        vec![
            SqlAlchemyColumn::new("id", "integer"),
            SqlAlchemyColumn::new("username", "string"),
            SqlAlchemyColumn::new("is_active", "boolean"),
            SqlAlchemyColumn::new("age", "small_integer"),
        ],
    )
}

#[test]
fn test_sqlalchemy_mapping() {
    let schema = Mapper::new()
        .rename("age", "user_age")
        .exclude(["is_active"])
        .load(&sqlalchemy_users())
        .unwrap();

    assert_eq!(
        serde_json::to_value(&schema).unwrap(),
        json!({
            "id": {"type": "integer"},
            "username": {"type": "text"},
            "user_age": {"type": "short"},
        })
    );
    assert!(!schema.contains("is_active"));
    assert!(!schema.contains("age"));
}

#[test]
fn test_peewee_mapping() {
    let users = PeeweeModel::new(
        "user",
        vec![
            PeeweeColumn::new("id", "AUTO"),
            PeeweeColumn::new("username", "VARCHAR"),
            PeeweeColumn::new("is_active", "BOOL"),
            PeeweeColumn::new("age", "SMALLINT"),
            PeeweeColumn::new("name_keyword", "VARCHAR"),
        ],
    );

    let schema = Mapper::new()
        .keyword_fields(["name_keyword"])
        .load(&users)
        .unwrap();

    assert_eq!(
        serde_json::to_value(&schema).unwrap(),
        json!({
            "id": {"type": "integer"},
            "username": {"type": "text"},
            "is_active": {"type": "boolean"},
            "age": {"type": "short"},
            "name_keyword": {"type": "keyword"},
        })
    );
}

#[test]
fn test_django_mapping() {
    let users = DjangoModel::new(
        "User",
        vec![
            DjangoField::new("id", "AutoField"),
            DjangoField::new("username", "CharField"),
            DjangoField::new("is_active", "BooleanField"),
            DjangoField::new("age", "SmallIntegerField"),
        ],
    );

    let schema = Mapper::new()
        .include(["username", "age"])
        .load(&users)
        .unwrap();

    assert_eq!(
        serde_json::to_value(&schema).unwrap(),
        json!({
            "username": {"type": "text"},
            "age": {"type": "short"},
        })
    );
    assert!(!schema.contains("is_active"));
    assert!(!schema.contains("id"));
}

#[test]
fn test_django_foreign_key_flattened() {
    let users = DjangoModel::new(
        "User",
        vec![
            DjangoField::new("id", "AutoField"),
            DjangoField::new("username", "CharField"),
        ],
    );
    let posts = DjangoModel::new(
        "Post",
        vec![
            DjangoField::new("id", "AutoField"),
            DjangoField::foreign_key("author", users),
            DjangoField::new("title", "CharField"),
        ],
    );

    let schema = Mapper::new().load(&posts).unwrap();
    assert_eq!(
        serde_json::to_value(&schema).unwrap(),
        json!({
            "id": {"type": "integer"},
            "author": {"type": "integer"},
            "title": {"type": "text"},
        })
    );
}

#[test]
fn test_django_foreign_key_followed() {
    let users = DjangoModel::new(
        "User",
        vec![
            DjangoField::new("id", "AutoField"),
            DjangoField::new("username", "CharField"),
            DjangoField::new("is_active", "BooleanField"),
            DjangoField::new("age", "SmallIntegerField"),
        ],
    );
    let posts = DjangoModel::new(
        "Post",
        vec![
            DjangoField::new("id", "AutoField"),
            DjangoField::foreign_key("author", users),
        ],
    );

    let schema = Mapper::new().follow_nested(true).load(&posts).unwrap();
    assert_eq!(
        serde_json::to_value(&schema).unwrap(),
        json!({
            "id": {"type": "integer"},
            "author": {"type": {"properties": {
                "id": {"type": "integer"},
                "username": {"type": "text"},
                "is_active": {"type": "boolean"},
                "age": {"type": "short"},
            }}},
        })
    );
}

#[test]
fn test_peewee_foreign_key_flattened_to_target_primary_key() {
    let users = PeeweeModel::new(
        "user",
        vec![
            PeeweeColumn::new("id", "AUTO"),
            PeeweeColumn::new("username", "VARCHAR"),
        ],
    );
    let posts = PeeweeModel::new(
        "post",
        vec![
            PeeweeColumn::new("id", "AUTO"),
            PeeweeColumn::new("author", "INT").references(users),
        ],
    );

    let schema = Mapper::new().load(&posts).unwrap();
    assert_eq!(
        schema.get("author"),
        Some(&FieldMapping::scalar(SearchType::Integer))
    );
}

#[test]
fn test_custom_values_override_everything() {
    let schema = Mapper::new()
        .keyword_fields(["username"])
        .custom_value(
            "username",
            FieldMapping::scalar(SearchType::Text).with_param("analyzer", json!("english")),
        )
        .load(&sqlalchemy_users())
        .unwrap();

    assert_eq!(
        serde_json::to_value(schema.get("username").unwrap()).unwrap(),
        json!({"type": "text", "analyzer": "english"})
    );
}

#[test]
fn test_schema_serializes_into_index_mapping_document() {
    let schema = Mapper::new()
        .include(["username", "age"])
        .load(&sqlalchemy_users())
        .unwrap();

    let mapping = json!({"mappings": {"properties": schema}});
    assert_eq!(
        mapping,
        json!({"mappings": {"properties": {
            "username": {"type": "text"},
            "age": {"type": "short"},
        }}})
    );
}

#[test]
fn test_descriptor_loaded_from_metadata_dump() {
    let users: SqlAlchemyTable = serde_json::from_value(json!({
        "name": "users",
        "columns": [
            {"name": "id", "type": "integer"},
            {"name": "email", "type": "string"},
        ],
    }))
    .unwrap();

    let schema = Mapper::new().load(&users).unwrap();
    assert_eq!(
        serde_json::to_value(&schema).unwrap(),
        json!({
            "id": {"type": "integer"},
            "email": {"type": "text"},
        })
    );
}

#[test]
fn test_orm_kind_parse_round_trip() {
    for kind in OrmKind::ALL {
        assert_eq!(kind.as_str().parse::<OrmKind>().unwrap(), kind);
    }
    assert!("activerecord".parse::<OrmKind>().is_err());
}

#[test]
fn test_schema_deserializes_back() {
    let schema: Schema = serde_json::from_value(json!({
        "username": {"type": "text"},
        "tags": {"type": "keyword"},
    }))
    .unwrap();
    assert_eq!(schema.get("tags"), Some(&FieldMapping::keyword()));
}
