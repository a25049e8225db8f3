use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unsupported ORM kind: {requested} (supported: sqlalchemy, peewee, django)")]
    UnsupportedOrm { requested: String },

    #[error("Foreign key cycle while expanding nested model: {model}")]
    ForeignKeyCycle { model: String },
}
