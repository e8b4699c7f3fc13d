use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("catalog `{name}` is not a valid message catalog: {source}")]
    CatalogParse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog `{name}` has too many entries (max {max})")]
    CatalogTooLarge { name: String, max: usize },

    #[error("invalid locale tag `{0}`")]
    InvalidLocale(String),

    #[error("template data is not serializable: {0}")]
    TemplateData(#[from] serde_json::Error),
}
