use crate::{config, model, web};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("web error: {0}")]
    Web(#[from] web::Error),
    #[error("model error: {0}")]
    Model(#[from] model::Error),
    #[error("serving error: {0}")]
    Serve(#[from] web::serve::ServeError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
