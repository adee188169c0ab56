use thiserror::Error;

use crate::model::ConfigError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
}
