pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid formatter config: {message}")]
    InvalidConfig { message: String },

    #[error("Invalid parsed class data: {message}")]
    InvalidClasses { message: String },
}
