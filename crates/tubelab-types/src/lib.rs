pub mod config;
pub mod error;
pub mod format;
pub mod message;
pub mod video;


pub use error::ClientError;
pub type Result<T> = std::result::Result<T, ClientError>;
