pub mod config;
pub mod error;
pub mod logger;
pub mod text;

// Re-export commonly used types
pub use config::{AppConfig, SlideMode};
pub use error::DocDeckError;
pub use text::{preview, truncate_chars};
pub type Result<T> = std::result::Result<T, DocDeckError>;
