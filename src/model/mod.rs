pub mod error_message;
pub mod repository;
pub mod upstream;

pub use error_message::*;
pub use repository::*;
pub use upstream::*;
