pub mod accept;
pub mod error;
pub mod handlers;
pub mod routes;

pub use accept::*;
pub use error::*;
pub use handlers::*;
pub use routes::*;
