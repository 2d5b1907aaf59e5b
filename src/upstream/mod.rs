pub mod error;
pub mod github;
#[cfg(test)]
pub mod mock;
pub mod traits;

pub use error::*;
pub use github::*;
pub use traits::*;
