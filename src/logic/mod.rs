pub mod repository_ops;

pub use repository_ops::*;
