pub mod project;
pub mod resolver;

pub use project::*;
pub use resolver::*;
