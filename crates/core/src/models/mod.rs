pub mod base;
pub mod project;
pub mod symbol;

pub use base::*;
pub use project::*;
pub use symbol::*;
