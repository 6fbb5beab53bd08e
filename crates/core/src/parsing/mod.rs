pub mod address;
pub mod label;
pub mod number;

pub use address::*;
pub use label::*;
pub use number::*;
