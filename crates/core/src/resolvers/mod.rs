pub mod address;
pub mod base;
pub mod label;
pub mod offset;

pub use address::AddressResolver;
pub use base::*;
pub use label::LabelResolver;
pub use offset::OffsetResolver;
