pub mod conversion;
pub mod definition;
pub mod export;
pub mod kind;

pub use conversion::*;
pub use definition::*;
pub use export::*;
pub use kind::*;
