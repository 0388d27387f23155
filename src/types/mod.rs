pub mod extension;
pub mod fix;
pub mod flight;
pub mod value;

pub use extension::*;
pub use fix::*;
pub use flight::*;
pub use value::*;
