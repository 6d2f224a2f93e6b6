pub mod codec;
pub mod color;
pub mod encoding;
pub mod error;
pub mod modifier;

pub use color::Color;
pub use encoding::Encoding;
pub use error::{ColorError, Result};
pub use modifier::{Channel, Modifier, Operation};
