pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{ForgeError, Result};
pub use tolerance::Tolerance;
pub use traits::Validate;
