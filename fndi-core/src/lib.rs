#![forbid(unsafe_code)]

mod diagnostics;
mod error;
mod func;
mod impls;
mod inject;
mod traits;
mod value;

pub use diagnostics::*;
pub use error::*;
pub use func::*;
pub use inject::{assert_fn, inject};
pub use traits::*;
pub use value::*;
