//! Coercion operations.

mod float;
mod int;
pub mod must;
mod numeric;
mod recover;
mod string;
mod target;
mod uint;

pub use float::{can_float, float};
pub use int::{can_int, int};
pub use recover::{maybe, try_catch};
pub use string::{can_string, string};
pub use uint::{can_uint, uint};
