//! Calendar (contribution graph) layout.

mod layout;
mod values;
mod window;

pub use layout::*;
pub use values::*;
pub use window::*;
