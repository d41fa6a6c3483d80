pub mod boxes;
pub mod color;
pub mod constants;
pub mod layout;

pub use boxes::*;
pub use color::*;
pub use layout::*;
