mod cursor;
mod error;
mod grid;
mod month;

pub use cursor::*;
pub use error::*;
pub use grid::*;
pub use month::*;
