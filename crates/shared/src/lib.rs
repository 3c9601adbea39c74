mod date;
mod error;
mod event;
mod progress;
mod raw;
mod status;

pub use date::*;
pub use error::*;
pub use event::*;
pub use progress::*;
pub use raw::*;
pub use status::*;
