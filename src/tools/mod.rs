pub mod event;
pub mod search;

pub use event::*;
pub use search::*;
