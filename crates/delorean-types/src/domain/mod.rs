mod code;
mod entry;
mod source;

pub use code::*;
pub use entry::*;
pub use source::*;
