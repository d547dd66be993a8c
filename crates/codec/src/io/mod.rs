//! Reading and writing word tables.
//!
//! Tables can be imported from a plain newline-separated word list, or
//! saved to and loaded from a directory holding the precompiled binary
//! tables.

pub mod format;
pub mod load;
pub mod save;

pub use format::Manifest;
pub use load::{TableLoader, WordListOptions};
pub use save::TableSaver;
