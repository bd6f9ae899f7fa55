pub mod source;
pub mod view;

pub use source::*;
pub use view::fs::FsDirectoryView;
pub use view::memory::MemoryView;
pub use view::DirectoryView;
