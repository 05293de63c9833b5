mod file_info;
mod file_system;

pub use file_info::FileInfo;
pub use file_system::FileSystem;
