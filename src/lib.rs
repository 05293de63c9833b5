//! A thin virtual file system (VFS) facade over pluggable storage drivers.
//! Decouples callers from a concrete storage implementation (local disk,
//! in-memory, remote, etc.) behind a narrow capability-set trait.
//!
//! ### Overview
//!
//! `vfs-facade` defines the generic `Driver` trait — the six primitive file
//! operations any backend must support — and the `FileSystem` facade that
//! binds one driver, converts portable slash-separated paths to the host's
//! native form, and forwards each call to the driver unchanged in semantics.
//!
//! **Key ideas**:
//! - **Abstraction**: Work with different types of storage (real directories, memory maps, remote stores) through a single API.
//! - **Portability**: Callers always write paths with `/`; drivers always receive host-native paths.
//! - **Transparency**: Results and errors come back from the driver verbatim, with no wrapping or reinterpretation.
//! - **Testability**: Swap in a capturing or in-memory driver in unit tests without side effects.
//! - **Safety**: A `FileSystem` cannot be constructed without a driver, so the "no driver" misuse class does not exist.

mod core;
mod fs;

pub use crate::core::{Driver, FileMode, Result};
pub use crate::fs::{FileInfo, FileSystem};
