mod directory;
mod storage;

pub use directory::{create_directory, read_directory};
pub use storage::storage_roots;
