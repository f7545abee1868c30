//! I/O layer for reading source PNGs and writing processed assets.
//! Provides the RGBA `reader`, idempotent `backup` copies, and `writers`
//! for PNG/JPEG outputs and JSON sidecars.
pub mod backup;
pub mod reader;
pub mod writers;

pub use backup::{backup_path_for, ensure_backup};
pub use reader::{file_size_kb, open_rgba};
