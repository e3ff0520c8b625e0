pub mod air;
pub mod color;
pub mod file_formats;
pub mod process;
