// ndefshare/src/tag/mod.rs

//! Emulated tag file model: the fixed file buffers served to the reader
//! and the bookkeeping that tracks which bytes were confirmed delivered.

pub mod file;
pub mod layout;

pub use file::File;
