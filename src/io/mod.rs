//! File I/O for room models.
//!
//! This module provides functions for reading and writing room heat-loss
//! models in the VFS format.

pub mod vfs;

pub use vfs::{from_vfs_string, read_vfs, to_vfs_string, write_vfs, VFS_EXTENSION};
