//! Steady-state heat-loss model for a rectangular room.
//!
//! A [`Room`] derives its six wall areas from its dimensions, combines them
//! with user-supplied U-values and temperatures into per-wall heat flows,
//! and aggregates those into a single heat-loss figure. Models persist to
//! and from `.vfs` (JSON) files.

pub mod error;
pub mod inspect;
pub mod io;
pub mod model;

// Prelude
pub use error::{
    ComputationError, HeatLossError, HeatLossResult, SerializationError, ValidationError,
};
pub use inspect::{Inspect, PropertyValue, ScalarProperty};
pub use io::{read_vfs, write_vfs};
pub use model::{Room, SinkTemperatures, Wall, WallObserver};
