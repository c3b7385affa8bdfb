//! The reactive room/wall data model.
//!
//! A [`Room`] owns exactly six [`Wall`]s with fixed orientation roles.
//! Geometry setters drive a two-phase update: each affected wall's area is
//! reassigned and notifies the [`WallObserver`] seam, whose reaction
//! refreshes that wall's heat flow only; the setter then explicitly
//! recomputes the aggregate. The observer seam never updates the aggregate.

pub mod observer;
pub mod room;
pub mod sinks;
pub mod wall;

pub use observer::WallObserver;
pub use room::{Room, WALL_COUNT};
pub use sinks::SinkTemperatures;
pub use wall::Wall;
