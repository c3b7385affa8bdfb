/// Default ground sink temperature in °C.
pub const DEFAULT_GROUND_TEMPERATURE: f64 = 10.0;
/// Default external sink temperature in °C.
pub const DEFAULT_EXTERNAL_TEMPERATURE: f64 = 20.0;

/// Sink temperatures on the far side of the room envelope.
///
/// The floor (wall 0) rejects heat to the ground; every other wall rejects
/// heat to the external air. Supplied per room at construction, not shared
/// process-wide state; not part of the persisted model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinkTemperatures {
    /// Ground temperature in °C, seen by the floor.
    pub ground: f64,
    /// External air temperature in °C, seen by every other wall.
    pub external: f64,
}

impl SinkTemperatures {
    pub fn new(ground: f64, external: f64) -> Self {
        Self { ground, external }
    }
}

impl Default for SinkTemperatures {
    fn default() -> Self {
        Self {
            ground: DEFAULT_GROUND_TEMPERATURE,
            external: DEFAULT_EXTERNAL_TEMPERATURE,
        }
    }
}
