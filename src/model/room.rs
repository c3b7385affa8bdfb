use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ComputationError, HeatLossResult, ValidationError};

use super::observer::WallObserver;
use super::sinks::SinkTemperatures;
use super::wall::Wall;

/// Number of walls of a rectangular room.
pub const WALL_COUNT: usize = 6;

/// Walls whose area depends on the room length.
const LENGTH_WALLS: [usize; 4] = [0, 3, 4, 5];
/// Walls whose area depends on the room width.
const WIDTH_WALLS: [usize; 4] = [0, 1, 2, 5];
/// Walls whose area depends on the room height.
const HEIGHT_WALLS: [usize; 4] = [1, 2, 3, 4];
/// All walls, in index order.
const ALL_WALLS: [usize; WALL_COUNT] = [0, 1, 2, 3, 4, 5];

/// A rectangular room losing heat through its six walls.
///
/// The room owns its walls and mediates every mutation. Geometry and U-value
/// setters run a two-phase update: first the affected walls' areas are
/// reassigned, each change notifying the observer seam, whose reaction
/// refreshes that wall's heat flow only; then the setter explicitly
/// recomputes the aggregate over all six walls. The observer seam never
/// touches the aggregate, so [`Room::heat_loss`] is exact only as of the
/// last aggregate recompute.
///
/// Wall roles are fixed at construction:
///
/// | index | area          | faces    |
/// |-------|---------------|----------|
/// | 0     | width × length | ground   |
/// | 1, 2  | width × height | external |
/// | 3, 4  | length × height | external |
/// | 5     | width × length | external |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    length: f64,
    width: f64,
    height: f64,
    temperature: Option<f64>,
    heat_loss: f64,
    walls: [Wall; WALL_COUNT],
    #[serde(skip, default)]
    sinks: SinkTemperatures,
}

/// Local-phase reaction: refresh the changed wall's heat flow, nothing else.
struct HeatFlowRefresh {
    temperature: Option<f64>,
    sinks: SinkTemperatures,
}

impl WallObserver for HeatFlowRefresh {
    fn wall_area_changed(&mut self, wall: &mut Wall) {
        wall.refresh_heat_flow(self.temperature, &self.sinks);
    }
}

impl Room {
    /// Creates a room with the given dimensions (m) and default sink
    /// temperatures.
    ///
    /// All six wall areas are derived immediately; U-values, the room
    /// temperature, and heat flows stay undefined until supplied.
    pub fn new(length: f64, width: f64, height: f64) -> HeatLossResult<Self> {
        Self::with_sinks(length, width, height, SinkTemperatures::default())
    }

    /// Creates a room with explicit sink temperatures.
    pub fn with_sinks(
        length: f64,
        width: f64,
        height: f64,
        sinks: SinkTemperatures,
    ) -> HeatLossResult<Self> {
        validate_dimension("length", length)?;
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;

        let mut room = Self {
            length,
            width,
            height,
            temperature: None,
            heat_loss: 0.0,
            walls: std::array::from_fn(Wall::new),
            sinks,
        };
        room.refresh_wall_areas(&ALL_WALLS);
        Ok(room)
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Room air temperature in °C, undefined until set.
    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    /// Aggregate heat loss in W, as of the last aggregate recompute.
    ///
    /// Not an always-consistent derived value: between a wall-level change
    /// and the next [`Room::compute_aggregate_heat_loss`] it may be stale.
    pub fn heat_loss(&self) -> f64 {
        self.heat_loss
    }

    /// The six walls in index order.
    pub fn walls(&self) -> &[Wall; WALL_COUNT] {
        &self.walls
    }

    /// One wall by index.
    pub fn wall(&self, index: usize) -> HeatLossResult<&Wall> {
        self.check_wall_index(index)?;
        Ok(&self.walls[index])
    }

    /// Sink temperatures this room rejects heat to.
    pub fn sinks(&self) -> SinkTemperatures {
        self.sinks
    }

    /// Sets the room length, rederives the affected wall areas, and
    /// recomputes the aggregate heat loss.
    ///
    /// Walls 0, 3, 4, and 5 are touched; walls 1 and 2 keep their areas.
    pub fn set_length(&mut self, length: f64) -> HeatLossResult<()> {
        validate_dimension("length", length)?;
        self.length = length;
        self.refresh_wall_areas(&LENGTH_WALLS);
        self.compute_aggregate_heat_loss()?;
        Ok(())
    }

    /// Sets the room width, rederives the affected wall areas, and
    /// recomputes the aggregate heat loss.
    ///
    /// Walls 0, 1, 2, and 5 are touched; walls 3 and 4 keep their areas.
    pub fn set_width(&mut self, width: f64) -> HeatLossResult<()> {
        validate_dimension("width", width)?;
        self.width = width;
        self.refresh_wall_areas(&WIDTH_WALLS);
        self.compute_aggregate_heat_loss()?;
        Ok(())
    }

    /// Sets the room height, rederives the affected wall areas, and
    /// recomputes the aggregate heat loss.
    ///
    /// Walls 1, 2, 3, and 4 are touched; walls 0 and 5 keep their areas.
    pub fn set_height(&mut self, height: f64) -> HeatLossResult<()> {
        validate_dimension("height", height)?;
        self.height = height;
        self.refresh_wall_areas(&HEIGHT_WALLS);
        self.compute_aggregate_heat_loss()?;
        Ok(())
    }

    /// Sets the room air temperature.
    ///
    /// Stores the boundary condition only: no wall heat flow and not the
    /// aggregate is recomputed. Geometry and U-value setters recompute
    /// because they change the model itself; after a temperature change the
    /// re-derivation is the caller's explicit [`Room::recompute_heat_loss`].
    pub fn set_room_temperature(&mut self, temperature: f64) -> HeatLossResult<()> {
        if !temperature.is_finite() {
            return Err(ValidationError::InvalidTemperature { value: temperature }.into());
        }
        self.temperature = Some(temperature);
        Ok(())
    }

    /// Sets one wall's U-value, immediately recomputes that wall's heat flow
    /// against the current room temperature, then recomputes the aggregate.
    ///
    /// The boundary conditions are fed to the wall directly; the observer
    /// seam is not involved.
    pub fn set_wall_uvalue(&mut self, index: usize, value: f64) -> HeatLossResult<()> {
        self.check_wall_index(index)?;
        let (temperature, sinks) = (self.temperature, self.sinks);
        let wall = &mut self.walls[index];
        wall.set_u_value(value)?;
        wall.compute_heat_flow(temperature, &sinks)?;
        self.compute_aggregate_heat_loss()?;
        Ok(())
    }

    /// Sets all six walls' U-values in index order, then recomputes the
    /// aggregate once.
    pub fn set_wall_uvalues(&mut self, values: [f64; WALL_COUNT]) -> HeatLossResult<()> {
        let (temperature, sinks) = (self.temperature, self.sinks);
        for (wall, value) in self.walls.iter_mut().zip(values) {
            wall.set_u_value(value)?;
            wall.compute_heat_flow(temperature, &sinks)?;
        }
        self.compute_aggregate_heat_loss()?;
        Ok(())
    }

    /// Recomputes one wall's heat flow without changing any input.
    pub fn compute_wall_heat_flow(&mut self, index: usize) -> HeatLossResult<f64> {
        self.check_wall_index(index)?;
        let (temperature, sinks) = (self.temperature, self.sinks);
        self.walls[index].compute_heat_flow(temperature, &sinks)
    }

    /// Recomputes every wall's heat flow, e.g. after a temperature change or
    /// after loading a persisted model.
    pub fn compute_all_wall_heat_flows(&mut self) -> HeatLossResult<()> {
        let (temperature, sinks) = (self.temperature, self.sinks);
        for wall in self.walls.iter_mut() {
            wall.compute_heat_flow(temperature, &sinks)?;
        }
        Ok(())
    }

    /// Sums all six walls' heat flow into the aggregate heat loss.
    ///
    /// Every wall must already have a defined heat flow; otherwise a
    /// [`ComputationError::UndefinedHeatFlow`] names the first incomplete
    /// wall and the stored aggregate is left untouched.
    pub fn compute_aggregate_heat_loss(&mut self) -> HeatLossResult<f64> {
        let mut total = 0.0;
        for wall in &self.walls {
            total += wall
                .heat_flow()
                .ok_or(ComputationError::UndefinedHeatFlow { wall: wall.index() })?;
        }
        self.heat_loss = total;
        trace!(heat_loss = total, "aggregate heat loss recomputed");
        Ok(total)
    }

    /// Recomputes every wall's heat flow and the aggregate in one step.
    pub fn recompute_heat_loss(&mut self) -> HeatLossResult<f64> {
        self.compute_all_wall_heat_flows()?;
        self.compute_aggregate_heat_loss()
    }

    /// Reassigns the areas of the given walls from the pairing table, each
    /// change notifying the local-phase reaction.
    fn refresh_wall_areas(&mut self, indices: &[usize]) {
        let mut reaction = HeatFlowRefresh {
            temperature: self.temperature,
            sinks: self.sinks,
        };
        for &index in indices {
            let (x, y) = self.paired_dimensions(index);
            self.walls[index].set_area(x, y, &mut reaction);
        }
    }

    /// Geometric pairing: the two dimensions whose product is this wall's
    /// area.
    fn paired_dimensions(&self, index: usize) -> (f64, f64) {
        match index {
            0 | 5 => (self.width, self.length),
            1 | 2 => (self.width, self.height),
            3 | 4 => (self.length, self.height),
            _ => unreachable!("a room has walls 0-5"),
        }
    }

    fn check_wall_index(&self, index: usize) -> Result<(), ValidationError> {
        if index >= WALL_COUNT {
            return Err(ValidationError::WallIndexOutOfRange { index });
        }
        Ok(())
    }
}

fn validate_dimension(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::NonPositiveDimension { name, value });
    }
    Ok(())
}
