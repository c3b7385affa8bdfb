use serde::{Deserialize, Serialize};

use crate::error::{ComputationError, HeatLossResult, ValidationError};

use super::observer::WallObserver;
use super::sinks::SinkTemperatures;

/// One of the six walls of a rectangular room.
///
/// A wall owns its derived area and heat flow and its externally supplied
/// U-value. The orientation role is fixed by `index` for the lifetime of the
/// wall: index 0 is the floor, facing the ground sink; indices 1-5 face the
/// external sink. Area and heat flow stay undefined until the geometry and
/// boundary conditions that derive them exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    index: usize,
    #[serde(rename = "Area")]
    area: Option<f64>,
    #[serde(rename = "UValue")]
    u_value: Option<f64>,
    #[serde(rename = "Q")]
    q: Option<f64>,
}

impl Wall {
    /// Creates a blank wall with the given orientation index.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            area: None,
            u_value: None,
            q: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Area in m², undefined until a geometry setter has run.
    pub fn area(&self) -> Option<f64> {
        self.area
    }

    /// Thermal transmittance in W/(m²·K), undefined until supplied.
    pub fn u_value(&self) -> Option<f64> {
        self.u_value
    }

    /// Heat flow in W, undefined until area, U-value, and the room
    /// temperature have all been available to a recompute.
    pub fn heat_flow(&self) -> Option<f64> {
        self.q
    }

    /// Assigns the area from the two paired room dimensions and notifies the
    /// observer, whether or not the value changed.
    pub fn set_area(&mut self, x: f64, y: f64, observer: &mut dyn WallObserver) {
        self.area = Some(x * y);
        observer.wall_area_changed(self);
    }

    /// Sets the thermal transmittance.
    ///
    /// Zero is allowed (a perfectly insulating wall); negative or non-finite
    /// values are rejected.
    pub fn set_u_value(&mut self, value: f64) -> HeatLossResult<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::InvalidUValue { value }.into());
        }
        self.u_value = Some(value);
        Ok(())
    }

    /// Recomputes the heat flow `Q = A × U × (T_room − T_sink)`.
    ///
    /// Fails with a [`ComputationError`] naming the missing input when the
    /// area, the U-value, or the room temperature is undefined; the stored
    /// heat flow is left untouched in that case.
    pub fn compute_heat_flow(
        &mut self,
        temperature: Option<f64>,
        sinks: &SinkTemperatures,
    ) -> HeatLossResult<f64> {
        let area = self
            .area
            .ok_or(ComputationError::UndefinedArea { wall: self.index })?;
        let u_value = self
            .u_value
            .ok_or(ComputationError::UndefinedUValue { wall: self.index })?;
        let temperature = temperature.ok_or(ComputationError::UndefinedTemperature)?;

        let q = area * u_value * (temperature - self.sink_temperature(sinks));
        self.q = Some(q);
        Ok(q)
    }

    /// Recomputes the heat flow if every input is available.
    ///
    /// Reactive counterpart of [`Wall::compute_heat_flow`]: an area change
    /// may arrive while the model is still being populated, so a missing
    /// U-value or room temperature leaves the heat flow undefined instead of
    /// failing.
    pub fn refresh_heat_flow(&mut self, temperature: Option<f64>, sinks: &SinkTemperatures) {
        if let (Some(area), Some(u_value), Some(temperature)) =
            (self.area, self.u_value, temperature)
        {
            self.q = Some(area * u_value * (temperature - self.sink_temperature(sinks)));
        }
    }

    /// Temperature on the far side of this wall: ground for the floor,
    /// external air for every other orientation.
    pub fn sink_temperature(&self, sinks: &SinkTemperatures) -> f64 {
        if self.index == 0 {
            sinks.ground
        } else {
            sinks.external
        }
    }
}
