//! Static introspection for presentation layers.
//!
//! Tree and property views consume the model through this narrow contract
//! instead of reflecting over struct fields: each entity type declares its
//! child entities and the scalar properties it exposes, in display order.
//! Derived values are read-only; non-data wiring (the observer seam, the
//! sink configuration) is never listed.

use std::fmt;

use crate::model::{Room, Wall};

/// A scalar value shown in a property table cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Int(usize),
    Float(f64),
    /// The model holds no value yet.
    Undefined,
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Int(v) => write!(f, "{v}"),
            PropertyValue::Float(v) => write!(f, "{v}"),
            PropertyValue::Undefined => f.write_str("-"),
        }
    }
}

impl From<Option<f64>> for PropertyValue {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => PropertyValue::Float(v),
            None => PropertyValue::Undefined,
        }
    }
}

/// One row of a property table.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarProperty {
    /// Property name, matching the persisted field name.
    pub name: &'static str,
    pub value: PropertyValue,
    /// Whether an editor may write this property back through a setter.
    pub editable: bool,
}

impl ScalarProperty {
    fn new(name: &'static str, value: PropertyValue, editable: bool) -> Self {
        Self {
            name,
            value,
            editable,
        }
    }
}

/// Entities a tree/property view can display.
pub trait Inspect {
    /// Caption for the entity's tree node.
    fn label(&self) -> String;

    /// Child entities in display order; empty for leaves.
    fn children(&self) -> Vec<&dyn Inspect>;

    /// Scalar properties in display order.
    fn scalar_properties(&self) -> Vec<ScalarProperty>;
}

impl Inspect for Room {
    fn label(&self) -> String {
        "Room".to_string()
    }

    fn children(&self) -> Vec<&dyn Inspect> {
        self.walls().iter().map(|w| w as &dyn Inspect).collect()
    }

    fn scalar_properties(&self) -> Vec<ScalarProperty> {
        vec![
            ScalarProperty::new("length", PropertyValue::Float(self.length()), true),
            ScalarProperty::new("width", PropertyValue::Float(self.width()), true),
            ScalarProperty::new("height", PropertyValue::Float(self.height()), true),
            ScalarProperty::new("temperature", self.temperature().into(), true),
            ScalarProperty::new("heat_loss", PropertyValue::Float(self.heat_loss()), false),
        ]
    }
}

impl Inspect for Wall {
    fn label(&self) -> String {
        format!("Wall {}", self.index())
    }

    fn children(&self) -> Vec<&dyn Inspect> {
        Vec::new()
    }

    fn scalar_properties(&self) -> Vec<ScalarProperty> {
        vec![
            ScalarProperty::new("index", PropertyValue::Int(self.index()), false),
            ScalarProperty::new("Area", self.area().into(), false),
            ScalarProperty::new("UValue", self.u_value().into(), true),
            ScalarProperty::new("Q", self.heat_flow().into(), false),
        ]
    }
}
