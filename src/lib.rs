#![doc = include_str!("../README.md")]

pub mod bbox;
mod cast;
mod error;
pub mod interval;
mod r#type;
pub mod util;

pub use bbox::BoundingBox;
pub use cast::{boxes_from_coords, boxes_from_coords_mut};
pub use error::GeoBoxError;
pub use interval::Interval;
pub use r#type::GeomNum;
