//! Command and query operations of [`Elevator`](crate::elevator::Elevator),
//! one concern per file.

pub mod lamps;
pub mod motor;
pub mod sensors;
