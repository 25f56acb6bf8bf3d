pub mod booking;
pub mod commands;
pub mod errors;
pub mod value_objects;

pub use errors::*;
pub use value_objects::*;
