pub mod entities;
pub mod policies;
pub mod ports;
pub mod query;
pub mod services;
pub mod value_objects;
