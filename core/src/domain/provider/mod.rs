pub mod entities;
pub mod geo;
pub mod normalizer;
pub mod ports;
pub mod resources;
pub mod services;
pub mod strategies;
pub mod value_objects;
