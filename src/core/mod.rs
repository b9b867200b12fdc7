pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod id_gen;
pub mod layer;
pub mod palette;
pub mod selection;
pub mod store;
