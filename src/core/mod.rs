pub mod config;
pub mod network;
pub mod pattern;
pub mod shape;
pub mod state;
pub mod weights;
