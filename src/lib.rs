pub mod config;
pub mod form;
pub mod predict;
pub mod roster;
pub mod state;
