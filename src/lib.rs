pub mod app;
pub mod chart;
pub mod cli;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
