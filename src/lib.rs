pub mod band;
pub mod config;
pub mod constants;
pub mod control;
pub mod editor;
pub mod equalizer;
pub mod graph;
pub mod options;
pub mod plotter;
pub mod scene;
pub mod theme;
pub mod utils;
