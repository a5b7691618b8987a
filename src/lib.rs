#![warn(non_snake_case)]

pub mod config;
pub mod graph;
pub mod io;
pub mod options;
pub mod recolor;
pub mod render;
pub mod report;
