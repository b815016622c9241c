pub mod collide;
pub mod config;
pub mod geom;
#[cfg(feature = "gui")]
pub mod gui;
pub mod logging;
pub mod raster;
pub mod render;
pub mod surface;
pub mod world;
