pub mod boundary;
pub mod camera;
pub mod plugin;
pub mod spheres;
pub mod ui;
