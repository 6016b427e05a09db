pub mod frame;
pub mod options;
pub mod renderer;
pub mod span;
pub mod step_renderer;
pub mod style;
pub mod theme;
