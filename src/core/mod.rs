pub mod action_bindings;
pub mod app;
pub mod event;
pub mod form_data;
pub mod reducer;
pub mod state;
pub mod step;
pub mod validation;
pub mod wizard;
