pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use crate::core::action_bindings;
pub use crate::core::app;
pub use crate::core::event;
pub use crate::core::form_data;
pub use crate::core::reducer;
pub use crate::core::state;
pub use crate::core::step;
pub use crate::core::validation;
pub use crate::core::wizard;

pub use crate::input::date_input;
pub use crate::input::password_input;
pub use crate::input::text_input;
pub use crate::input::validators;

pub use crate::terminal::terminal_event;

pub use crate::ui::frame;
pub use crate::ui::options;
pub use crate::ui::renderer;
pub use crate::ui::span;
pub use crate::ui::step_renderer;
pub use crate::ui::style;
pub use crate::ui::theme;

pub use crate::core::form_data::{Field, FormData};
pub use crate::core::wizard::{Controls, FormWizard, Outcome, Phase, WizardState};
pub use crate::error::AppError;
