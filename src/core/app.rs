use crate::action_bindings::ActionBindings;
use crate::config::WizardConfig;
use crate::event::Action;
use crate::form_data::FormData;
use crate::frame::Frame;
use crate::options::RenderOptions;
use crate::reducer::{Effect, Reducer};
use crate::renderer::Renderer;
use crate::state::AppState;
use crate::step_renderer::StepRenderer;
use crate::terminal::{KeyEvent, Terminal};
use crate::theme::Theme;
use std::io;
use tracing::{debug, info, warn};

pub struct App {
    pub state: AppState,
    pub renderer: Renderer,
    action_bindings: ActionBindings,
    theme: Theme,
    options: RenderOptions,
}

impl App {
    pub fn new(config: &WizardConfig) -> Self {
        Self {
            state: AppState::new(config.display.password_mask),
            renderer: Renderer::new(),
            action_bindings: ActionBindings::new(),
            theme: Theme::default_theme(),
            options: config.render_options(),
        }
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) {
        let action = self
            .action_bindings
            .handle_key(&key_event)
            .unwrap_or(Action::InputKey(key_event));
        self.dispatch(action);
    }

    pub fn dispatch(&mut self, action: Action) {
        let effects = Reducer::reduce(&mut self.state, action);
        self.apply_effects(effects);
    }

    pub fn view(&self) -> Frame {
        StepRenderer::render(&self.state, &self.theme, &self.options)
    }

    pub fn render(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        let frame = self.view();
        self.renderer.render(&frame, terminal)
    }

    pub fn should_exit(&self) -> bool {
        self.state.should_exit
    }

    /// The entered values, once the final step has been submitted.
    pub fn submitted_data(&self) -> Option<&FormData> {
        self.state
            .wizard
            .is_submitted()
            .then(|| self.state.wizard.form_data())
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FieldEdited { field } => debug!(%field, "input synced"),
                Effect::StepChanged { from, to } => {
                    debug!(
                        from,
                        to,
                        label = self.state.wizard.current_step().label,
                        "step shown"
                    );
                }
                Effect::ValidationFailed { step, message } => {
                    warn!(step, %message, "step rejected");
                }
                Effect::Submitted => info!("form submitted"),
                Effect::Exited => info!(
                    submitted = self.state.wizard.is_submitted(),
                    "wizard closed"
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::config::WizardConfig;
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

    fn app() -> App {
        let mut config = WizardConfig::default();
        config.display.show_hints = false;
        App::new(&config)
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(KeyEvent::plain(KeyCode::Char(ch)));
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::plain(code));
    }

    fn clear_input(app: &mut App) {
        press(app, KeyCode::End);
        for _ in 0..32 {
            press(app, KeyCode::Backspace);
        }
    }

    #[test]
    fn full_walkthrough_by_keyboard() {
        let mut app = app();

        press(&mut app, KeyCode::Enter);
        assert!(app.view().contains_text("Name is required."));
        assert_eq!(app.state.wizard.current_index(), 0);

        type_text(&mut app, "Ada");
        assert!(!app.view().contains_text("Name is required."));
        press(&mut app, KeyCode::Enter);
        assert!(app.view().contains_text("Step 2: Email"));

        type_text(&mut app, "bad");
        press(&mut app, KeyCode::Enter);
        assert!(app.view().contains_text("Enter a valid email address."));
        clear_input(&mut app);
        type_text(&mut app, "a@b.com");
        press(&mut app, KeyCode::Enter);
        assert!(app.view().contains_text("Step 3: Date of Birth"));

        press(&mut app, KeyCode::Enter);
        assert!(app.view().contains_text("Date of birth is required."));
        type_text(&mut app, "20000101");
        press(&mut app, KeyCode::Enter);
        assert!(app.view().contains_text("Step 4: Password"));

        type_text(&mut app, "abc");
        press(&mut app, KeyCode::Enter);
        assert!(app.view().contains_text("Password must be at least 6 characters."));
        assert!(app.submitted_data().is_none());

        type_text(&mut app, "def");
        press(&mut app, KeyCode::Enter);
        assert!(app.should_exit());

        let data = app.submitted_data().expect("submitted");
        assert_eq!(data.name, "Ada");
        assert_eq!(data.email, "a@b.com");
        assert_eq!(data.dob, "2000-01-01");
        assert_eq!(data.password, "abcdef");

        let lines = app.view().plain_lines();
        assert_eq!(
            lines,
            vec![
                "Success!",
                "Name: Ada",
                "Email: a@b.com",
                "DOB: 2000-01-01",
                "Password: abcdef",
            ]
        );
    }

    #[test]
    fn back_keeps_previous_values() {
        let mut app = app();
        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "a@b");

        app.handle_key(KeyEvent::ctrl('b'));
        assert!(app.view().contains_text("[Ada"));

        press(&mut app, KeyCode::Enter);
        assert!(app.view().contains_text("[a@b"));
        assert_eq!(app.state.wizard.form_data().email, "a@b");
    }

    #[test]
    fn tab_to_back_button_and_activate() {
        let mut app = app();
        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view().cursor(), None);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.wizard.current_index(), 0);
    }

    #[test]
    fn escape_exits_without_submitting() {
        let mut app = app();
        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Esc);
        assert!(app.should_exit());
        assert!(app.submitted_data().is_none());
    }

    #[test]
    fn shift_backtab_cycles_backwards() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        press(&mut app, KeyCode::Enter);
        assert!(app.view().contains_text("Name is required."));
    }
}
