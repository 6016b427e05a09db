use crate::event::Action;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn from_key_event(event: &KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

pub struct ActionBindings {
    bindings: HashMap<KeyBinding, Action>,
}

impl ActionBindings {
    pub fn new() -> Self {
        let mut manager = Self {
            bindings: HashMap::new(),
        };
        manager.setup_default_bindings();
        manager
    }

    fn setup_default_bindings(&mut self) {
        self.bind(KeyBinding::ctrl(KeyCode::Char('c')), Action::Exit);
        self.bind(KeyBinding::key(KeyCode::Esc), Action::Exit);

        self.bind(KeyBinding::key(KeyCode::Enter), Action::Confirm);
        self.bind(KeyBinding::ctrl(KeyCode::Char('b')), Action::Back);

        self.bind(KeyBinding::key(KeyCode::Tab), Action::FocusNext);
        self.bind(
            KeyBinding::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Action::FocusPrev,
        );
        self.bind(KeyBinding::key(KeyCode::BackTab), Action::FocusPrev);

        self.bind(KeyBinding::ctrl(KeyCode::Backspace), Action::DeleteWord);
        self.bind(KeyBinding::ctrl(KeyCode::Char('w')), Action::DeleteWord);
    }

    pub fn bind(&mut self, key: KeyBinding, action: Action) {
        self.bindings.insert(key, action);
    }

    pub fn handle_key(&self, key_event: &KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_key_event(key_event);
        self.bindings.get(&binding).cloned()
    }
}

impl Default for ActionBindings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ActionBindings;
    use crate::event::Action;
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn default_bindings() {
        let bindings = ActionBindings::new();
        assert_eq!(bindings.handle_key(&KeyEvent::ctrl('c')), Some(Action::Exit));
        assert_eq!(
            bindings.handle_key(&KeyEvent::plain(KeyCode::Enter)),
            Some(Action::Confirm)
        );
        assert_eq!(
            bindings.handle_key(&KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Action::FocusPrev)
        );
        assert_eq!(bindings.handle_key(&KeyEvent::ctrl('b')), Some(Action::Back));
    }

    #[test]
    fn plain_chars_are_unbound() {
        let bindings = ActionBindings::new();
        assert_eq!(bindings.handle_key(&KeyEvent::plain(KeyCode::Char('b'))), None);
    }
}
