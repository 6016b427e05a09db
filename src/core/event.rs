use crate::terminal::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Exit,
    Confirm,
    Back,
    FocusNext,
    FocusPrev,
    DeleteWord,
    InputKey(KeyEvent),
}
