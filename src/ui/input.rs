use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    NextSection,
    PrevSection,
    JumpSection(usize),
    ItemUp,
    ItemDown,
    Activate,
    ToggleMenu,
    OpenAssistant,
    FocusLeft,
    FocusRight,
    ClosePopup,
    Reload,
    Quit,
    None,
}

/// Which layer currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Page,
    Menu,
    Dialog,
}

pub fn map_key(key: KeyEvent, mode: InputMode) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match mode {
        InputMode::Dialog => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::ClosePopup,
            KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => Action::FocusLeft,
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Action::FocusRight,
            KeyCode::Enter => Action::Activate,
            _ => Action::None,
        },
        InputMode::Menu => match key.code {
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => Action::ClosePopup,
            KeyCode::Char('j') | KeyCode::Down => Action::ItemDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ItemUp,
            KeyCode::Enter => Action::Activate,
            KeyCode::Char(c @ '1'..='9') => Action::JumpSection(c as usize - '1' as usize),
            _ => Action::None,
        },
        InputMode::Page => match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Action::NextSection,
            KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => Action::PrevSection,
            KeyCode::Char(c @ '1'..='9') => Action::JumpSection(c as usize - '1' as usize),
            KeyCode::Char('j') | KeyCode::Down => Action::ItemDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ItemUp,
            KeyCode::Enter | KeyCode::Char('o') => Action::Activate,
            KeyCode::Char('m') => Action::ToggleMenu,
            KeyCode::Char('a') => Action::OpenAssistant,
            KeyCode::Char('r') => Action::Reload,
            KeyCode::Esc => Action::ClosePopup,
            _ => Action::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn page_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q')), InputMode::Page), Action::Quit);
        assert_eq!(map_key(key(KeyCode::Tab), InputMode::Page), Action::NextSection);
        assert_eq!(map_key(key(KeyCode::Char('3')), InputMode::Page), Action::JumpSection(2));
        assert_eq!(map_key(key(KeyCode::Char('a')), InputMode::Page), Action::OpenAssistant);
    }

    #[test]
    fn dialog_swallows_page_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q')), InputMode::Dialog), Action::ClosePopup);
        assert_eq!(map_key(key(KeyCode::Char('r')), InputMode::Dialog), Action::None);
        assert_eq!(map_key(key(KeyCode::Tab), InputMode::Dialog), Action::FocusRight);
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [InputMode::Page, InputMode::Menu, InputMode::Dialog] {
            assert_eq!(map_key(ctrl_c, mode), Action::Quit);
        }
    }
}
