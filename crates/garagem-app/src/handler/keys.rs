//! Key event handlers for different UI modes

use garagem_core::LoadPhase;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::navigation::Screen;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode() {
        UiMode::Notice => handle_key_notice(key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(state, key),
        UiMode::List => handle_key_list(key),
        UiMode::FilterInput => handle_key_filter_input(state, key),
        UiMode::Detail => handle_key_detail(key),
        UiMode::Form => handle_key_form(state, key),
    }
}

/// Any acknowledging key closes a notice
fn handle_key_notice(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ' | 'q' | 'o') => {
            Some(Message::DismissNotice)
        }
        _ => None,
    }
}

fn handle_key_confirm_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    let dialog = state.confirm_dialog.as_ref()?;
    match key {
        InputKey::Char('y' | 'Y') => dialog.accept_message(),
        InputKey::Char('n' | 'N') | InputKey::Esc => dialog.cancel_message(),
        InputKey::Enter => Some(Message::DialogActivate),
        InputKey::Left | InputKey::BackTab | InputKey::Char('h') => {
            Some(Message::DialogSelectPrevious)
        }
        InputKey::Right | InputKey::Tab | InputKey::Char('l') => Some(Message::DialogSelectNext),
        _ => None,
    }
}

fn handle_key_list(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        InputKey::Char('j') | InputKey::Down => Some(Message::SelectNext),
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectPrevious),
        InputKey::Enter => Some(Message::OpenSelected),
        InputKey::Char('n' | '+') => Some(Message::NewVehicle),
        InputKey::Char('/') => Some(Message::StartFilterEdit),
        InputKey::Char('c') => Some(Message::ClearFilters),
        InputKey::Char('r') => Some(Message::Refresh),
        _ => None,
    }
}

fn handle_key_filter_input(state: &AppState, key: InputKey) -> Option<Message> {
    let list = state.navigator.top().screen.as_list()?;
    let field = list.filter_focus;
    let current = list.filter().get(field);

    match key {
        InputKey::Esc | InputKey::Enter => Some(Message::StopFilterEdit),
        InputKey::Tab => Some(Message::NextFilterField),
        InputKey::BackTab => Some(Message::PreviousFilterField),
        InputKey::Down => Some(Message::SelectNext),
        InputKey::Up => Some(Message::SelectPrevious),
        InputKey::Backspace => {
            let mut text = current.to_string();
            text.pop();
            Some(Message::FilterInput { field, text })
        }
        InputKey::CharCtrl('u') => Some(Message::FilterInput {
            field,
            text: String::new(),
        }),
        InputKey::Char(c) => {
            let mut text = current.to_string();
            text.push(c);
            Some(Message::FilterInput { field, text })
        }
        _ => None,
    }
}

fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::Backspace => Some(Message::NavigateBack),
        InputKey::Char('e') => Some(Message::EditVehicle),
        InputKey::Char('d') => Some(Message::RequestDelete),
        InputKey::Char('r') => Some(Message::Refresh),
        _ => None,
    }
}

fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    let Screen::Form(form) = &state.navigator.top().screen else {
        return None;
    };

    match key {
        InputKey::Esc => return Some(Message::NavigateBack),
        InputKey::Tab | InputKey::Down => return Some(Message::FormFocusNext),
        InputKey::BackTab | InputKey::Up => return Some(Message::FormFocusPrevious),
        _ => {}
    }

    // Hydration failed: 'r' retries, nothing is editable
    if form.phase == LoadPhase::Error {
        return match key {
            InputKey::Char('r') => Some(Message::Refresh),
            _ => None,
        };
    }

    let field = form.focused;
    let current = form.form.value(field);
    match key {
        InputKey::Enter | InputKey::CharCtrl('s') => Some(Message::SubmitForm),
        InputKey::Backspace => {
            let mut text = current.to_string();
            text.pop();
            Some(Message::FormInput { field, text })
        }
        InputKey::CharCtrl('u') => Some(Message::FormInput {
            field,
            text: String::new(),
        }),
        InputKey::Char(c) => {
            // Year takes digits only; other keys are swallowed
            if !field.accepts(c) {
                return None;
            }
            let mut text = current.to_string();
            text.push(c);
            Some(Message::FormInput { field, text })
        }
        _ => None,
    }
}
