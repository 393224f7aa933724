use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{clock::ClockMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // Timer fires
        RawMsg::ClockTick(unit) => vec![Msg::Clock(ClockMsg::Tick(unit))],

        // Host failures
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent host events in domain layer
        RawMsg::Tick => vec![],
    }
}

/// Translates keyboard input to domain events
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Ctrl-c always quits, whatever the bindings say
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    match state.keybindings.get(&key) {
        Some(action) => translate_action_to_msg(*action, state),
        None => vec![],
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::Reset => vec![
            Msg::Clock(ClockMsg::Reset(state.initial_clock)),
            Msg::System(SystemMsg::UpdateStatusMessage("Clock reset".to_string())),
        ],
    }
}
