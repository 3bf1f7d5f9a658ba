use std::collections::HashMap;

use bevy::prelude::*;
use bevy::window::CursorGrabMode;

use crate::options::VisualizerOptions;
use crate::search::SearchKind;
use crate::viewer::ViewerCommand;

/// Longest target the keyboard will type into a field.
const MAX_TARGET_LEN: usize = 12;

/// Whether the mouse drives the UI or the camera.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Cursor visible and free; keyboard edits the target fields.
    #[default]
    Pointer,
    /// Cursor grabbed; the orbit controller is enabled.
    Navigator,
}

/// The text typed into each target field and which field has focus.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct TargetInputs {
    values: HashMap<SearchKind, String>,
    focus: SearchKind,
}

impl TargetInputs {
    /// Fields prefilled with the configured startup targets.
    pub fn new(options: &VisualizerOptions) -> Self {
        let values = HashMap::from([
            (SearchKind::Bfs, options.bfs_target.to_string()),
            (SearchKind::Dfs, options.dfs_target.to_string()),
        ]);
        Self {
            values,
            focus: SearchKind::Bfs,
        }
    }

    pub fn get(&self, kind: SearchKind) -> &str {
        self.values.get(&kind).map(String::as_str).unwrap_or("")
    }

    pub fn focus(&self) -> SearchKind {
        self.focus
    }

    pub fn set_focus(&mut self, kind: SearchKind) {
        self.focus = kind;
    }

    /// Move focus to the other field.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            SearchKind::Bfs => SearchKind::Dfs,
            SearchKind::Dfs => SearchKind::Bfs,
        };
    }

    /// Append a character to the focused field. Returns false if it was refused.
    pub fn push(&mut self, ch: char) -> bool {
        let field = self.values.entry(self.focus).or_default();
        let accepted = match ch {
            '0'..='9' => field.len() < MAX_TARGET_LEN,
            '-' => field.is_empty(),
            _ => false,
        };
        if accepted {
            field.push(ch);
        }
        accepted
    }

    /// Remove the last character of the focused field.
    pub fn pop(&mut self) {
        if let Some(field) = self.values.get_mut(&self.focus) {
            field.pop();
        }
    }
}

fn key_char(key: KeyCode) -> Option<char> {
    let ch = match key {
        KeyCode::Digit0 | KeyCode::Numpad0 => '0',
        KeyCode::Digit1 | KeyCode::Numpad1 => '1',
        KeyCode::Digit2 | KeyCode::Numpad2 => '2',
        KeyCode::Digit3 | KeyCode::Numpad3 => '3',
        KeyCode::Digit4 | KeyCode::Numpad4 => '4',
        KeyCode::Digit5 | KeyCode::Numpad5 => '5',
        KeyCode::Digit6 | KeyCode::Numpad6 => '6',
        KeyCode::Digit7 | KeyCode::Numpad7 => '7',
        KeyCode::Digit8 | KeyCode::Numpad8 => '8',
        KeyCode::Digit9 | KeyCode::Numpad9 => '9',
        KeyCode::Minus | KeyCode::NumpadSubtract => '-',
        _ => return None,
    };
    Some(ch)
}

/// Tab toggles between Pointer and Navigator mode.
pub fn toggle_input_mode(keys: Res<ButtonInput<KeyCode>>, mut input_mode: ResMut<InputMode>) {
    if keys.just_pressed(KeyCode::Tab) {
        *input_mode = match *input_mode {
            InputMode::Pointer => {
                info!("Switched to Navigator mode");
                InputMode::Navigator
            }
            InputMode::Navigator => {
                info!("Switched to Pointer mode");
                InputMode::Pointer
            }
        };
    }
}

/// Grab the cursor in Navigator mode and release it in Pointer mode.
pub fn update_cursor_state(input_mode: Res<InputMode>, mut windows: Query<&mut Window>) {
    if !input_mode.is_changed() {
        return;
    }

    for mut window in windows.iter_mut() {
        match *input_mode {
            InputMode::Pointer => {
                window.cursor_options.visible = true;
                window.cursor_options.grab_mode = CursorGrabMode::None;
            }
            InputMode::Navigator => {
                window.cursor_options.visible = false;
                window.cursor_options.grab_mode = CursorGrabMode::Locked;
            }
        }
    }
}

/// Keyboard editing of the target fields, Pointer mode only.
///
/// Digits and `-` type, Backspace deletes, Space switches field, Enter runs
/// the focused search and `R` restores default colors.
pub fn edit_targets(
    keys: Res<ButtonInput<KeyCode>>,
    input_mode: Res<InputMode>,
    mut inputs: ResMut<TargetInputs>,
    mut commands_out: EventWriter<ViewerCommand>,
) {
    if *input_mode != InputMode::Pointer {
        return;
    }

    for &key in keys.get_just_pressed() {
        match key {
            KeyCode::Space => inputs.toggle_focus(),
            KeyCode::Backspace => inputs.pop(),
            KeyCode::Enter | KeyCode::NumpadEnter => {
                commands_out.send(ViewerCommand::Run(inputs.focus()));
            }
            KeyCode::KeyR => {
                commands_out.send(ViewerCommand::Reset);
            }
            other => {
                if let Some(ch) = key_char(other) {
                    inputs.push(ch);
                }
            }
        }
    }
}
