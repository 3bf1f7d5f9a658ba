//! The control panel: one target field, run button and result line per
//! search kind.

use bevy::prelude::*;

use crate::search::SearchKind;
use crate::viewer::input::{InputMode, TargetInputs};
use crate::viewer::{ViewerCommand, ViewerSession};

const PANEL_COLOR: Color = Color::srgba(0.08, 0.1, 0.14, 0.85);
const FIELD_COLOR: Color = Color::srgb(0.2, 0.22, 0.28);
const FOCUSED_FIELD_COLOR: Color = Color::srgb(0.3, 0.36, 0.5);
const BUTTON_COLOR: Color = Color::srgb(0.15, 0.4, 0.25);
const HOVERED_BUTTON_COLOR: Color = Color::srgb(0.2, 0.5, 0.32);
const HINT_COLOR: Color = Color::srgb(0.65, 0.65, 0.65);

const HINT: &str =
    "Tab: toggle camera | Click or Space: switch field | Enter: run | R: reset colors";

/// A "Run BFS" / "Run DFS" button.
#[derive(Component, Debug, Clone, Copy)]
pub struct RunButton(pub SearchKind);

/// The target text of a search kind.
#[derive(Component, Debug, Clone, Copy)]
pub struct TargetField(pub SearchKind);

/// The visited-nodes line of a search kind.
#[derive(Component, Debug, Clone, Copy)]
pub struct ResultsText(pub SearchKind);

pub fn setup_panel(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                left: Val::Px(0.0),
                padding: UiRect::all(Val::Px(16.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(10.0),
                ..default()
            },
            BackgroundColor(PANEL_COLOR),
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new("Graph Visualizer"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
            ));
            for kind in SearchKind::ALL {
                spawn_search_row(panel, kind);
            }
            panel.spawn((
                Text::new(HINT),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(HINT_COLOR),
            ));
        });
}

fn spawn_search_row(panel: &mut ChildBuilder, kind: SearchKind) {
    panel
        .spawn(Node {
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(|column| {
            column
                .spawn(Node {
                    column_gap: Val::Px(8.0),
                    align_items: AlignItems::Center,
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((Text::new(format!("{} target", kind)), TextFont::default()));
                    row.spawn((
                        Button,
                        TargetField(kind),
                        Text::new(""),
                        Node {
                            min_width: Val::Px(64.0),
                            padding: UiRect::axes(Val::Px(6.0), Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(FIELD_COLOR),
                    ));
                    row.spawn((
                        Button,
                        RunButton(kind),
                        Node {
                            padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                            ..default()
                        },
                        BackgroundColor(BUTTON_COLOR),
                    ))
                    .with_children(|button| {
                        button.spawn(Text::new(format!("Run {}", kind)));
                    });
                });
            column.spawn((
                ResultsText(kind),
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
            ));
        });
}

/// Turn button presses into viewer commands.
pub fn run_buttons(
    mut buttons: Query<(&Interaction, &RunButton, &mut BackgroundColor), Changed<Interaction>>,
    mut commands_out: EventWriter<ViewerCommand>,
) {
    for (interaction, button, mut background) in buttons.iter_mut() {
        match *interaction {
            Interaction::Pressed => {
                commands_out.send(ViewerCommand::Run(button.0));
            }
            Interaction::Hovered => *background = BackgroundColor(HOVERED_BUTTON_COLOR),
            Interaction::None => *background = BackgroundColor(BUTTON_COLOR),
        }
    }
}

/// Clicking a target field focuses it.
pub fn focus_fields(
    fields: Query<(&Interaction, &TargetField), Changed<Interaction>>,
    input_mode: Res<InputMode>,
    mut inputs: ResMut<TargetInputs>,
) {
    if *input_mode != InputMode::Pointer {
        return;
    }

    for (interaction, field) in fields.iter() {
        if *interaction == Interaction::Pressed && inputs.focus() != field.0 {
            debug!("Focused the {} target field", field.0);
            inputs.set_focus(field.0);
        }
    }
}

pub fn refresh_target_fields(
    inputs: Res<TargetInputs>,
    input_mode: Res<InputMode>,
    mut fields: Query<(&TargetField, &mut Text, &mut BackgroundColor)>,
) {
    if !inputs.is_changed() && !input_mode.is_changed() {
        return;
    }

    for (field, mut text, mut background) in fields.iter_mut() {
        text.0 = inputs.get(field.0).to_string();
        let focused = *input_mode == InputMode::Pointer && inputs.focus() == field.0;
        *background = BackgroundColor(if focused {
            FOCUSED_FIELD_COLOR
        } else {
            FIELD_COLOR
        });
    }
}

pub fn refresh_results(session: Res<ViewerSession>, mut lines: Query<(&ResultsText, &mut Text)>) {
    if !session.is_changed() {
        return;
    }

    for (line, mut text) in lines.iter_mut() {
        text.0 = session.results_text(line.0).unwrap_or_default();
    }
}
