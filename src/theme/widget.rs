//! Reusable UI widget constructors.

use bevy::prelude::*;

use super::interaction::InteractionPalette;
use super::palette;
use crate::gameplay::round::UiAction;

/// Full-screen flex container that centers its children.
/// Use as root for menus and overlays.
pub fn ui_root(name: impl Into<std::borrow::Cow<'static, str>>) -> impl Bundle {
    (
        Name::new(name),
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(20.0),
            ..default()
        },
        Pickable::IGNORE,
    )
}

/// Bordered column panel used by every modal overlay.
pub fn panel(name: impl Into<std::borrow::Cow<'static, str>>) -> impl Bundle {
    (
        Name::new(name),
        Node {
            width: Val::Px(560.0),
            min_height: Val::Px(320.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::SpaceEvenly,
            row_gap: Val::Px(16.0),
            padding: UiRect::all(Val::Px(40.0)),
            border: UiRect::all(Val::Px(2.0)),
            ..default()
        },
        BackgroundColor(palette::PANEL_BACKGROUND),
        BorderColor::all(palette::PANEL_BORDER),
    )
}

/// Large header text (header size, white).
pub fn header(text: impl Into<String>) -> impl Bundle {
    (
        Text::new(text),
        TextFont::from_font_size(palette::FONT_SIZE_HEADER),
        TextColor(palette::HEADER_TEXT),
        TextLayout::new_with_justify(Justify::Center),
    )
}

/// Medium label text (label size, gray).
pub fn label(text: impl Into<String>) -> impl Bundle {
    (
        Text::new(text),
        TextFont::from_font_size(palette::FONT_SIZE_LABEL),
        TextColor(palette::BODY_TEXT),
        TextLayout::new_with_justify(Justify::Center),
    )
}

/// The action a menu button forwards to the round controller.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ButtonAction(pub UiAction);

/// Clickable button that writes `action` as a `UiAction` message when clicked.
pub fn action_button(text: impl Into<String>, action: UiAction) -> impl Bundle {
    (
        Name::new("Button"),
        Button,
        ButtonAction(action),
        Node {
            width: Val::Px(340.0),
            height: Val::Px(64.0),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            border: UiRect::all(Val::Px(1.0)),
            ..default()
        },
        BackgroundColor(palette::BUTTON_BACKGROUND),
        BorderColor::all(palette::PANEL_BORDER),
        InteractionPalette::BUTTON,
        children![(
            Text::new(text),
            TextFont::from_font_size(palette::FONT_SIZE_LABEL),
            TextColor(palette::BUTTON_TEXT),
            Pickable::IGNORE,
        )],
    )
}

/// Forwards clicks on any `ButtonAction` button as `UiAction` messages.
pub(super) fn forward_button_clicks(
    click: On<Pointer<Click>>,
    buttons: Query<&ButtonAction>,
    mut actions: MessageWriter<UiAction>,
) {
    if let Ok(ButtonAction(action)) = buttons.get(click.entity) {
        debug!("Button pressed: {action:?}");
        actions.write(*action);
    }
}
