//! Button hover/press visual feedback.

use bevy::prelude::*;

/// Background colors for the three `Interaction` states of a button.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct InteractionPalette {
    pub none: Color,
    pub hovered: Color,
    pub pressed: Color,
}

impl InteractionPalette {
    /// The standard button palette.
    pub const BUTTON: Self = Self {
        none: super::palette::BUTTON_BACKGROUND,
        hovered: super::palette::BUTTON_HOVERED_BACKGROUND,
        pressed: super::palette::BUTTON_PRESSED_BACKGROUND,
    };

    #[must_use]
    pub const fn color_for(&self, interaction: Interaction) -> Color {
        match interaction {
            Interaction::Pressed => self.pressed,
            Interaction::Hovered => self.hovered,
            Interaction::None => self.none,
        }
    }
}

fn apply_interaction_palette(
    mut buttons: Query<
        (&Interaction, &InteractionPalette, &mut BackgroundColor),
        Changed<Interaction>,
    >,
) {
    for (interaction, palette, mut background) in &mut buttons {
        *background = palette.color_for(*interaction).into();
    }
}

pub fn plugin(app: &mut App) {
    app.register_type::<InteractionPalette>();
    app.add_systems(Update, apply_interaction_palette);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn color_for_maps_each_state() {
        let palette = InteractionPalette::BUTTON;
        assert_eq!(palette.color_for(Interaction::None), palette.none);
        assert_eq!(palette.color_for(Interaction::Hovered), palette.hovered);
        assert_eq!(palette.color_for(Interaction::Pressed), palette.pressed);
    }

    #[test]
    fn pressed_button_takes_pressed_color() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_systems(Update, apply_interaction_palette);

        app.world_mut().spawn((
            Button,
            BackgroundColor(Color::BLACK),
            InteractionPalette::BUTTON,
            Interaction::Pressed,
        ));
        app.update();

        let mut query = app.world_mut().query::<&BackgroundColor>();
        let bg = query.single(app.world()).unwrap();
        assert_eq!(bg.0, InteractionPalette::BUTTON.pressed);
    }
}
