//! Top-level screens. The round lifecycle itself lives in
//! `gameplay::round`; screens only gate when gameplay systems may run.

mod gameplay;
mod loading;

use bevy::prelude::*;

/// Primary app screens.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[states(scoped_entities)]
pub enum Screen {
    /// Initial loading screen.
    #[default]
    Loading,
    /// The play field: menus, rounds, and overlays all live here.
    Gameplay,
}

pub fn plugin(app: &mut App) {
    app.init_state::<Screen>();
    app.add_plugins((loading::plugin, gameplay::plugin));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn screen_default_is_loading() {
        assert_eq!(Screen::default(), Screen::Loading);
    }

    #[test]
    fn screens_are_distinct() {
        assert_ne!(Screen::Loading, Screen::Gameplay);
    }
}
