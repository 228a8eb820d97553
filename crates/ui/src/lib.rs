use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod help_overlay;
pub mod mirror_panels;


pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_plugins(help_overlay::HelpOverlayPlugin)
            .add_systems(
                Startup,
                mirror_panels::spawn_mirror_overlay
                    .after(rendering::mirror_feeds::allocate_mirror_feeds),
            )
            .add_systems(Update, mirror_panels::mirror_toggle_keys);
    }
}
