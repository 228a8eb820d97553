use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};
use bevy::window::PresentMode;

use rendering::camera_rig::MirrorCamera;
use ui::mirror_panels::{set_mirror_feed, MirrorPanel};
use vehicle::view_state::{ActiveView, CameraView, MirrorFeed};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Cab View".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        vehicle::VehiclePlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    // Screenshot mode: steps through view presets, saves PNGs, and exits
    if std::env::var("CABVIEW_SCREENSHOTS").is_ok() {
        app.insert_resource(ShotQueue {
            frame: 0,
            current: 0,
            presets: vec![
                ShotPreset {
                    name: "01_driver_seat",
                    view: CameraView::DriverSeat,
                    mirrors: false,
                },
                ShotPreset {
                    name: "02_driver_seat_mirrors",
                    view: CameraView::DriverSeat,
                    mirrors: true,
                },
                ShotPreset {
                    name: "03_rear_view",
                    view: CameraView::RearView,
                    mirrors: false,
                },
                ShotPreset {
                    name: "04_top_view_mirrors",
                    view: CameraView::TopView,
                    mirrors: true,
                },
            ],
        });
        app.add_systems(Update, drive_screenshots);
    }

    app.run();
}

#[derive(Resource)]
struct ShotQueue {
    frame: u32,
    current: usize,
    presets: Vec<ShotPreset>,
}

struct ShotPreset {
    name: &'static str,
    view: CameraView,
    /// Whether all three mirror feeds are switched on for this shot.
    mirrors: bool,
}

fn drive_screenshots(
    mut commands: Commands,
    mut queue: ResMut<ShotQueue>,
    mut active: ResMut<ActiveView>,
    mut cameras: Query<(&MirrorCamera, &mut Camera)>,
    mut panels: Query<(&MirrorPanel, &mut Visibility)>,
    mut exit: EventWriter<AppExit>,
) {
    queue.frame += 1;

    // Let the first frames render so the feed targets have content.
    if queue.frame < 30 {
        return;
    }

    let idx = queue.current;
    if idx >= queue.presets.len() {
        // All done — wait a few frames for the last save, then exit
        if queue.frame > 30 + queue.presets.len() as u32 * 12 + 20 {
            exit.send(AppExit::Success);
        }
        return;
    }

    let phase = (queue.frame - 30) % 12;

    if phase == 0 {
        // Apply the preset through the same state the key handlers use
        let preset = &queue.presets[idx];
        let mirrors = preset.mirrors;
        active.0 = preset.view;
        for &feed in MirrorFeed::ALL {
            set_mirror_feed(feed, mirrors, &mut cameras, &mut panels);
        }
    } else if phase == 6 {
        // Take the screenshot after the view change has settled
        let name = queue.presets[idx].name;
        let path = format!("/tmp/cabview_{}.png", name);
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(path));
        queue.current += 1;
    }
}
