//! Mirror feed overlay: a bottom-centered strip of panels, one per feed,
//! each showing its camera's render target. Panels start hidden; a feed's
//! panel visibility and camera active flag are always flipped together, so
//! the two can never drift apart.

use bevy::prelude::*;

use rendering::camera_rig::MirrorCamera;
use rendering::mirror_feeds::MirrorFeeds;
use vehicle::config::{
    MIRROR_PANEL_BACKDROP_ALPHA, MIRROR_PANEL_HEIGHT, MIRROR_PANEL_WIDTH, OVERLAY_BOTTOM_MARGIN,
    OVERLAY_CONTAINER_HEIGHT, OVERLAY_CONTAINER_WIDTH,
};
use vehicle::keybindings::KeyBindings;
use vehicle::view_state::MirrorFeed;

/// Marker for the full-screen overlay root node.
#[derive(Component)]
pub struct MirrorOverlayRoot;

/// One feed's panel. Visibility mirrors the feed camera's active flag.
#[derive(Component)]
pub struct MirrorPanel(pub MirrorFeed);

fn panel_name(feed: MirrorFeed) -> &'static str {
    match feed {
        MirrorFeed::LeftMirror => "LeftMirrorPanel",
        MirrorFeed::RightMirror => "RightMirrorPanel",
        MirrorFeed::Reversing => "ReversingPanel",
    }
}

/// Startup system: build the overlay node tree. Runs after the feed targets
/// are allocated so the image nodes can bind them directly.
///
/// Panel x-offsets position the panel *center* relative to the strip's left
/// edge (the source layout used a center pivot), so the right-mirror panel
/// deliberately overhangs the strip on the left.
pub fn spawn_mirror_overlay(mut commands: Commands, feeds: Res<MirrorFeeds>) {
    commands
        .spawn((
            Name::new("MirrorOverlay"),
            MirrorOverlayRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::FlexEnd,
                padding: UiRect::bottom(Val::Px(OVERLAY_BOTTOM_MARGIN)),
                ..default()
            },
        ))
        .with_children(|root| {
            root.spawn((
                Name::new("MirrorPanelStrip"),
                Node {
                    width: Val::Px(OVERLAY_CONTAINER_WIDTH),
                    height: Val::Px(OVERLAY_CONTAINER_HEIGHT),
                    ..default()
                },
            ))
            .with_children(|strip| {
                for &feed in MirrorFeed::ALL {
                    strip
                        .spawn((
                            Name::new(panel_name(feed)),
                            MirrorPanel(feed),
                            Node {
                                position_type: PositionType::Absolute,
                                left: Val::Px(feed.panel_offset_x() - MIRROR_PANEL_WIDTH / 2.0),
                                top: Val::Px(
                                    (OVERLAY_CONTAINER_HEIGHT - MIRROR_PANEL_HEIGHT) / 2.0,
                                ),
                                width: Val::Px(MIRROR_PANEL_WIDTH),
                                height: Val::Px(MIRROR_PANEL_HEIGHT),
                                ..default()
                            },
                            BackgroundColor(Color::srgba(
                                0.0,
                                0.0,
                                0.0,
                                MIRROR_PANEL_BACKDROP_ALPHA,
                            )),
                            Visibility::Hidden,
                        ))
                        .with_children(|panel| {
                            panel.spawn((
                                ImageNode::new(feeds.get(feed).clone()),
                                Node {
                                    width: Val::Percent(100.0),
                                    height: Val::Percent(100.0),
                                    ..default()
                                },
                            ));
                        });
                }
            });
        });
}

/// System: map the feed keys (4/5/6 by default) onto feed toggles.
pub fn mirror_toggle_keys(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut cameras: Query<(&MirrorCamera, &mut Camera)>,
    mut panels: Query<(&MirrorPanel, &mut Visibility)>,
) {
    let requests = [
        (MirrorFeed::LeftMirror, bindings.toggle_left_mirror),
        (MirrorFeed::RightMirror, bindings.toggle_right_mirror),
        (MirrorFeed::Reversing, bindings.toggle_reversing_camera),
    ];
    for (feed, binding) in requests {
        if binding.just_pressed(&keys) {
            toggle_mirror_feed(feed, &mut cameras, &mut panels);
        }
    }
}

/// Flip one feed from its camera's current state. No-op with a warning when
/// the camera or the panel is missing from the world.
pub fn toggle_mirror_feed(
    feed: MirrorFeed,
    cameras: &mut Query<(&MirrorCamera, &mut Camera)>,
    panels: &mut Query<(&MirrorPanel, &mut Visibility)>,
) {
    let Some(enabled) = cameras
        .iter()
        .find(|(mirror, _)| mirror.0 == feed)
        .map(|(_, camera)| camera.is_active)
    else {
        warn!("{} camera is missing from the rig, ignoring toggle", feed.label());
        return;
    };
    set_mirror_feed(feed, !enabled, cameras, panels);
}

/// Set one feed's camera active flag and panel visibility as a pair. Used by
/// the key toggles and by the screenshot driver.
pub fn set_mirror_feed(
    feed: MirrorFeed,
    enabled: bool,
    cameras: &mut Query<(&MirrorCamera, &mut Camera)>,
    panels: &mut Query<(&MirrorPanel, &mut Visibility)>,
) {
    let camera = cameras.iter_mut().find(|(mirror, _)| mirror.0 == feed);
    let panel = panels.iter_mut().find(|(panel, _)| panel.0 == feed);
    let (Some((_, mut camera)), Some((_, mut visibility))) = (camera, panel) else {
        warn!("{} camera or panel is missing, ignoring toggle", feed.label());
        return;
    };
    camera.is_active = enabled;
    *visibility = if enabled {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
}
