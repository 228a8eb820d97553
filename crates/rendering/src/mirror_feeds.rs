//! Offscreen render targets for the mirror feed cameras.
//!
//! Three fixed 256×192 color targets, allocated once at startup and bound
//! permanently. No pooling, no resize-on-demand. The depth buffer for each
//! feed pass is engine-managed.

use bevy::prelude::*;
use bevy::render::camera::RenderTarget;
use bevy::render::render_resource::{
    Extent3d, TextureDescriptor, TextureDimension, TextureFormat, TextureUsages,
};

use vehicle::config::{MIRROR_FEED_HEIGHT, MIRROR_FEED_WIDTH};
use vehicle::view_state::MirrorFeed;

use crate::camera_rig::MirrorCamera;

/// Handles to the three feed targets, keyed by [`MirrorFeed`].
#[derive(Resource)]
pub struct MirrorFeeds {
    left_mirror: Handle<Image>,
    right_mirror: Handle<Image>,
    reversing: Handle<Image>,
}

impl MirrorFeeds {
    pub fn get(&self, feed: MirrorFeed) -> &Handle<Image> {
        match feed {
            MirrorFeed::LeftMirror => &self.left_mirror,
            MirrorFeed::RightMirror => &self.right_mirror,
            MirrorFeed::Reversing => &self.reversing,
        }
    }
}

/// Build one feed target image: a color render attachment the overlay can
/// also sample as a texture.
pub fn create_feed_image(label: &'static str) -> Image {
    let size = Extent3d {
        width: MIRROR_FEED_WIDTH,
        height: MIRROR_FEED_HEIGHT,
        depth_or_array_layers: 1,
    };
    let mut image = Image {
        texture_descriptor: TextureDescriptor {
            label: Some(label),
            size,
            dimension: TextureDimension::D2,
            format: TextureFormat::Rgba8UnormSrgb,
            mip_level_count: 1,
            sample_count: 1,
            usage: TextureUsages::TEXTURE_BINDING
                | TextureUsages::COPY_DST
                | TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        },
        ..default()
    };
    image.resize(size);
    image
}

/// Startup system: allocate the three feed targets.
pub fn allocate_mirror_feeds(mut commands: Commands, mut images: ResMut<Assets<Image>>) {
    commands.insert_resource(MirrorFeeds {
        left_mirror: images.add(create_feed_image("left_mirror_feed")),
        right_mirror: images.add(create_feed_image("right_mirror_feed")),
        reversing: images.add(create_feed_image("reversing_feed")),
    });
}

/// Startup system: point each mirror camera at its feed target. Runs after
/// the rig exists and the targets are allocated.
pub fn bind_mirror_feeds(
    feeds: Res<MirrorFeeds>,
    mut cameras: Query<(&MirrorCamera, &mut Camera)>,
) {
    for (mirror, mut camera) in &mut cameras {
        camera.target = RenderTarget::Image(feeds.get(mirror.0).clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_image_dimensions() {
        let image = create_feed_image("test_feed");
        assert_eq!(image.width(), 256);
        assert_eq!(image.height(), 192);
    }

    #[test]
    fn test_feed_image_is_a_sampleable_render_attachment() {
        let image = create_feed_image("test_feed");
        let usage = image.texture_descriptor.usage;
        assert!(usage.contains(TextureUsages::RENDER_ATTACHMENT));
        assert!(usage.contains(TextureUsages::TEXTURE_BINDING));
        assert_eq!(image.texture_descriptor.format, TextureFormat::Rgba8UnormSrgb);
    }

    #[test]
    fn test_feeds_are_allocated_once_and_distinct() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(Assets::<Image>::default());
        app.add_systems(Startup, allocate_mirror_feeds);
        app.update();

        let feeds = app.world().resource::<MirrorFeeds>();
        let handles = [
            feeds.get(MirrorFeed::LeftMirror).clone(),
            feeds.get(MirrorFeed::RightMirror).clone(),
            feeds.get(MirrorFeed::Reversing).clone(),
        ];
        assert_ne!(handles[0], handles[1]);
        assert_ne!(handles[1], handles[2]);
        assert_ne!(handles[0], handles[2]);
        assert_eq!(app.world().resource::<Assets<Image>>().len(), 3);
    }

    #[test]
    fn test_binding_targets_each_mirror_camera() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(Assets::<Image>::default());
        app.add_systems(Startup, (allocate_mirror_feeds, bind_mirror_feeds).chain());
        for &feed in MirrorFeed::ALL {
            app.world_mut().spawn((
                MirrorCamera(feed),
                Camera {
                    is_active: false,
                    ..Default::default()
                },
            ));
        }
        app.update();

        let feeds = app.world().resource::<MirrorFeeds>();
        let expected: Vec<(MirrorFeed, Handle<Image>)> = MirrorFeed::ALL
            .iter()
            .map(|&f| (f, feeds.get(f).clone()))
            .collect();
        let world = app.world_mut();
        let mut cameras = world.query::<(&MirrorCamera, &Camera)>();
        for (mirror, camera) in cameras.iter(world) {
            let RenderTarget::Image(handle) = &camera.target else {
                panic!("{} camera is not bound to an image", mirror.0.label());
            };
            let wanted = &expected.iter().find(|(f, _)| *f == mirror.0).unwrap().1;
            assert_eq!(handle, wanted);
        }
    }
}
