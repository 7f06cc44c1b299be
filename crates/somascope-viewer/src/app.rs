//! Bevy application setup

use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use somascope_core::Playback;
use somascope_scene::{PlaneVisibility, PlaybackState, SomascopeScenePlugin};

use crate::config::Config;

/// Run the Bevy application. Returns when the window closes; window or
/// graphics-context creation failure is a fatal startup fault.
pub fn run(config: Config, autoplay: bool) {
    let playback = if autoplay {
        // Epoch zero: the loop starts with app time.
        Playback::Playing { epoch: 0.0 }
    } else {
        Playback::Stopped
    };

    App::new()
        .insert_resource(ClearColor(Color::srgb(0.04, 0.04, 0.04)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.window.title.clone(),
                resolution: (config.window.width as u32, config.window.height as u32).into(),
                ..default()
            }),
            ..default()
        }))
        // EguiPlugin must come before the scene plugins that add systems
        // to EguiPrimaryContextPass.
        .add_plugins(EguiPlugin::default())
        .insert_resource(config.to_world_settings())
        .insert_resource(PlaneVisibility(config.scene.show_planes))
        .insert_resource(PlaybackState(playback))
        .add_plugins(SomascopeScenePlugin)
        .run();
}
