//! Window extent tracking
//!
//! The renderer resizes the surface and reprojects the camera on its
//! own; this plugin just mirrors resize notifications into
//! [`ViewerLayout`] so UI sizing can follow the window.

use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::types::ViewerLayout;

pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewerLayout>()
            .add_systems(Update, track_viewport);
    }
}

fn track_viewport(
    mut resize_events: MessageReader<WindowResized>,
    mut layout: ResMut<ViewerLayout>,
) {
    for event in resize_events.read() {
        layout.update_from_window(event.width, event.height);
        tracing::debug!(width = event.width, height = event.height, "viewport resized");
    }
}
