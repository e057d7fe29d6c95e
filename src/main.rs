mod animation;
mod camouflage;
mod config;
mod core;
mod mirror;
mod movement;
mod parallax;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Mirrorwalk".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            config::ConfigPlugin,
            core::CorePlugin,
            movement::MovementPlugin,
            animation::AnimationPlugin,
            camouflage::CamouflagePlugin,
            mirror::MirrorPlugin,
            parallax::ParallaxPlugin,
        ))
        .run();
}
