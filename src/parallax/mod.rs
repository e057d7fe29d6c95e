//! Parallax domain: scrolling backdrop layers and depth-based scaling.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::follow_player_camera;
use crate::movement::{LocomotionSet, z_to_depth};

/// One backdrop strip, spawned at startup.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BackdropLayerDef {
    pub name: String,
    /// 0 = fixed in the world, 1 = locked to the camera.
    pub factor: f32,
    pub color: (f32, f32, f32),
    pub size: (f32, f32),
    pub anchor: (f32, f32),
    /// Draw order; keep well behind the playfield.
    pub z: f32,
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ParallaxTuning {
    /// Scale lost per unit of depth away from the camera.
    pub depth_scale_per_unit: f32,
    pub min_depth_scale: f32,
    pub layers: Vec<BackdropLayerDef>,
}

impl Default for ParallaxTuning {
    fn default() -> Self {
        Self {
            depth_scale_per_unit: 0.1,
            min_depth_scale: 0.5,
            layers: vec![
                BackdropLayerDef {
                    name: "sky".to_string(),
                    factor: 0.9,
                    color: (0.15, 0.18, 0.3),
                    size: (80.0, 30.0),
                    anchor: (0.0, 6.0),
                    z: -30.0,
                },
                BackdropLayerDef {
                    name: "hills".to_string(),
                    factor: 0.5,
                    color: (0.2, 0.26, 0.3),
                    size: (60.0, 6.0),
                    anchor: (0.0, -2.0),
                    z: -20.0,
                },
            ],
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct ParallaxLayer {
    pub factor: f32,
    pub anchor: Vec2,
}

/// Entities whose drawn size follows their depth. Sprite sizing systems
/// multiply by `factor`; the transform scale is left alone so physics
/// colliders keep their size.
#[derive(Component, Debug, Clone, Copy)]
pub struct DepthScaled {
    pub factor: f32,
}

impl Default for DepthScaled {
    fn default() -> Self {
        Self { factor: 1.0 }
    }
}

pub fn parallax_position(anchor: Vec2, camera: Vec2, factor: f32) -> Vec2 {
    anchor + camera * factor
}

pub fn depth_scale(depth: f32, per_unit: f32, min_scale: f32) -> f32 {
    (1.0 - depth * per_unit).max(min_scale)
}

pub struct ParallaxPlugin;

impl Plugin for ParallaxPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ParallaxTuning>()
            .add_systems(Startup, spawn_backdrop_layers)
            .add_systems(Update, update_depth_scale.after(LocomotionSet))
            .add_systems(Update, scroll_parallax_layers.after(follow_player_camera));
    }
}

fn spawn_backdrop_layers(mut commands: Commands, tuning: Res<ParallaxTuning>) {
    for layer in &tuning.layers {
        let (r, g, b) = layer.color;
        let anchor = Vec2::new(layer.anchor.0, layer.anchor.1);
        commands.spawn((
            Name::new(layer.name.clone()),
            ParallaxLayer {
                factor: layer.factor,
                anchor,
            },
            Sprite {
                color: Color::srgb(r, g, b),
                custom_size: Some(Vec2::new(layer.size.0, layer.size.1)),
                ..default()
            },
            Transform::from_xyz(anchor.x, anchor.y, layer.z),
        ));
    }
    info!("Spawned {} backdrop layers", tuning.layers.len());
}

fn scroll_parallax_layers(
    cameras: Query<&Transform, (With<Camera2d>, Without<ParallaxLayer>)>,
    mut layers: Query<(&ParallaxLayer, &mut Transform)>,
) {
    let Ok(camera) = cameras.single() else {
        return;
    };
    let camera = camera.translation.truncate();

    for (layer, mut transform) in &mut layers {
        let position = parallax_position(layer.anchor, camera, layer.factor);
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}

pub fn update_depth_scale(
    tuning: Res<ParallaxTuning>,
    mut query: Query<(&Transform, &mut DepthScaled)>,
) {
    for (transform, mut scaled) in &mut query {
        let depth = z_to_depth(transform.translation.z);
        scaled.factor = depth_scale(depth, tuning.depth_scale_per_unit, tuning.min_depth_scale);
    }
}
