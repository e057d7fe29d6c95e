//! Config domain: loads `assets/data/gameplay.ron` into per-domain resources.

pub mod data;
pub mod loader;
pub mod validation;


pub use data::GameplayConfig;
pub use loader::{ConfigLoadError, load_config, parse_config};
pub use validation::{ValidationError, validate_config};

use bevy::prelude::*;
use std::path::Path;

pub const GAMEPLAY_CONFIG_PATH: &str = "assets/data/gameplay.ron";

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        // Resources must exist before anything spawns in Startup
        app.add_systems(PreStartup, load_gameplay_config);
    }
}

/// Load, validate and publish the gameplay config. Any failure keeps the
/// built-in defaults so the game still starts.
fn load_gameplay_config(mut commands: Commands) {
    let config = match load_config(Path::new(GAMEPLAY_CONFIG_PATH)) {
        Ok(config) => {
            let errors = validate_config(&config);
            if errors.is_empty() {
                info!("Loaded gameplay config from {}", GAMEPLAY_CONFIG_PATH);
                config
            } else {
                for e in &errors {
                    error!("Config validation: {}", e);
                }
                warn!(
                    "{} config validation errors, using default gameplay config",
                    errors.len()
                );
                GameplayConfig::default()
            }
        }
        Err(e) => {
            warn!("{}; using default gameplay config", e);
            GameplayConfig::default()
        }
    };

    debug!("Locomotion tuning: {:?}", config.locomotion);

    commands.insert_resource(config.locomotion);
    commands.insert_resource(config.world);
    commands.insert_resource(config.mirror);
    commands.insert_resource(config.camouflage);
    commands.insert_resource(config.energy);
    commands.insert_resource(config.camera);
    commands.insert_resource(config.parallax);
}
