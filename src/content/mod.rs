//! Content domain: tuning data, its RON loader, and validation.

use bevy::prelude::*;
use std::path::Path;

mod data;
mod loader;
mod validation;


pub use data::{AttackMotion, AttackSet, PlayerTuning, SensorLayout, TuningFile, WolfTuning};
pub(crate) use data::vec2;
pub use loader::{ContentLoadError, TUNING_PATH, load_tuning_file, parse_tuning};
pub use validation::{ValidationError, validate_tuning};

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_tuning);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, reload_tuning_on_key);
    }
}

/// Read the tuning file, falling back to built-in values when it is unusable.
pub fn read_tuning(path: &Path) -> TuningFile {
    let file = match load_tuning_file(path) {
        Ok(file) => {
            info!("Loaded tuning from {}", path.display());
            file
        }
        Err(err) if err.is_missing_file() => {
            warn!("No tuning file at {}, using built-in values", path.display());
            TuningFile::default()
        }
        Err(err) => {
            warn!("{err}; using built-in values");
            TuningFile::default()
        }
    };

    let issues = validate_tuning(&file);
    if issues.is_empty() {
        debug!("Tuning validation passed");
    }
    for issue in &issues {
        warn!("Tuning: {issue}");
    }
    file
}

fn load_tuning(mut commands: Commands) {
    let file = read_tuning(Path::new(TUNING_PATH));
    commands.insert_resource(file.player);
    commands.insert_resource(file.wolf);
}

#[cfg(feature = "dev-tools")]
fn reload_tuning_on_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut player: ResMut<PlayerTuning>,
    mut wolf: ResMut<WolfTuning>,
) {
    if !keyboard.just_pressed(KeyCode::F5) {
        return;
    }
    let file = read_tuning(Path::new(TUNING_PATH));
    *player = file.player;
    *wolf = file.wolf;
    info!("Tuning reloaded");
}
