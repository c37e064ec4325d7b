use bevy::{prelude::*, window::WindowResolution};


mod config;
mod controller;
mod domain;
mod resource;
mod simulator;
mod sprites;
mod visualizer;

use crate::{config::GameConfig, sprites::SpriteError};

fn main() -> Result<(), SpriteError> {
    let config = GameConfig::DEFAULT;
    let sprite_directory = sprites::sprite_directory()?;
    sprites::verify_sprites(&sprite_directory)?;

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: config.title.to_string(),
                        resolution: WindowResolution::new(
                            config.display.width() as f32,
                            config.display.height() as f32,
                        ),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: sprite_directory.to_string_lossy().into_owned(),
                    ..default()
                }),
        )
        .add_plugins(controller::Controller)
        .add_plugins(visualizer::Visualizer)
        .add_plugins(simulator::Simulator)
        .run();

    Ok(())
}
