//! 2D visualization.
//!
//! The domain uses pixels with the origin in the top-left corner of the display and the y-axis
//! pointing down. Bevy places sprites by their center, with the origin in the middle of the
//! window and the y-axis pointing up.

use bevy::{app::AppExit, asset::LoadState, prelude::*};

use crate::{
    config::GameConfig,
    domain::{ByDirection, HasCollision, Rectangle, Size},
    resource::ArenaRes,
    sprites::{character_sprite, SpriteError, WALL_SPRITE},
};

pub struct Visualizer;

impl Plugin for Visualizer {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, set_up)
            .add_systems(Update, (watch_sprites, update_character))
            .insert_resource(ClearColor(Color::WHITE))
            .insert_resource(ArenaRes::from(GameConfig::DEFAULT.create_arena()));
    }
}

// Walls are drawn over the character.
const CHARACTER_LAYER: f32 = 0.0;
const WALL_LAYER: f32 = 1.0;

#[derive(Resource)]
struct Sprites {
    character: ByDirection<Handle<Image>>,
    wall: Handle<Image>,
}

#[derive(Component)]
struct CharacterSprite;

#[derive(Component)]
struct WallSprite;

fn set_up(mut commands: Commands, asset_server: Res<AssetServer>, arena: Res<ArenaRes>) {
    let sprites = Sprites {
        character: ByDirection::from_fn(|d| asset_server.load(character_sprite(d))),
        wall: asset_server.load(WALL_SPRITE),
    };

    commands.spawn(Camera2dBundle::default());

    let character = arena.character();
    commands.spawn((
        SpriteBundle {
            texture: sprites.character.get(character.direction()).clone(),
            sprite: sprite(character.rectangle()),
            transform: Transform::from_translation(to_bevy_position(
                character.rectangle(),
                arena.display(),
                CHARACTER_LAYER,
            )),
            ..default()
        },
        CharacterSprite,
    ));

    for wall in arena.walls() {
        commands.spawn((
            SpriteBundle {
                texture: sprites.wall.clone(),
                sprite: sprite(wall.rectangle()),
                transform: Transform::from_translation(to_bevy_position(
                    wall.rectangle(),
                    arena.display(),
                    WALL_LAYER,
                )),
                ..default()
            },
            WallSprite,
        ));
    }

    info!(
        "character at {:?} facing {:?}, {} wall(s)",
        character.position(),
        character.direction(),
        arena.walls().len()
    );

    commands.insert_resource(sprites);
}

/// Sprite files are checked at start-up, but may still fail to decode. There is nothing to show
/// without them, so exit.
fn watch_sprites(
    mut loaded: Local<bool>,
    asset_server: Res<AssetServer>,
    sprites: Res<Sprites>,
    mut exit: EventWriter<AppExit>,
) {
    if *loaded {
        return;
    }

    let handles = sprites
        .character
        .values()
        .chain(std::iter::once(&sprites.wall))
        .collect::<Vec<_>>();

    let mut all_loaded = true;
    for handle in handles {
        match asset_server.get_load_state(handle.id()) {
            Some(LoadState::Loaded) => {}
            Some(LoadState::Failed) => {
                let path = handle
                    .path()
                    .map_or("<unknown>".to_string(), |p| p.to_string());
                error!("{}", SpriteError::LoadFailed(path));
                exit.send(AppExit);
                return;
            }
            _ => all_loaded = false,
        }
    }

    if all_loaded {
        debug!("all sprites loaded");
        *loaded = true;
    }
}

fn update_character(
    arena: Res<ArenaRes>,
    sprites: Res<Sprites>,
    mut character_sprites: Query<
        (&mut Transform, &mut Sprite, &mut Handle<Image>),
        With<CharacterSprite>,
    >,
) {
    if !arena.is_changed() {
        return;
    }

    let character = arena.character();
    for (mut transform, mut sprite, mut texture) in character_sprites.iter_mut() {
        transform.translation =
            to_bevy_position(character.rectangle(), arena.display(), CHARACTER_LAYER);
        sprite.custom_size = Some(to_bevy_size(character.rectangle().size()));

        let facing_texture = sprites.character.get(character.direction());
        if *texture != *facing_texture {
            *texture = facing_texture.clone();
        }
    }
}

fn sprite(rectangle: Rectangle) -> Sprite {
    Sprite {
        custom_size: Some(to_bevy_size(rectangle.size())),
        ..default()
    }
}

fn to_bevy_size(size: Size) -> Vec2 {
    Vec2::new(size.width() as f32, size.height() as f32)
}

fn to_bevy_position(rectangle: Rectangle, display: Size, layer: f32) -> Vec3 {
    let size = to_bevy_size(rectangle.size());
    let display = to_bevy_size(display);
    Vec3::new(
        rectangle.left() as f32 + size.x / 2.0 - display.x / 2.0,
        display.y / 2.0 - rectangle.top() as f32 - size.y / 2.0,
        layer,
    )
}
