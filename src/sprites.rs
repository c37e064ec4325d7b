//! Sprite image files read from the working directory.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::domain::Direction;

pub const WALL_SPRITE: &str = "wall.png";

pub fn character_sprite(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "character_up.png",
        Direction::Down => "character_down.png",
        Direction::Left => "character_left.png",
        Direction::Right => "character_right.png",
    }
}

pub fn all_sprites() -> impl Iterator<Item = &'static str> {
    Direction::iter()
        .map(|d| character_sprite(*d))
        .chain(std::iter::once(WALL_SPRITE))
}

#[derive(Error, Debug)]
pub enum SpriteError {
    #[error("working directory is not accessible")]
    WorkingDirectory(#[source] io::Error),
    #[error("missing sprite {}", .0.display())]
    Missing(PathBuf),
    #[error("failed to load sprite {0}")]
    LoadFailed(String),
}

/// Directory containing the sprites, resolved once at start-up.
pub fn sprite_directory() -> Result<PathBuf, SpriteError> {
    std::env::current_dir().map_err(SpriteError::WorkingDirectory)
}

/// Ensure every sprite file exists in `directory`.
pub fn verify_sprites(directory: &Path) -> Result<(), SpriteError> {
    for name in all_sprites() {
        let path = directory.join(name);
        if !path.is_file() {
            return Err(SpriteError::Missing(path));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sprite_names() {
        assert_eq!(
            all_sprites().collect::<Vec<_>>(),
            vec![
                "character_up.png",
                "character_down.png",
                "character_left.png",
                "character_right.png",
                "wall.png",
            ]
        );
    }

    #[test]
    fn test_verify_sprites_reports_first_missing_file() {
        let directory = Path::new("does/not/exist");
        let error = verify_sprites(directory).unwrap_err();
        assert!(matches!(&error, SpriteError::Missing(p) if p.ends_with("character_up.png")));
        assert_eq!(
            error.to_string(),
            "missing sprite does/not/exist/character_up.png"
        );
    }
}
