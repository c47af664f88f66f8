//! goose-style migration files
//!
//! A migration file holds a forward ("up") and a rollback ("down") section:
//!
//! ```sql
//! -- +goose Up
//! ALTER TABLE users DROP COLUMN email;
//!
//! -- +goose Down
//! ALTER TABLE users ADD COLUMN email TEXT;
//! ```

const UP_MARKER: &str = "-- +goose Up";
const DOWN_MARKER: &str = "-- +goose Down";

/// The two sections of a migration file, trimmed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationSections {
    pub up: String,
    pub down: String,
}

#[derive(Clone, Copy)]
enum Section {
    Up,
    Down,
}

/// Split migration text on goose markers
///
/// A marker line switches the active section; every other line is appended
/// to it. Lines before the first marker belong to neither section.
pub fn split_sections(text: &str) -> MigrationSections {
    let mut up = String::new();
    let mut down = String::new();
    let mut current = None;

    for line in text.lines() {
        if line.starts_with(UP_MARKER) {
            current = Some(Section::Up);
        } else if line.starts_with(DOWN_MARKER) {
            current = Some(Section::Down);
        } else if let Some(section) = current {
            let target = match section {
                Section::Up => &mut up,
                Section::Down => &mut down,
            };
            target.push_str(line);
            target.push('\n');
        }
    }

    MigrationSections {
        up: up.trim().to_string(),
        down: down.trim().to_string(),
    }
}
