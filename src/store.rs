//! Game state persistence
//!
//! One JSON record per session id in a flat directory, the way the browser
//! original kept one localStorage entry per game. Saves are all-or-nothing:
//! the record is written to a temp file and renamed into place, so a reader
//! never observes a partial write.

use crate::game::GameState;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory-backed store of persisted games, keyed by session id
#[derive(Debug, Clone)]
pub struct GameStore {
    dir: PathBuf,
}

impl GameStore {
    /// Open (creating if needed) a store at the given directory
    ///
    /// # Errors
    /// Returns an I/O error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Default store location: `$HOME/.wordle_link`, or `./.wordle_link`
    /// when no home directory is available
    #[must_use]
    pub fn default_dir() -> PathBuf {
        std::env::var_os("HOME")
            .map_or_else(|| PathBuf::from("."), PathBuf::from)
            .join(".wordle_link")
    }

    /// The directory backing this store
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist a game record, replacing any previous one for the same id
    ///
    /// # Errors
    /// Returns an I/O error if the record cannot be written or renamed.
    pub fn save(&self, game_id: &str, state: &GameState) -> io::Result<()> {
        let json = serde_json::to_vec_pretty(state)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let path = self.path_for(game_id);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)
    }

    /// Load the record for a game, if a readable one exists
    ///
    /// An absent file is a normal "no prior state" answer, and so is a file
    /// that no longer parses: a corrupt record restarts the game rather than
    /// crashing it.
    ///
    /// # Errors
    /// Returns an I/O error only for genuine read failures other than the
    /// file being absent.
    pub fn load(&self, game_id: &str) -> io::Result<Option<GameState>> {
        let content = match fs::read_to_string(self.path_for(game_id)) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        Ok(serde_json::from_str(&content).ok())
    }

    /// Delete the record for a game; deleting a missing record is fine
    ///
    /// # Errors
    /// Returns an I/O error for failures other than the file being absent.
    pub fn clear(&self, game_id: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(game_id)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Map a session id to its record path
    ///
    /// Ids come from links, so anything outside a conservative charset is
    /// replaced before touching the filesystem.
    fn path_for(&self, game_id: &str) -> PathBuf {
        let safe: String = game_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        self.dir.join(format!("game-{safe}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};
    use crate::game::{AttemptRecord, KeyboardState};

    fn sample_state() -> GameState {
        let secret = Word::new("crane").unwrap();
        let guess = Word::new("slate").unwrap();
        let feedback = Feedback::score(&secret, &guess);

        let mut keyboard = KeyboardState::new();
        keyboard.apply(&guess, &feedback);

        GameState {
            attempt_count: 1,
            attempts: vec![AttemptRecord {
                guess: "SLATE".to_string(),
                feedback,
            }],
            keyboard,
            is_over: false,
        }
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = GameStore::open(dir.path()).unwrap();
        let state = sample_state();

        store.save("abc123", &state).unwrap();
        let loaded = store.load("abc123").unwrap();

        assert_eq!(loaded, Some(state));
    }

    #[test]
    fn load_absent_id_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = GameStore::open(dir.path()).unwrap();

        assert_eq!(store.load("nothing-here").unwrap(), None);
    }

    #[test]
    fn corrupt_record_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = GameStore::open(dir.path()).unwrap();

        fs::write(dir.path().join("game-abc123.json"), "{not json").unwrap();
        assert_eq!(store.load("abc123").unwrap(), None);
    }

    #[test]
    fn save_replaces_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = GameStore::open(dir.path()).unwrap();

        store.save("abc123", &sample_state()).unwrap();
        store.save("abc123", &GameState::default()).unwrap();

        assert_eq!(store.load("abc123").unwrap(), Some(GameState::default()));
    }

    #[test]
    fn clear_removes_record_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = GameStore::open(dir.path()).unwrap();

        store.save("abc123", &sample_state()).unwrap();
        store.clear("abc123").unwrap();
        assert_eq!(store.load("abc123").unwrap(), None);

        // Clearing again is not an error
        store.clear("abc123").unwrap();
    }

    #[test]
    fn ids_are_sanitized_for_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let store = GameStore::open(dir.path()).unwrap();

        store.save("../../evil/../id", &sample_state()).unwrap();

        // Nothing escapes the store directory
        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].to_string_lossy().starts_with("game-"));

        assert!(store.load("../../evil/../id").unwrap().is_some());
    }

    #[test]
    fn distinct_ids_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let store = GameStore::open(dir.path()).unwrap();

        store.save("game-one", &sample_state()).unwrap();
        store.save("game-two", &GameState::default()).unwrap();

        assert_eq!(store.load("game-one").unwrap(), Some(sample_state()));
        assert_eq!(store.load("game-two").unwrap(), Some(GameState::default()));
    }
}
