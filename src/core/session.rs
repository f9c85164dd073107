//! # Session Store
//!
//! The session is the authenticated user's identity: username plus the API
//! token. It has an explicit lifecycle - created on successful login,
//! destroyed on logout - and is persisted to `~/.parley/session.json` so a
//! restart picks the login back up.
//!
//! All writes use atomic rename (write `.tmp`, then `rename()`) for crash
//! safety.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// The authenticated user's credentials and identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub token: String,
}

/// Returns `~/.parley/`, creating it if needed.
fn parley_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    let dir = home.join(".parley");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Returns the path of the session file.
pub fn session_path() -> io::Result<PathBuf> {
    Ok(parley_dir()?.join("session.json"))
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Persist a freshly created session. Called once per successful login.
pub fn save_session(session: &Session) -> io::Result<()> {
    let path = session_path()?;
    atomic_write_json(&path, session)?;
    debug!("Session saved for {}", session.username);
    Ok(())
}

/// Load the persisted session, if one exists.
///
/// A missing file is the logged-out state, not an error. A malformed file is
/// treated the same way (logged at warn) so a corrupt session never wedges
/// startup.
pub fn load_session() -> Option<Session> {
    let path = session_path().ok()?;
    if !path.exists() {
        return None;
    }
    let json = fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&json) {
        Ok(session) => Some(session),
        Err(e) => {
            warn!("Discarding malformed session file: {}", e);
            None
        }
    }
}

/// Destroy the persisted session. Called on logout; idempotent.
pub fn clear_session() -> io::Result<()> {
    let path = session_path()?;
    if path.exists() {
        fs::remove_file(&path)?;
        debug!("Session cleared");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_round_trips_through_json() {
        let session = Session {
            username: "testuser".to_string(),
            token: "abc123".to_string(),
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn test_malformed_session_json_is_rejected() {
        let result: Result<Session, _> = serde_json::from_str("{\"username\": 42}");
        assert!(result.is_err());
    }
}
