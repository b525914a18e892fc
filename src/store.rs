// src/store.rs
use std::{fs, io::Write, path::Path};

use serde_json::Value;
use tempfile::NamedTempFile;

use crate::model::{Export, Profile};
use crate::{Error, Result};

/// Recover the profile from a previous artifact.
///
/// Missing, unreadable or malformed artifacts, and artifacts whose `profile`
/// is absent or not an object, all give an empty profile.
pub fn load_profile(path: &Path) -> Profile {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            logd!("Store: no prior artifact at {} ({e})", path.display());
            return Profile::new();
        }
    };
    profile_from_str(&text).unwrap_or_else(|| {
        logd!("Store: prior artifact {} unusable; starting with empty profile", path.display());
        Profile::new()
    })
}

/// Pull the `profile` object out of artifact text, if it has one.
pub fn profile_from_str(text: &str) -> Option<Profile> {
    let doc: Value = serde_json::from_str(text).ok()?;
    match doc {
        Value::Object(mut top) => match top.remove("profile") {
            Some(Value::Object(profile)) => Some(profile),
            _ => None,
        },
        _ => None,
    }
}

/// Read a whole artifact. Strict: unlike [`load_profile`], errors propagate.
pub fn load_export(path: &Path) -> Result<Export> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Replace the artifact at `path` in one step.
///
/// The JSON goes to a temp file beside the target which is then renamed over
/// it, so a failed run leaves the previous artifact as it was.
pub fn save_export(path: &Path, export: &Export) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    ensure_directory(dir)?;

    let json = serde_json::to_string_pretty(export)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp.as_file().set_permissions(artifact_permissions(path, tmp.as_file())?)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| Error::Io(e.error))?;

    logd!("Store: wrote {} ({} bytes)", path.display(), json.len() + 1);
    Ok(())
}

/// Mode for the rewritten artifact: the previous file's, else 0644.
fn artifact_permissions(path: &Path, tmp: &fs::File) -> Result<fs::Permissions> {
    if let Ok(meta) = fs::metadata(path) {
        if meta.is_file() {
            return Ok(meta.permissions());
        }
    }
    #[allow(unused_mut)]
    let mut perms = tmp.metadata()?.permissions();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        perms.set_mode(crate::config::consts::DEFAULT_ARTIFACT_MODE);
    }
    Ok(perms)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Config(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
