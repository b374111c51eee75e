// File: src/persistence.rs
use crate::core::types::CardSet;
use crate::errors::{FlashcardError, Result};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::Builder;

/// Writes a file through a temp file in the same directory and renames it over
/// `path`, so readers never observe a half-written file.
pub fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let existing = fs::metadata(path)
        .ok()
        .filter(|meta| meta.is_file())
        .map(|meta| meta.permissions());

    let mut builder = Builder::new();
    if let Some(permissions) = existing.clone().or_else(new_file_permissions) {
        builder.permissions(permissions);
    }
    let temp_file = builder.tempfile_in(parent_dir)?;
    if let Some(permissions) = existing {
        // Creation is masked by the umask; an overwrite keeps the exact mode.
        temp_file.as_file().set_permissions(permissions)?;
    }
    {
        let mut writer = BufWriter::new(&temp_file);
        write(&mut writer)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Mode for a file that did not exist yet: 0644 under the umask rather than
/// the owner-only mode temp files are created with.
fn new_file_permissions() -> Option<fs::Permissions> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(fs::Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}

pub fn save_cards(cards: &CardSet, path: &Path) -> Result<()> {
    write_atomically(path, |writer| {
        serde_json::to_writer(writer, cards)?;
        Ok(())
    })
}

pub fn load_cards(path: &Path) -> Result<CardSet> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FlashcardError::FileNotFound(path.to_path_buf()),
        _ => FlashcardError::Io(e),
    })?;
    let reader = BufReader::new(file);
    // Read failures (e.g. a directory) are I/O problems, not bad content.
    let cards: CardSet = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            FlashcardError::Io(e.into())
        } else {
            FlashcardError::Format(e)
        }
    })?;
    Ok(cards)
}
