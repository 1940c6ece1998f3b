//! JSON file persistence for the expense collection.
//!
//! The whole collection is written on every change. Writes go to a sibling
//! temporary file that is renamed over the target, so readers never observe a
//! partially written file.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::{Expense, ResultEngine};

/// Read the expenses stored at `path`.
///
/// A missing file, or one that is empty or holds only whitespace, yields an
/// empty collection.
pub(crate) fn load(path: &Path) -> ResultEngine<Vec<Expense>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("{} does not exist yet, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };

    if data.trim().is_empty() {
        return Ok(Vec::new());
    }

    let expenses: Vec<Expense> = serde_json::from_str(&data)?;
    tracing::debug!("loaded {} expenses from {}", expenses.len(), path.display());
    Ok(expenses)
}

/// Replace the content of `path` with `expenses`, pretty-printed.
pub(crate) fn save(path: &Path, expenses: &[Expense]) -> ResultEngine<()> {
    let temp_path = temp_path(path);

    let result = write_pretty(&temp_path, expenses).and_then(|()| {
        fs::rename(&temp_path, path)?;
        Ok(())
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result?;

    tracing::debug!("saved {} expenses to {}", expenses.len(), path.display());
    Ok(())
}

fn write_pretty(path: &Path, expenses: &[Expense]) -> ResultEngine<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, expenses)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
