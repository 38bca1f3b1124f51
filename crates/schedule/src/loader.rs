use std::{fs, path::Path};

use shared::{domain::RawTalk, error::ScheduleError};
use tracing::debug;

/// Read one schedule export: a JSON array of talk objects.
pub fn load_talks(path: impl AsRef<Path>) -> Result<Vec<RawTalk>, ScheduleError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ScheduleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // A bare `null` document is an empty schedule.
    let talks = serde_json::from_str::<Option<Vec<RawTalk>>>(&raw)
        .map_err(|source| ScheduleError::Parse {
            path: path.to_path_buf(),
            source,
        })?
        .unwrap_or_default();

    debug!(path = %path.display(), count = talks.len(), "loaded talks");
    Ok(talks)
}

/// Concatenate every file's talks in the order the files are given.
pub fn load_all<I, P>(paths: I) -> Result<Vec<RawTalk>, ScheduleError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut talks = Vec::new();
    for path in paths {
        talks.extend(load_talks(path)?);
    }
    Ok(talks)
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
