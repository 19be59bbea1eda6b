//! Persistence of trained models
//!
//! Artifacts are `bincode` encoded. Writing goes to a sibling temporary file which is renamed
//! over the target once it is complete, so a failed save never leaves a truncated artifact.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".tmp");

    path.with_file_name(name)
}

fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::ArtifactWrite {
        path: path.to_path_buf(),
        source,
    }
}

fn write_to<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(write_error(path))?;
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, value)?;
    writer.flush().map_err(write_error(path))?;

    let file = writer
        .into_inner()
        .map_err(|err| write_error(path)(err.into_error()))?;
    file.sync_all().map_err(write_error(path))
}

/// Serialize `value` to `path`, replacing an existing artifact only on success
pub fn write<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    let tmp = temporary_path(path);

    let result = write_to(&tmp, value)
        .and_then(|()| fs::rename(&tmp, path).map_err(write_error(path)));
    match &result {
        Ok(()) => debug!("wrote artifact {}", path.display()),
        Err(_) => {
            let _ = fs::remove_file(&tmp);
        }
    }

    result
}

pub fn read<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::ArtifactRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(bincode::deserialize_from(BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn round_trip_leaves_no_temporary_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        let value: BTreeMap<String, Vec<f64>> =
            vec![("weights".to_string(), vec![0.5, -1.0])].into_iter().collect();

        write(&path, &value).unwrap();
        assert_eq!(read::<BTreeMap<String, Vec<f64>>, _>(&path).unwrap(), value);
        assert!(!temporary_path(&path).exists());
    }

    #[test]
    fn failed_write_keeps_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        write(&path, &1u32).unwrap();

        let missing = dir.path().join("missing").join("model.bin");
        assert!(matches!(
            write(&missing, &2u32),
            Err(Error::ArtifactWrite { .. })
        ));
        assert_eq!(read::<u32, _>(&path).unwrap(), 1);
    }

    #[test]
    fn missing_artifact() {
        assert!(matches!(
            read::<u32, _>("does/not/exist.bin"),
            Err(Error::ArtifactRead { .. })
        ));
    }
}
