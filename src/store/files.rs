use crate::errors::TareaError;
use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{OpenOptions, create_dir_all, read_to_string, remove_file, rename};
use std::io::Write;
use std::path::Path;

/// Reads one JSON store file, distinguishing "missing" from "unreadable".
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, TareaError> {
    let raw = match read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(error) => {
            return Err(
                TareaError::new("STORE_READ_FAILED", "Failed reading store file", 2)
                    .with_details(io_error_value(&error)),
            );
        }
    };
    let value = serde_json::from_str(&raw).map_err(|error| {
        TareaError::new("STORE_READ_FAILED", "Store file is not valid JSON", 2)
            .with_details(any_error_value(&error))
    })?;
    Ok(Some(value))
}

/// Writes through a temp file, fsync and rename so a crash mid-write cannot
/// leave a truncated store behind.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), TareaError> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent).map_err(|error| write_error(&io_error_value(&error)))?;
    }
    let payload = serde_json::to_string_pretty(value)
        .map_err(|error| write_error(&any_error_value(&error)))?;

    let temp = format!(
        "{}.tmp-{}-{}",
        path.display(),
        std::process::id(),
        Utc::now().timestamp_millis()
    );
    let mut handle = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp)
        .map_err(|error| write_error(&io_error_value(&error)))?;

    let written = handle
        .write_all(format!("{}\n", payload).as_bytes())
        .and_then(|()| handle.sync_all());
    let renamed = written.and_then(|()| rename(&temp, path));
    if let Err(error) = renamed {
        let _ = remove_file(&temp);
        return Err(write_error(&io_error_value(&error)));
    }

    Ok(())
}

fn write_error(details: &serde_json::Value) -> TareaError {
    TareaError::new("STORE_WRITE_FAILED", "Failed writing store file", 2)
        .with_details(details.clone())
}

fn io_error_value(error: &std::io::Error) -> serde_json::Value {
    serde_json::json!({"kind": format!("{:?}", error.kind()), "message": error.to_string()})
}

fn any_error_value(error: &impl std::fmt::Display) -> serde_json::Value {
    serde_json::json!({"message": error.to_string()})
}
