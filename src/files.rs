//! JSON file helpers shared by the fetch and ingest layers.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

/// Load and deserialize a JSON file.
pub fn json_load<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Serialize a value to a JSON file, overwriting any existing content.
pub fn json_dump<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(writer, value)?;
    Ok(())
}

/// Serialize a value to a pretty-printed JSON file.
pub fn json_dump_pretty<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}
