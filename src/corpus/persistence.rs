//! Snapshot file format.
//!
//! A snapshot file is a fixed header followed by a bincode payload:
//!
//! ```text
//! magic "SBOT" | version u32 | crc32 u32 | payload length u64 | payload
//! ```
//!
//! All integers are little-endian. Files are written to a sibling temporary
//! file first and renamed into place.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::corpus::snapshot::{CorpusEntry, CorpusSnapshot};
use crate::corpus::tfidf::VectorSpace;
use crate::error::{Result, SitebotError};

/// File magic.
pub const SNAPSHOT_MAGIC: &[u8; 4] = b"SBOT";

/// Current file format version.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct SnapshotPayload {
    entries: Vec<CorpusEntry>,
    responses: BTreeMap<String, Vec<String>>,
    space: VectorSpace,
    matrix: Vec<Vec<f64>>,
    trained_at: DateTime<Utc>,
}

/// Write a snapshot to `path`, replacing any previous file.
pub fn save_snapshot<P: AsRef<Path>>(path: P, snapshot: &CorpusSnapshot) -> Result<()> {
    let path = path.as_ref();
    let payload = SnapshotPayload {
        entries: snapshot.entries().to_vec(),
        responses: snapshot.responses().clone(),
        space: snapshot.vectorizer().to_space(),
        matrix: snapshot.matrix().to_vec(),
        trained_at: snapshot.trained_at(),
    };
    let data = bincode::serialize(&payload)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let temp_path = temp_path_for(path);
    {
        let mut writer = BufWriter::new(File::create(&temp_path)?);
        writer.write_all(SNAPSHOT_MAGIC)?;
        writer.write_u32::<LittleEndian>(SNAPSHOT_VERSION)?;
        writer.write_u32::<LittleEndian>(crc32fast::hash(&data))?;
        writer.write_u64::<LittleEndian>(data.len() as u64)?;
        writer.write_all(&data)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
    }
    fs::rename(&temp_path, path)?;

    info!(
        "Saved snapshot with {} patterns to {}",
        snapshot.len(),
        path.display()
    );
    Ok(())
}

/// Read a snapshot from `path`.
///
/// A missing file is not an error and yields `Ok(None)`.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Option<CorpusSnapshot>> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut reader = BufReader::new(file);

    let mut magic = [0u8; 4];
    reader
        .read_exact(&mut magic)
        .map_err(|_| SitebotError::snapshot("file too short for header"))?;
    if &magic != SNAPSHOT_MAGIC {
        return Err(SitebotError::snapshot("bad magic"));
    }

    let version = reader.read_u32::<LittleEndian>()?;
    if version != SNAPSHOT_VERSION {
        return Err(SitebotError::snapshot(format!(
            "unsupported version {version}"
        )));
    }
    let checksum = reader.read_u32::<LittleEndian>()?;
    let length = reader.read_u64::<LittleEndian>()?;

    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    if data.len() as u64 != length {
        return Err(SitebotError::snapshot(format!(
            "expected {length} payload bytes, found {}",
            data.len()
        )));
    }
    if crc32fast::hash(&data) != checksum {
        return Err(SitebotError::snapshot("checksum mismatch"));
    }

    let payload: SnapshotPayload = bincode::deserialize(&data)?;
    let snapshot = CorpusSnapshot::from_parts(
        payload.entries,
        payload.responses,
        payload.space,
        payload.matrix,
        payload.trained_at,
    )?;

    info!(
        "Loaded snapshot with {} patterns from {}",
        snapshot.len(),
        path.display()
    );
    Ok(Some(snapshot))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
