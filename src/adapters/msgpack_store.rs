//! MessagePack implementation of the policy store.
//!
//! This adapter implements the PolicyStore port using rmp_serde for compact
//! binary serialization.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, ErrorKind, Write},
    path::Path,
};

use crate::{Result, error::Error, learning::PolicyTable, ports::PolicyStore};

/// MessagePack-based policy store.
///
/// Saves write to a sibling temp file first and rename over the target, so a
/// failed save never leaves a partial store at the destination.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use valueplay::{PolicyTable, adapters::MsgPackStore, ports::PolicyStore};
///
/// let store = MsgPackStore;
/// let table = PolicyTable::new();
/// store.save(&table, Path::new("policy.msgpack"))?;
/// let loaded = store.load(Path::new("policy.msgpack"))?;
/// # Ok::<(), valueplay::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackStore;

impl MsgPackStore {
    /// Create a new MessagePack store.
    pub fn new() -> Self {
        Self
    }
}

impl PolicyStore for MsgPackStore {
    fn load(&self, path: &Path) -> Result<PolicyTable> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(source) if source.kind() == ErrorKind::NotFound => {
                println!(
                    "No policy store at {}; starting from an empty table",
                    path.display()
                );
                return Ok(PolicyTable::new());
            }
            Err(source) => {
                return Err(Error::Io {
                    operation: format!("open policy store {}", path.display()),
                    source,
                });
            }
        };

        let reader = BufReader::new(file);
        rmp_serde::decode::from_read(reader).map_err(|e| Error::CorruptStore {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn save(&self, table: &PolicyTable, path: &Path) -> Result<()> {
        let staging = path.with_extension("tmp");

        let file = File::create(&staging).map_err(|source| Error::Io {
            operation: format!("create policy store {}", staging.display()),
            source,
        })?;

        let mut writer = BufWriter::new(file);
        rmp_serde::encode::write(&mut writer, table).map_err(|e| Error::Serialization {
            operation: "serialize policy table to MessagePack".to_string(),
            message: e.to_string(),
        })?;
        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush policy store {}", staging.display()),
            source,
        })?;
        drop(writer);

        fs::rename(&staging, path).map_err(|source| Error::Io {
            operation: format!("replace policy store {}", path.display()),
            source,
        })
    }
}
