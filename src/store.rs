use crate::{
    applications::{ApplicationDatabase, ApplicationFields, ApplicationRecord},
    error::{Result, TrackerError},
};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};
use tracing::{info, instrument, warn};

/// The applications file plus its in-memory copy.
///
/// Every mutation rewrites the whole file. When a write fails the error is
/// returned but the in-memory change is kept, so memory stays authoritative
/// until the next successful save.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    db: ApplicationDatabase,
}

impl RecordStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let db = load(&path)?;

        Ok(Self { path, db })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn database(&self) -> &ApplicationDatabase {
        &self.db
    }

    pub fn save(&self) -> Result<()> {
        save(&self.path, &self.db)
    }

    pub fn create(&mut self, fields: ApplicationFields) -> Result<usize> {
        let index = self.db.create(fields)?;
        self.save()?;

        Ok(index)
    }

    pub fn update(&mut self, index: usize, fields: ApplicationFields) -> Result<()> {
        self.db.update(index, fields)?;
        self.save()
    }

    pub fn delete(&mut self, index: usize) -> Result<ApplicationRecord> {
        let record = self.db.delete(index)?;
        self.save()?;

        Ok(record)
    }
}

/// Reads the applications file. A missing file is an empty database.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load(path: &Path) -> Result<ApplicationDatabase> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!("no applications file yet, starting empty");
            return Ok(ApplicationDatabase::default());
        }
        Err(source) => {
            return Err(TrackerError::Io {
                path: path.to_owned(),
                source,
            });
        }
    };

    let db: ApplicationDatabase =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            warn!(%source, "applications file is malformed");
            TrackerError::Parse {
                path: path.to_owned(),
                source,
            }
        })?;

    info!(count = db.len(), "loaded applications");
    Ok(db)
}

/// Writes the whole database next to `path`, then renames it into place.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn save(path: &Path, db: &ApplicationDatabase) -> Result<()> {
    let io_err = |source| TrackerError::Io {
        path: path.to_owned(),
        source,
    };

    let mut staging = path.as_os_str().to_owned();
    staging.push(".new");
    let staging = PathBuf::from(staging);

    let mut writer = BufWriter::new(File::create(&staging).map_err(io_err)?);
    serde_json::to_writer_pretty(&mut writer, db).map_err(|source| TrackerError::Io {
        path: staging.clone(),
        source: source.into(),
    })?;
    writer.flush().map_err(io_err)?;
    drop(writer);

    fs::rename(&staging, path).map_err(io_err)?;

    info!(count = db.len(), "saved applications");
    Ok(())
}
