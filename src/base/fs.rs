use std::io::Write;

use crate::base;

/// Application filesystem.
pub struct Fs {
    dir: std::path::PathBuf,

    /// Number of upcoming writes that fail after the new contents are
    /// written out but before they replace the old file.
    #[cfg(test)]
    failing_writes: std::cell::Cell<usize>,
}

/// Marker for types that are serialized to or deserialized from files.
pub trait Io: Default + ToString + std::str::FromStr {
    const FILENAME: &'static str;
}
impl Io for base::Config {
    const FILENAME: &'static str = ".giftbook.json";
}
impl Io for base::ViewState {
    const FILENAME: &'static str = ".giftbook-view.json";
}
impl Io for base::Eventlist {
    const FILENAME: &'static str = "events.jsonl";
}
impl Io for base::Giftlist {
    const FILENAME: &'static str = "gifts.jsonl";
}

impl Fs {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self {
            dir: dir.into(),
            #[cfg(test)]
            failing_writes: std::cell::Cell::new(0),
        }
    }

    /// Returns the working directory.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    pub fn is_repo(&self) -> bool {
        self.path::<base::Config>().is_file()
    }

    /// Returns the path which `T` will be serialized to and deserialized from.
    pub fn path<T>(&self) -> std::path::PathBuf
    where
        T: Io,
    {
        self.dir.join(T::FILENAME)
    }

    /// Deserializes `T` from disk. If `T`'s file does not exist, returns `T::default()`.
    pub fn read<T>(&self) -> Result<T, ReadError>
    where
        T: Io,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        match std::fs::read_to_string(self.path::<T>()) {
            Ok(s) => s
                .parse()
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
                .map_err(ReadError::Serde),
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => Ok(T::default()),
                _ => Err(ReadError::Io(e)),
            },
        }
    }

    /// Serializes `T` to disk. The contents go to a temporary file in the
    /// same directory, which is then renamed over `T`'s file, so a failed
    /// write leaves the previous contents in place.
    pub fn write<T>(&self, obj: &T) -> std::io::Result<()>
    where
        T: Io,
    {
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(obj.to_string().as_bytes())?;
        tmp.as_file().sync_all()?;
        #[cfg(test)]
        self.take_write_failure()?;
        tmp.persist(self.path::<T>())?;
        Ok(())
    }

    /// Makes the next `n` writes fail.
    #[cfg(test)]
    pub fn fail_writes(&self, n: usize) {
        self.failing_writes.set(n);
    }

    #[cfg(test)]
    fn take_write_failure(&self) -> std::io::Result<()> {
        match self.failing_writes.get() {
            0 => Ok(()),
            n => {
                self.failing_writes.set(n - 1);
                Err(std::io::Error::other("injected write failure"))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] Box<dyn std::error::Error + Send + Sync>),
}
