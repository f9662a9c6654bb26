/*!
# IO Adapters

The persistence boundary of the crate. Backends expose
[`write_disk`](crate::ops::GraphBackend::write_disk) /
[`read_disk`](crate::ops::GraphBackend::read_disk) stubs that are handed an
[`IoAdapter`], a narrow capability set over raw file access. Injecting the
adapter generically keeps the core free of I/O assumptions (and of dynamic
dispatch): tests can substitute an in-memory adapter, while [`FileIo`]
provides the standard filesystem implementation.
*/

use std::fs::{File, OpenOptions};
use std::io::{Error, ErrorKind, Read, Result, Write};
use std::path::Path;

/// Minimal file-access capability set used by the persistence stubs.
///
/// A handle is whatever the adapter needs to track one open file; it is
/// created by [`open`](IoAdapter::open) and consumed by
/// [`close`](IoAdapter::close).
pub trait IoAdapter {
    /// Adapter-specific representation of one open file.
    type Handle;

    /// Opens (or creates) the file at `path` for reading and writing.
    fn open(&mut self, path: &Path) -> Result<Self::Handle>;

    /// Returns the current size of the file in bytes.
    fn filesize(&mut self, handle: &mut Self::Handle) -> Result<u64>;

    /// Reads up to `buf.len()` bytes, returning the number actually read.
    /// Stops early only at end of file.
    fn read(&mut self, handle: &mut Self::Handle, buf: &mut [u8]) -> Result<usize>;

    /// Writes the full buffer, returning the number of bytes written.
    fn write(&mut self, handle: &mut Self::Handle, buf: &[u8]) -> Result<usize>;

    /// Forces buffered data to stable storage.
    fn flush(&mut self, handle: &mut Self::Handle) -> Result<()>;

    /// Closes the handle.
    fn close(&mut self, handle: Self::Handle) -> Result<()>;
}

/// Standard filesystem adapter backed by [`std::fs::File`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FileIo;

impl IoAdapter for FileIo {
    type Handle = File;

    fn open(&mut self, path: &Path) -> Result<File> {
        OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
    }

    fn filesize(&mut self, handle: &mut File) -> Result<u64> {
        Ok(handle.metadata()?.len())
    }

    fn read(&mut self, handle: &mut File, buf: &mut [u8]) -> Result<usize> {
        let mut total = 0;
        while total < buf.len() {
            match handle.read(&mut buf[total..]) {
                Ok(0) => break,
                Ok(k) => total += k,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(total)
    }

    fn write(&mut self, handle: &mut File, buf: &[u8]) -> Result<usize> {
        let mut total = 0;
        while total < buf.len() {
            match handle.write(&buf[total..]) {
                Ok(0) => {
                    return Err(Error::new(
                        ErrorKind::WriteZero,
                        "failed to write whole buffer",
                    ));
                }
                Ok(k) => total += k,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(total)
    }

    fn flush(&mut self, handle: &mut File) -> Result<()> {
        handle.sync_all()
    }

    fn close(&mut self, handle: File) -> Result<()> {
        drop(handle);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("dgraphs-{}-{name}", std::process::id()));
        path
    }

    #[test]
    fn file_io_roundtrip() {
        let path = scratch_path("roundtrip");
        let mut io = FileIo;

        let mut handle = io.open(&path).unwrap();
        assert_eq!(io.write(&mut handle, b"0 1 2 4").unwrap(), 7);
        io.flush(&mut handle).unwrap();
        assert_eq!(io.filesize(&mut handle).unwrap(), 7);
        io.close(handle).unwrap();

        let mut handle = io.open(&path).unwrap();
        let mut buf = [0u8; 16];
        let read = io.read(&mut handle, &mut buf).unwrap();
        assert_eq!(&buf[..read], b"0 1 2 4");
        io.close(handle).unwrap();

        std::fs::remove_file(&path).unwrap();
    }
}
