//! [`FileSystem`] backed by the real operating system.

use std::fs::{self, Metadata};
use std::io;
use std::path::PathBuf;

use super::FileSystem;
use crate::error::{Error, Result};
use crate::path::Path;

/// Environment variables consulted for the temporary directory, in order.
const TEMP_VARS: [&str; 4] = ["TMPDIR", "TMP", "TEMP", "TEMPDIR"];

/// Fallback temporary directory.
const DEFAULT_TEMP: &str = "/tmp";

/// The operating system's filesystem.
///
/// # Examples
///
/// ```
/// use cxpath::fs::{FileSystem, OsFileSystem};
/// use cxpath::Path;
///
/// let fs = OsFileSystem;
/// let cwd = fs.current_dir().unwrap();
/// assert!(cwd.is_absolute());
/// assert!(fs.is_directory(&cwd).unwrap());
/// assert!(!fs.exists(&Path::new("/definitely/not/here")).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

fn std_path(path: &Path) -> PathBuf {
    PathBuf::from(path.to_string())
}

fn lstat(path: &Path) -> Result<Metadata> {
    fs::symlink_metadata(std_path(path)).map_err(|e| Error::from_io(path, &e))
}

fn from_std(path: &std::path::Path) -> Result<Path> {
    path.to_str().map(Path::new).ok_or_else(|| Error::Filesystem {
        path: path.display().to_string(),
        reason: "path is not valid UTF-8".to_string(),
    })
}

#[cfg(unix)]
mod permissions {
    use std::os::unix::fs::MetadataExt;

    pub const READ: (u32, u32, u32) = (0o400, 0o040, 0o004);
    pub const WRITE: (u32, u32, u32) = (0o200, 0o020, 0o002);
    pub const EXECUTE: (u32, u32, u32) = (0o100, 0o010, 0o001);

    /// Effective uid plus every group the process belongs to.
    #[allow(unsafe_code)]
    fn credentials() -> (libc::uid_t, Vec<libc::gid_t>) {
        // SAFETY: these calls only read the calling process's credentials,
        // and the group buffer is sized from the first getgroups call.
        unsafe {
            let euid = libc::geteuid();
            let egid = libc::getegid();
            let count = libc::getgroups(0, std::ptr::null_mut());
            let mut groups: Vec<libc::gid_t> = vec![0; usize::try_from(count).unwrap_or(0)];
            let filled = libc::getgroups(count.max(0), groups.as_mut_ptr());
            groups.truncate(usize::try_from(filled).unwrap_or(0));
            groups.push(egid);
            (euid, groups)
        }
    }

    /// Owner bits decide for the owner and group bits for group members;
    /// neither falls through to a broader class.
    pub fn allowed(meta: &std::fs::Metadata, (user, group, other): (u32, u32, u32)) -> bool {
        let (euid, groups) = credentials();
        let mode = meta.mode();
        if meta.uid() == euid {
            return mode & user != 0;
        }
        if groups.contains(&meta.gid()) {
            return mode & group != 0;
        }
        mode & other != 0
    }
}

impl OsFileSystem {
    #[cfg(unix)]
    fn permitted(path: &Path, bits: (u32, u32, u32)) -> Result<bool> {
        let meta = lstat(path)?;
        Ok(permissions::allowed(&meta, bits))
    }
}

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> Result<bool> {
        match fs::symlink_metadata(std_path(path)) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::from_io(path, &e)),
        }
    }

    fn is_file(&self, path: &Path) -> Result<bool> {
        Ok(lstat(path)?.file_type().is_file())
    }

    fn is_directory(&self, path: &Path) -> Result<bool> {
        Ok(lstat(path)?.file_type().is_dir())
    }

    fn is_symlink(&self, path: &Path) -> Result<bool> {
        Ok(lstat(path)?.file_type().is_symlink())
    }

    fn is_other(&self, path: &Path) -> Result<bool> {
        let kind = lstat(path)?.file_type();
        Ok(!kind.is_file() && !kind.is_dir() && !kind.is_symlink())
    }

    fn read_link(&self, path: &Path) -> Result<Path> {
        if !self.is_symlink(path)? {
            return Err(Error::Filesystem {
                path: path.to_string(),
                reason: "not a symbolic link".to_string(),
            });
        }
        let target = fs::read_link(std_path(path)).map_err(|e| Error::from_io(path, &e))?;
        from_std(&target)
    }

    #[cfg(unix)]
    fn user_can_read(&self, path: &Path) -> Result<bool> {
        Self::permitted(path, permissions::READ)
    }

    #[cfg(not(unix))]
    fn user_can_read(&self, path: &Path) -> Result<bool> {
        lstat(path).map(|_| true)
    }

    #[cfg(unix)]
    fn user_can_write(&self, path: &Path) -> Result<bool> {
        Self::permitted(path, permissions::WRITE)
    }

    #[cfg(not(unix))]
    fn user_can_write(&self, path: &Path) -> Result<bool> {
        Ok(!lstat(path)?.permissions().readonly())
    }

    #[cfg(unix)]
    fn user_can_execute(&self, path: &Path) -> Result<bool> {
        Self::permitted(path, permissions::EXECUTE)
    }

    #[cfg(not(unix))]
    fn user_can_execute(&self, path: &Path) -> Result<bool> {
        lstat(path).map(|_| true)
    }

    fn user_can_traverse(&self, path: &Path) -> Result<bool> {
        self.user_can_execute(path)
    }

    fn create_directory(&self, path: &Path) -> Result<()> {
        log::debug!("mkdir {path}");
        fs::create_dir(std_path(path)).map_err(|e| Error::from_io(path, &e))
    }

    fn create_symlink(&self, target: &Path, link: &Path) -> Result<()> {
        log::debug!("symlink {link} -> {target}");
        #[cfg(unix)]
        let created = std::os::unix::fs::symlink(std_path(target), std_path(link));
        #[cfg(windows)]
        let created = std::os::windows::fs::symlink_file(std_path(target), std_path(link));
        #[cfg(not(any(unix, windows)))]
        let created: io::Result<()> = Err(io::Error::from(io::ErrorKind::Unsupported));

        created.map_err(|e| Error::from_io(link, &e))
    }

    fn current_dir(&self) -> Result<Path> {
        let cwd = std::env::current_dir().map_err(|e| Error::Filesystem {
            path: ".".to_string(),
            reason: e.to_string(),
        })?;
        from_std(&cwd)
    }

    fn set_current_dir(&self, path: &Path) -> Result<()> {
        std::env::set_current_dir(std_path(path)).map_err(|e| Error::from_io(path, &e))
    }

    fn home_dir(&self) -> Result<Path> {
        let home = home::home_dir().ok_or_else(|| Error::NotFound {
            path: "~".to_string(),
        })?;
        from_std(&home)
    }

    fn temp_dir(&self) -> Result<Path> {
        let chosen = TEMP_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
            .unwrap_or_else(|| DEFAULT_TEMP.to_string());
        let temp = Path::new(&chosen);

        if !self.exists(&temp)? {
            return Err(Error::Filesystem {
                path: chosen,
                reason: "temp directory does not exist".to_string(),
            });
        }
        if !self.is_directory(&temp)? {
            return Err(Error::Filesystem {
                path: chosen,
                reason: "temp directory is not a directory".to_string(),
            });
        }
        Ok(temp)
    }
}
