//! Canonicalization: absolute, symlink-free, normalized paths verified
//! against the filesystem.
//!
//! [`Shell::canonical`] walks the components of an absolutized path,
//! accumulating a result. Whenever the accumulator names a symlink, the
//! link's target is spliced in place of what has been consumed so far, the
//! accumulator is discarded, and the walk restarts on the new path. The walk
//! is done when a full pass finds no symlink.

use super::Shell;
use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::path::{Path, DOT, DOT_DOT};

/// Outcome of one pass over an absolutized path.
enum Pass {
    /// No symlinks were met; the accumulator is canonical.
    Done(Path),
    /// A symlink was met; walk this path next.
    Substitute(Path),
}

impl<F: FileSystem> Shell<F> {
    /// `path` made absolute against `base`, purely lexically.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadPath`] if `base` is not absolute or the
    /// root-names conflict.
    pub fn absolute(&self, path: &Path, base: &Path) -> Result<Path> {
        path.lexically_absolute(base)
    }

    /// [`Shell::absolute`] against the current directory.
    ///
    /// # Errors
    ///
    /// As [`Shell::absolute`], plus failure to read the working directory.
    pub fn absolute_from_cwd(&self, path: &Path) -> Result<Path> {
        self.absolute(path, &self.current_dir()?)
    }

    /// The absolute, symlink-free, normalized form of `path`, resolved
    /// against `base`.
    ///
    /// `base` must be an existing directory. Every component of the result
    /// must exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `base` is missing or not a directory,
    /// [`Error::SymlinkLoop`] once more substitutions than the shell's bound
    /// have been made, and any error the filesystem reports while probing or
    /// reading links.
    ///
    /// # Examples
    ///
    /// ```
    /// use cxpath::fs::MemoryFileSystem;
    /// use cxpath::{Path, Platform, Shell};
    ///
    /// let fs = MemoryFileSystem::new();
    /// fs.add_dir("/srv/releases/v2/bin").add_symlink("/srv/current", "releases/v2");
    /// let shell = Shell::with_fs(fs, Platform::Posix);
    ///
    /// let p = |s| Path::with_platform(s, Platform::Posix);
    /// let real = shell.canonical(&p("current/./bin/.."), &p("/srv")).unwrap();
    /// assert_eq!(real.to_string(), "/srv/releases/v2");
    ///
    /// // `..` after a link climbs from the link's target
    /// assert!(shell.canonical(&p("current/../current"), &p("/srv")).is_err());
    /// ```
    pub fn canonical(&self, path: &Path, base: &Path) -> Result<Path> {
        let mut abase = path.lexically_absolute(base)?;
        if !self.fs.exists(base)? || !self.fs.is_directory(base)? {
            return Err(Error::NotFound {
                path: base.to_string(),
            });
        }

        let mut substitutions = 0;
        loop {
            match self.canonical_pass(&abase)? {
                Pass::Done(canonical) => return Ok(canonical),
                Pass::Substitute(next) => {
                    substitutions += 1;
                    if substitutions > self.max_symlink_depth {
                        return Err(Error::SymlinkLoop {
                            path: path.to_string(),
                            limit: self.max_symlink_depth,
                        });
                    }
                    log::debug!("canonical: restarting {path} as {next}");
                    abase = next;
                }
            }
        }
    }

    fn canonical_pass(&self, abase: &Path) -> Result<Pass> {
        let platform = abase.platform();
        let root = abase.root_path();
        let mut canonical = Path::empty(platform);

        for (i, component) in abase.iter().enumerate() {
            if component == DOT {
                continue;
            }
            if component == DOT_DOT {
                if canonical != root {
                    canonical.remove_filename();
                }
                continue;
            }

            canonical.append_unchecked(&Path::with_platform(component, platform));
            if !self.fs.is_symlink(&canonical)? {
                continue;
            }

            let link = self.fs.read_link(&canonical)?;
            log::debug!("canonical: {canonical} -> {link}");
            canonical.remove_filename();
            let mut next = if link.is_absolute() {
                link
            } else {
                canonical.join(&link)?
            };
            for rest in abase.iter().skip(i + 1) {
                next.append_unchecked(&Path::with_platform(rest, platform));
            }
            return Ok(Pass::Substitute(next));
        }

        Ok(Pass::Done(canonical))
    }

    /// [`Shell::canonical`] against the current directory.
    ///
    /// # Errors
    ///
    /// As [`Shell::canonical`].
    pub fn canonical_from_cwd(&self, path: &Path) -> Result<Path> {
        self.canonical(path, &self.current_dir()?)
    }

    /// Canonicalizes the longest existing prefix of `path` and re-attaches
    /// the rest.
    ///
    /// Prefixes are taken component by component without normalizing, so
    /// the re-attached tail is exactly the components that were dropped. If
    /// no prefix exists the lexical normal form is returned, since there is
    /// no filesystem truth to consult. The result is only normalized when
    /// the tail contains `.` or `..`.
    ///
    /// # Errors
    ///
    /// Fails if probing a prefix fails for a reason other than absence, or
    /// if canonicalizing the existing prefix fails.
    pub fn weakly_canonical(&self, path: &Path) -> Result<Path> {
        let platform = path.platform();
        let mut prefixes = Vec::with_capacity(path.len());
        let mut prefix = Path::empty(platform);
        for component in path.iter() {
            prefix.append_unchecked(&Path::with_platform(component, platform));
            prefixes.push(prefix.clone());
        }

        let mut existing = 0;
        for (i, candidate) in prefixes.iter().enumerate().rev() {
            if self.fs.exists(candidate)? {
                existing = i + 1;
                break;
            }
        }
        if existing == 0 {
            return Ok(path.lexically_normal());
        }

        let head = &prefixes[existing - 1];
        let mut tail = Path::empty(platform);
        let mut tail_has_dots = false;
        for component in path.iter().skip(existing) {
            tail.append_unchecked(&Path::with_platform(component, platform));
            tail_has_dots |= component == DOT || component == DOT_DOT;
        }

        log::debug!("weakly_canonical: existing head {head}, tail {tail}");
        let head = self.canonical_from_cwd(head)?;
        if tail.is_empty() {
            return Ok(head);
        }

        let joined = head.join(&tail)?;
        Ok(if tail_has_dots {
            joined.lexically_normal()
        } else {
            joined
        })
    }

    /// `path` relative to `base`, after weakly canonicalizing both.
    ///
    /// # Errors
    ///
    /// As [`Shell::weakly_canonical`].
    pub fn relative(&self, path: &Path, base: &Path) -> Result<Path> {
        let base = self.weakly_canonical(base)?;
        Ok(self.weakly_canonical(path)?.lexically_relative(&base))
    }

    /// [`Shell::relative`] against the current directory.
    ///
    /// # Errors
    ///
    /// As [`Shell::relative`].
    pub fn relative_from_cwd(&self, path: &Path) -> Result<Path> {
        self.relative(path, &self.current_dir()?)
    }

    /// `path` prefixed with the current directory unless it is empty or
    /// already absolute.
    ///
    /// # Errors
    ///
    /// Fails if the working directory cannot be read or the root-names
    /// conflict.
    pub fn system_complete(&self, path: &Path) -> Result<Path> {
        if path.is_empty() || path.is_absolute() {
            return Ok(path.clone());
        }
        self.current_dir()?.join(path)
    }
}
