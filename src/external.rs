//! External programs: the archiver that packs pages and the viewer that opens archives.

use std::{
    env,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use tokio::process::Command;

use crate::errors::{Error, Result};

#[allow(async_fn_in_trait)]
pub trait Archiver {
    /// Packs `files` into `output`, entries in the given order.
    ///
    /// Entry names are the file paths relative to the archiver's working directory;
    /// files outside it keep their full path as the entry name.
    async fn archive(&self, files: &[PathBuf], output: &Path) -> Result<()>;
}

#[allow(async_fn_in_trait)]
pub trait Viewer {
    async fn open(&self, path: &Path) -> Result<()>;
}

/// Runs `<program> -q <output> <files...>` from inside `workdir`.
#[derive(Debug, Clone)]
pub struct ZipCommand {
    program: String,
    workdir: PathBuf,
}

impl ZipCommand {
    pub fn new(program: impl Into<String>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            workdir: workdir.into(),
        }
    }

    fn args(&self, files: &[PathBuf], output: &Path) -> Vec<PathBuf> {
        let mut args = vec![PathBuf::from("-q"), output.to_path_buf()];
        args.extend(files.iter().map(|file| match file.strip_prefix(&self.workdir) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => {
                warn!(
                    "{} is outside {}, packing it under its full path",
                    file.display(),
                    self.workdir.display()
                );
                file.clone()
            }
        }));
        args
    }
}

impl Archiver for ZipCommand {
    async fn archive(&self, files: &[PathBuf], output: &Path) -> Result<()> {
        let args = self.args(files, output);
        debug!("running {} {args:?}", self.program);

        let status = Command::new(&self.program)
            .args(&args)
            .current_dir(&self.workdir)
            .status()
            .await
            .map_err(|err| Error::Archive {
                output: output.to_path_buf(),
                reason: err.to_string(),
            })?;

        if !status.success() {
            return Err(Error::Archive {
                output: output.to_path_buf(),
                reason: format!("{} exited with {status}", self.program),
            });
        }

        info!("packed {} pages into {}", files.len(), output.display());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ExternalViewer {
    program: String,
}

impl ExternalViewer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Viewer for ExternalViewer {
    async fn open(&self, path: &Path) -> Result<()> {
        debug!("opening {} with {}", path.display(), self.program);

        let viewer_error = |reason: String| Error::Viewer {
            path: path.to_path_buf(),
            reason,
        };
        let status = Command::new(&self.program)
            .arg(path)
            .status()
            .await
            .map_err(|err| viewer_error(err.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(viewer_error(format!("{} exited with {status}", self.program)))
        }
    }
}

/// Looks `program` up on `PATH`.
pub fn find_program(program: &str) -> Option<PathBuf> {
    let path = Path::new(program);
    if path.components().count() > 1 {
        return path.is_file().then(|| path.to_path_buf());
    }

    env::var_os("PATH").and_then(|paths| {
        env::split_paths(&paths)
            .map(|dir| dir.join(program))
            .find(|candidate| candidate.is_file())
    })
}

pub fn check_dependencies<'a>(programs: impl IntoIterator<Item = &'a str>) -> Result<()> {
    for program in programs {
        match find_program(program) {
            Some(found) => debug!("found {program} at {}", found.display()),
            None => return Err(Error::DependencyMissing(program.to_string())),
        }
    }
    Ok(())
}
