//! Interactive selection of the scores file.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::text;
use crate::error::{Error, Result};

/// Console interaction needed while asking for a file path.
pub trait PathPrompter {
    /// Show `prompt` and read one line, without its line terminator.
    ///
    /// Returns `None` once input is exhausted.
    fn prompt_line(&mut self, prompt: &str) -> Option<String>;

    /// Display a message to the user
    fn display_message(&mut self, message: &str);
}

/// An opened regular file holding exam records.
#[derive(Debug)]
pub struct ScoresFile {
    path: PathBuf,
    file: File,
}

impl ScoresFile {
    /// Open `path`, rejecting anything that is not a regular file.
    ///
    /// The open and the file-type check happen on the same handle, so a file
    /// that passes cannot disappear before it is read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| Error::Open {
            path: path.clone(),
            source,
        })?;
        let metadata = file.metadata().map_err(|source| Error::Open {
            path: path.clone(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(Error::NotAFile(path));
        }
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_reader(self) -> BufReader<File> {
        BufReader::new(self.file)
    }
}

/// Prompt until a path that opens as a regular file is entered.
///
/// Every rejected path is reported with `Sorry, I cannot open: <name>`.
/// Fails only with [`Error::InputClosed`] when the prompter runs dry.
pub fn acquire_scores_file<P: PathPrompter>(prompter: &mut P) -> Result<ScoresFile> {
    loop {
        let name = prompter
            .prompt_line(text::PROMPT)
            .ok_or(Error::InputClosed)?;

        match ScoresFile::open(&name) {
            Ok(file) => {
                debug!("Opened scores file {:?}", file.path());
                return Ok(file);
            }
            Err(e) => {
                debug!("Rejected scores file: {}", e);
                prompter.display_message(&format!("{} {}", text::CANNOT_OPEN, name));
            }
        }
    }
}
