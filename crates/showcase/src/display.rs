use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::Mutex,
};

use shared::error::{Result, ShowcaseError};

/// A set of named, write-only text targets. Each render replaces whatever
/// the target showed before.
pub trait DisplaySurface: Send + Sync {
    fn render(&self, target: &str, text: &str) -> Result<()>;
}

impl<T> DisplaySurface for &T
where
    T: DisplaySurface + ?Sized,
{
    fn render(&self, target: &str, text: &str) -> Result<()> {
        (**self).render(target, text)
    }
}

#[derive(Debug, Default)]
pub struct MemoryDisplay {
    targets: Mutex<HashMap<String, String>>,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, target: &str) -> Option<String> {
        let targets = match self.targets.lock() {
            Ok(targets) => targets,
            Err(poisoned) => poisoned.into_inner(),
        };
        targets.get(target).cloned()
    }
}

impl DisplaySurface for MemoryDisplay {
    fn render(&self, target: &str, text: &str) -> Result<()> {
        let mut targets = match self.targets.lock() {
            Ok(targets) => targets,
            Err(poisoned) => poisoned.into_inner(),
        };
        targets.insert(target.to_string(), text.to_string());
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    #[default]
    Stdout,
    Stderr,
}

/// Prints `#<target>: <text>` lines to one of the process streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDisplay {
    stream: ConsoleStream,
}

impl ConsoleDisplay {
    pub fn new(stream: ConsoleStream) -> Self {
        Self { stream }
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }
}

impl DisplaySurface for ConsoleDisplay {
    fn render(&self, target: &str, text: &str) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => println!("#{target}: {text}"),
            ConsoleStream::Stderr => eprintln!("#{target}: {text}"),
        }
        Ok(())
    }
}

/// Writes each target to `<dir>/<target>.txt`.
#[derive(Debug, Clone)]
pub struct FileDisplay {
    dir: PathBuf,
}

impl FileDisplay {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn target_path(&self, target: &str) -> PathBuf {
        self.dir.join(format!("{target}.txt"))
    }
}

impl DisplaySurface for FileDisplay {
    fn render(&self, target: &str, text: &str) -> Result<()> {
        fs::write(self.target_path(target), text).map_err(|source| ShowcaseError::Display {
            target: target.to_string(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "tests/display_tests.rs"]
mod tests;
