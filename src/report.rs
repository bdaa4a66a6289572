//! Progress and summary reporting for a phase update run.
//!
//! The updater emits an [`UpdateEvent`] for every step it takes. A
//! [`Reporter`] decides what to do with them: [`ConsoleReporter`] prints the
//! human-readable progress log, [`RecordingReporter`] keeps them for
//! inspection.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

#[cfg(feature = "colorized_output")]
use console::style;

use crate::dataset::PhaseDistribution;
use crate::updater::Classification;

/// One observable step of a phase update run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateEvent {
    /// The dataset is about to be read
    Reading {
        /// Dataset path
        path: PathBuf,
    },
    /// The dataset was loaded
    Loaded {
        /// Number of particle records
        rows: usize,
    },
    /// A classification directory is about to be scanned
    Scanning {
        /// Classification the directory stands for
        class: Classification,
        /// Directory path
        path: PathBuf,
    },
    /// A classification directory does not exist
    DirectoryMissing {
        /// Directory path
        path: PathBuf,
    },
    /// A classification directory was scanned
    Found {
        /// Classification the directory stands for
        class: Classification,
        /// Number of distinct identifiers found
        count: usize,
    },
    /// The relabeling pass is starting
    Updating,
    /// Number of records assigned to one classification
    Updated {
        /// Classification assigned
        class: Classification,
        /// Phase value written
        phase: i64,
        /// Number of records assigned
        count: usize,
    },
    /// The dataset is about to be written back
    Saving {
        /// Dataset path
        path: PathBuf,
    },
    /// The write was skipped because of a dry run
    DryRun {
        /// Dataset path that was left untouched
        path: PathBuf,
    },
    /// The run finished
    Done,
    /// Final phase distribution of the dataset
    Distribution(PhaseDistribution),
}

impl UpdateEvent {
    /// Events that open a new block in the console log
    fn starts_section(&self) -> bool {
        matches!(
            self,
            UpdateEvent::Scanning { .. }
                | UpdateEvent::Updating
                | UpdateEvent::Saving { .. }
                | UpdateEvent::DryRun { .. }
                | UpdateEvent::Distribution(_)
        )
    }
}

impl fmt::Display for UpdateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateEvent::Reading { path } => write!(f, "Reading {}...", path.display()),
            UpdateEvent::Loaded { rows } => write!(f, "Loaded {} particles", rows),
            UpdateEvent::Scanning { path, .. } => write!(f, "Scanning {}...", path.display()),
            UpdateEvent::DirectoryMissing { path } => {
                write!(f, "Warning: Directory {} does not exist", path.display())
            }
            UpdateEvent::Found { class, count } => {
                write!(f, "Found {} particles in {} directory", count, class)
            }
            UpdateEvent::Updating => write!(f, "Updating phases..."),
            UpdateEvent::Updated {
                class,
                phase,
                count,
            } => write!(f, "Updated {} particles to phase {} ({})", count, phase, class),
            UpdateEvent::Saving { path } => {
                write!(f, "Saving updated CSV to {}...", path.display())
            }
            UpdateEvent::DryRun { path } => {
                write!(f, "Dry run: not writing {}", path.display())
            }
            UpdateEvent::Done => write!(f, "Done!"),
            UpdateEvent::Distribution(distribution) => write!(f, "{}", distribution),
        }
    }
}

/// Receives the events of a phase update run
pub trait Reporter {
    /// Handle one event
    fn report(&mut self, event: &UpdateEvent);
}

/// Prints the progress log as plain text
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
    colored: bool,
}

impl ConsoleReporter {
    /// Report to standard output, styled when the `colorized_output` feature is on
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            colored: cfg!(feature = "colorized_output"),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Report unstyled text to an arbitrary writer
    pub fn plain(out: W) -> Self {
        Self {
            out,
            colored: false,
        }
    }

    /// Consume the reporter, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&self, event: &UpdateEvent) -> String {
        let text = event.to_string();
        if !self.colored {
            return text;
        }

        #[cfg(feature = "colorized_output")]
        {
            match event {
                UpdateEvent::DirectoryMissing { .. } => style(text).yellow().bold().to_string(),
                UpdateEvent::Done => style(text).green().bold().to_string(),
                UpdateEvent::Distribution(_) => style(text).cyan().to_string(),
                _ => text,
            }
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            text
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, event: &UpdateEvent) {
        let text = self.render(event);
        // Progress output is best effort; a closed stdout must not abort the run
        if event.starts_section() {
            let _ = writeln!(self.out);
        }
        let _ = match event {
            // The distribution table already ends with a newline
            UpdateEvent::Distribution(_) => write!(self.out, "{}", text),
            _ => writeln!(self.out, "{}", text),
        };
    }
}

/// Keeps every event in order
#[derive(Debug, Default)]
pub struct RecordingReporter {
    /// Events received so far
    pub events: Vec<UpdateEvent>,
}

impl RecordingReporter {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: &UpdateEvent) {
        self.events.push(event.clone());
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&mut self, _event: &UpdateEvent) {}
}
