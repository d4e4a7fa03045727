//! Output Rendering
//!
//! Human-readable rendering of pipeline events, and error printing for both
//! text and JSON modes.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::domain::ports::{PipelineEvent, PipelineEventSink};
use crate::domain::value_objects::Stage;

use super::terminal::TerminalCapabilities;
use super::theme::{self, colors, Icons};

/// Which stream a rendered line belongs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Console renderer for pipeline events
pub struct ConsoleEventSink {
    color: bool,
    icons: Icons,
    verbose: bool,
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn new(caps: TerminalCapabilities, verbose: bool) -> Self {
        Self::with_writers(caps, verbose, io::stdout(), io::stderr())
    }

    /// Create a sink over custom streams (for testing)
    pub fn with_writers<O, E>(caps: TerminalCapabilities, verbose: bool, out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            color: caps.supports_color,
            icons: Icons::new(caps.supports_unicode),
            verbose,
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
        }
    }

    fn paint(&self, text: &str, color: crossterm::style::Color) -> String {
        theme::paint(text, color, self.color)
    }

    /// Render an event into zero or more lines
    pub fn render(&self, event: &PipelineEvent) -> Vec<(Stream, String)> {
        let icons = &self.icons;
        match event {
            PipelineEvent::Started {
                directory,
                archive,
                compressed,
            } => {
                let mut lines = vec![(
                    Stream::Stdout,
                    format!(
                        "{} Compressing {}",
                        self.paint(icons.progress, colors::INFO),
                        quoted(directory)
                    ),
                )];
                if self.verbose {
                    lines.push((
                        Stream::Stdout,
                        self.detail(&format!("archive: {}", quoted(archive))),
                    ));
                    lines.push((
                        Stream::Stdout,
                        self.detail(&format!("output:  {}", quoted(compressed))),
                    ));
                }
                lines
            }

            PipelineEvent::StageStarted { stage, command } => {
                let mut lines = vec![(
                    Stream::Stdout,
                    format!(
                        "{} {}...",
                        self.paint(icons.progress, colors::INFO),
                        stage_label(*stage)
                    ),
                )];
                if self.verbose {
                    lines.push((Stream::Stdout, self.detail(command)));
                }
                lines
            }

            PipelineEvent::StageSucceeded { stage } => vec![(
                Stream::Stdout,
                format!(
                    "{} {} complete",
                    self.paint(icons.success, colors::SUCCESS),
                    capitalized(stage.as_str())
                ),
            )],

            PipelineEvent::StageFailed {
                stage,
                program,
                outcome,
            } => vec![(
                Stream::Stderr,
                format!(
                    "{} {} stage failed: {}",
                    self.paint(icons.error, colors::ERROR),
                    capitalized(stage.as_str()),
                    outcome.describe(program)
                ),
            )],

            PipelineEvent::PartialRemoved { path } => vec![(
                Stream::Stderr,
                self.detail(&format!("removed partial {}", quoted(path))),
            )],

            PipelineEvent::CleanupFailed { path, error } => vec![(
                Stream::Stderr,
                format!(
                    "{} Could not remove partial {}: {}",
                    self.paint(icons.warning, colors::WARNING),
                    quoted(path),
                    error
                ),
            )],

            PipelineEvent::ArtifactKept { path } => vec![(
                Stream::Stderr,
                format!(
                    "{} Kept {}",
                    self.paint(icons.warning, colors::WARNING),
                    quoted(path)
                ),
            )],

            // The confirmer writes its own prompt
            PipelineEvent::AwaitingConfirmation => Vec::new(),

            PipelineEvent::RemovalDeclined {
                directory,
                archive,
                compressed,
            } => vec![(
                Stream::Stdout,
                format!(
                    "{} Removal cancelled. Kept {}, {} and {}",
                    self.paint(icons.progress, colors::INFO),
                    quoted(directory),
                    quoted(archive),
                    quoted(compressed)
                ),
            )],

            PipelineEvent::Removed { directory, archive } => vec![(
                Stream::Stdout,
                format!(
                    "{} Removed {} and {}",
                    self.paint(icons.trash, colors::SUCCESS),
                    quoted(directory),
                    quoted(archive)
                ),
            )],

            PipelineEvent::ManualCleanupRequired { paths } => {
                let mut lines = vec![(
                    Stream::Stderr,
                    format!(
                        "{} Remove these manually:",
                        self.paint(icons.warning, colors::WARNING)
                    ),
                )];
                lines.extend(
                    paths
                        .iter()
                        .map(|path| (Stream::Stderr, format!("  {}", path.display()))),
                );
                lines
            }

            PipelineEvent::Completed {
                success: true,
                compressed,
            } => {
                let message = match compressed {
                    Some(path) => format!("Done: {}", quoted(path)),
                    None => "Done".to_string(),
                };
                vec![(
                    Stream::Stdout,
                    format!("{} {}", self.paint(icons.success, colors::SUCCESS), message),
                )]
            }

            PipelineEvent::Completed { success: false, .. } => vec![(
                Stream::Stderr,
                format!("{} Aborted", self.paint(icons.error, colors::ERROR)),
            )],
        }
    }

    fn detail(&self, text: &str) -> String {
        self.paint(&format!("  {} {}", self.icons.arrow, text), colors::DIM)
    }

    fn write_line(&self, stream: Stream, line: &str) {
        let writer = match stream {
            Stream::Stdout => &self.out,
            Stream::Stderr => &self.err,
        };
        if let Ok(mut w) = writer.lock() {
            let _ = writeln!(w, "{}", line);
            let _ = w.flush();
        }
    }
}

impl PipelineEventSink for ConsoleEventSink {
    fn on_event(&self, event: PipelineEvent) {
        for (stream, line) in self.render(&event) {
            self.write_line(stream, &line);
        }
    }
}

fn stage_label(stage: Stage) -> &'static str {
    match stage {
        Stage::Archive => "Archiving",
        Stage::Compress => "Compressing",
        Stage::Remove => "Removing",
    }
}

fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn quoted(path: &Path) -> String {
    format!("'{}'", path.display())
}

pub fn format_error(err: &anyhow::Error) -> String {
    format!("[ERROR] {:#}\n", err)
}

/// Print a fatal error as text on stderr or as a JSON event on stdout
pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "command": "compress",
            "message": format!("{:#}", err),
        });
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{}", output);
        return;
    }

    eprint!("{}", format_error(err));
}
