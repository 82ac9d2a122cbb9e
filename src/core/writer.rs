use crate::core::ResultSink;
use crate::domain::model::{InvalidLine, ResultSet};
use crate::utils::error::{AggregateError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};

/// Echoes every line to the console and appends it to the results file.
/// The file is never truncated, so repeated runs accumulate.
pub struct AppendFileSink<W: Write = Stdout> {
    path: PathBuf,
    console: W,
}

impl AppendFileSink<Stdout> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_console(path, io::stdout())
    }
}

impl<W: Write> AppendFileSink<W> {
    pub fn with_console(path: impl Into<PathBuf>, console: W) -> Self {
        Self {
            path: path.into(),
            console,
        }
    }

    pub fn into_console(self) -> W {
        self.console
    }

    fn open(&self) -> Result<File> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.output_error(e))?;
            }
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.output_error(e))
    }

    fn echo(&mut self, line: &str) -> Result<()> {
        writeln!(self.console, "{}", line).map_err(AggregateError::ConsoleError)
    }

    fn output_error(&self, source: io::Error) -> AggregateError {
        AggregateError::OutputError {
            path: self.path.clone(),
            source,
        }
    }
}

impl<W: Write> ResultSink for AppendFileSink<W> {
    fn report_invalid(&mut self, invalid: &InvalidLine) -> Result<()> {
        self.echo(&invalid.to_string())
    }

    fn write_results(&mut self, results: &ResultSet, leading_blank_line: bool) -> Result<()> {
        let mut file = self.open()?;

        if leading_blank_line {
            file.write_all(b"\n").map_err(|e| self.output_error(e))?;
        }

        for line in results.lines() {
            self.echo(&line)?;
            writeln!(file, "{}", line).map_err(|e| self.output_error(e))?;
        }

        file.flush().map_err(|e| self.output_error(e))?;
        tracing::debug!("Appended {} lines to {}", results.len(), self.path.display());
        Ok(())
    }

    fn write_trailer(&mut self, line: &str) -> Result<()> {
        self.echo(line)?;

        let mut file = self.open()?;
        file.write_all(line.as_bytes())
            .map_err(|e| self.output_error(e))?;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

pub fn output_file(directory: &Path, file_name: &str) -> PathBuf {
    directory.join(file_name)
}
