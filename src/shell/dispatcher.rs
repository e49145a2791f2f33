// src/shell/dispatcher.rs
//!
//! Read-eval-print loop
//!
//! Reads one line at a time, dispatches it through the command table and
//! renders results on the output stream and failures as
//! `<command> error: <detail>` on the diagnostic stream. No command failure
//! ends the session.

use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use super::command::Command;
use super::help::{BANNER, GOODBYE, HELP, UNKNOWN_COMMAND, UNKNOWN_DIR};
use super::parser::tokenize;
use crate::filesystem::{self, FsError, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Exiting,
}

pub struct Shell<R, W, E> {
    session: Session,
    input: R,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> Shell<R, W, E> {
    pub fn new(session: Session, input: R, out: W, err: E) -> Self {
        Self {
            session,
            input,
            out,
            err,
        }
    }

    pub fn into_parts(self) -> (Session, W, E) {
        (self.session, self.out, self.err)
    }

    /// Run until `exit` or end of input. Only failures of the terminal
    /// streams themselves are returned.
    pub fn run(&mut self, show_banner: bool) -> io::Result<()> {
        if show_banner {
            writeln!(self.out, "{}", BANNER)?;
            writeln!(self.out, "{}", HELP)?;
        }

        let mut line = Vec::new();
        loop {
            self.prompt()?;

            line.clear();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                debug!("end of input");
                break;
            }

            let text = String::from_utf8_lossy(&line);
            if self.execute_line(&text)? == ShellState::Exiting {
                break;
            }
        }

        writeln!(self.out, "{}", GOODBYE)?;
        self.out.flush()?;
        info!("session ended");
        Ok(())
    }

    fn prompt(&mut self) -> io::Result<()> {
        match self.session.display_dir() {
            Some(dir) => write!(self.out, "\n[{}]> ", dir.display())?,
            None => write!(self.out, "\n[{}]> ", UNKNOWN_DIR)?,
        }
        self.out.flush()
    }

    /// Tokenize and dispatch one raw input line
    pub fn execute_line(&mut self, line: &str) -> io::Result<ShellState> {
        let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        if line.is_empty() {
            return Ok(ShellState::Running);
        }

        let tokens = tokenize(line);
        match tokens.split_first() {
            Some((name, args)) => self.dispatch(name, args),
            None => Ok(ShellState::Running),
        }
    }

    fn dispatch(&mut self, name: &str, args: &[String]) -> io::Result<ShellState> {
        let Some(command) = Command::parse(name) else {
            writeln!(self.out, "{}", UNKNOWN_COMMAND)?;
            return Ok(ShellState::Running);
        };

        if args.len() < command.min_args() {
            writeln!(self.out, "{}", command.usage())?;
            return Ok(ShellState::Running);
        }

        debug!(command = command.name(), ?args, "dispatch");

        match command {
            Command::Exit => return Ok(ShellState::Exiting),
            Command::Help => writeln!(self.out, "{}", HELP)?,
            _ => match self.run_command(command, args) {
                Ok(lines) => {
                    for line in lines {
                        writeln!(self.out, "{}", line)?;
                    }
                }
                Err(e) => {
                    debug!(command = command.name(), error = %e, "command failed");
                    writeln!(self.err, "{} error: {}", command.name(), e)?;
                    self.err.flush()?;
                }
            },
        }

        Ok(ShellState::Running)
    }

    /// Run a filesystem command, returning the lines to print
    fn run_command(&mut self, command: Command, args: &[String]) -> Result<Vec<String>, FsError> {
        let arg = |i: usize| args.get(i).map(String::as_str).unwrap_or("");

        match command {
            Command::Ls => {
                let entries = filesystem::list_directory(&self.session.resolve(arg(0)))?;
                Ok(entries
                    .iter()
                    .map(|e| {
                        format!(
                            "{:<7} {}  {}",
                            format!("[{}]", e.kind),
                            e.name,
                            e.permissions_display()
                        )
                    })
                    .collect())
            }
            Command::Pwd => match self.session.display_dir() {
                Some(dir) => Ok(vec![dir.display().to_string()]),
                None => Err(FsError::NotFound {
                    path: self.session.current_dir().display().to_string(),
                }),
            },
            Command::Cd => {
                self.session.change_directory(arg(0))?;
                Ok(Vec::new())
            }
            Command::Back => {
                self.session.go_to_parent()?;
                Ok(Vec::new())
            }
            Command::Copy => {
                let source = self.session.resolve_target(arg(0))?;
                let destination = self.session.resolve_target(arg(1))?;
                filesystem::copy_path(&source, &destination)?;
                Ok(Vec::new())
            }
            Command::Move => {
                let source = self.session.resolve_target(arg(0))?;
                let destination = self.session.resolve_target(arg(1))?;
                filesystem::move_path(&source, &destination)?;
                Ok(Vec::new())
            }
            Command::Rm => {
                filesystem::remove_path(&self.session.resolve_target(arg(0))?)?;
                Ok(Vec::new())
            }
            Command::Mkdir => {
                filesystem::make_directory(&self.session.resolve_target(arg(0))?)?;
                Ok(Vec::new())
            }
            Command::Touch => {
                filesystem::make_empty_file(&self.session.resolve_target(arg(0))?)?;
                Ok(Vec::new())
            }
            Command::Search => {
                let name = arg(0);
                let matches = filesystem::search(&self.session.resolve(arg(1)), name)?;
                if matches.is_empty() {
                    return Ok(vec![format!("No matches for '{}'", name)]);
                }
                Ok(matches
                    .iter()
                    .map(|p| format!("Found: {}", p.display()))
                    .collect())
            }
            Command::Perms => {
                let path = self.session.resolve_target(arg(0))?;
                let permissions = filesystem::get_permissions(&path)?;
                Ok(vec![format!(
                    "Permissions: {} ({})",
                    permissions,
                    permissions.to_octal()
                )])
            }
            Command::Chmod => {
                filesystem::set_permissions(&self.session.resolve_target(arg(0))?, arg(1))?;
                Ok(Vec::new())
            }
            // Handled by the dispatcher before any filesystem work
            Command::Help | Command::Exit => Ok(Vec::new()),
        }
    }
}
