// Interactive shell over a FAT16 session
// Parses one command per line and renders the engine's results

use crate::render;
use fateater_filesystems::{listing_rows, DirectoryChange, Fat16Session};
use log::debug;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    ChangeDirectory(String),
    Cat(String),
    Pwd,
    Header,
    Help,
    Exit,
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let require_arg = |usage: &str| {
            if arg.is_empty() {
                Err(format!("usage: {}", usage))
            } else {
                Ok(arg.to_string())
            }
        };

        match name {
            "" => Ok(Command::Empty),
            "ls" => Ok(Command::List),
            "cd" => require_arg("cd <directory>").map(Command::ChangeDirectory),
            "cat" => require_arg("cat <file>").map(Command::Cat),
            "pwd" => Ok(Command::Pwd),
            "header" => Ok(Command::Header),
            "help" => Ok(Command::Help),
            "exit" | "quit" => Ok(Command::Exit),
            other => Err(format!("unknown command: {} (try 'help')", other)),
        }
    }
}

const HELP: &str = "\
ls              List files in the current directory
cd <directory>  Change directory
cat <file>      Print file contents
header          Print FAT16 header
pwd             Print current directory
exit            Leave the shell";

pub struct Shell<W: Write> {
    session: Fat16Session,
    out: W,
    json: bool,
}

impl<W: Write> Shell<W> {
    pub fn new(session: Fat16Session, out: W, json: bool) -> Self {
        Self { session, out, json }
    }

    pub fn prompt(&self) -> String {
        format!("{}:{} ", self.session.options().prompt, self.session.pwd())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run one line. Returns `false` when the shell should exit.
    ///
    /// Engine errors are reported on the output and do not end the shell.
    pub fn execute(&mut self, line: &str) -> anyhow::Result<bool> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(self.out, "{}", message)?;
                return Ok(true);
            }
        };
        debug!("Executing {:?}", command);

        if let Err(err) = self.dispatch(&command) {
            match err.downcast_ref::<fateater_core::InspectError>() {
                Some(inspect) if inspect.is_recoverable() => writeln!(self.out, "error: {}", inspect)?,
                _ => return Err(err),
            }
        }
        Ok(command != Command::Exit)
    }

    fn dispatch(&mut self, command: &Command) -> anyhow::Result<()> {
        match command {
            Command::List => {
                let rows = listing_rows(&self.session.list()?);
                if self.json {
                    writeln!(self.out, "{}", serde_json::to_string_pretty(&rows)?)?;
                } else {
                    render::write_table(&mut self.out, &rows)?;
                }
            }
            Command::ChangeDirectory(name) => {
                if self.session.change_directory(name)? != DirectoryChange::Unchanged {
                    debug!("Now in {}", self.session.pwd());
                }
            }
            Command::Cat(name) => {
                if let Some(content) = self.session.cat(name)? {
                    self.out.write_all(&content)?;
                    writeln!(self.out)?;
                }
            }
            Command::Pwd => writeln!(self.out, "{}", self.session.pwd())?,
            Command::Header => {
                if self.json {
                    writeln!(self.out, "{}", serde_json::to_string_pretty(self.session.header())?)?;
                } else {
                    render::write_header(&mut self.out, self.session.header())?;
                }
            }
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Exit | Command::Empty => {}
        }
        self.out.flush()?;
        Ok(())
    }

    /// Read commands from `input` until EOF or `exit`, printing a prompt before each.
    pub fn run<R: BufRead>(&mut self, input: R) -> anyhow::Result<()> {
        let mut lines = input.lines();
        loop {
            write!(self.out, "{}", self.prompt())?;
            self.out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(self.out)?;
                return Ok(());
            };
            if !self.execute(&line?)? {
                return Ok(());
            }
        }
    }
}
