//! Interactive input: asking for the target directory and the final pause.
//!
//! Kept behind [`Interact`] so the organizer never depends on a terminal.

use std::io::{self, BufRead, Stdin, Stdout, Write};

use crate::config::strip_wrapping_quotes;

pub const TARGET_PROMPT: &str = "Enter the full path of the folder to organize: ";
pub const EXIT_PROMPT: &str = "\nPress Enter to exit...";

pub trait Interact {
    /// Ask for the directory to organize. `None` on EOF or an empty/quote-only answer.
    fn ask_target(&mut self) -> io::Result<Option<String>>;

    /// Wait for Enter. A no-op when the session is not interactive.
    fn pause(&mut self) -> io::Result<()>;
}

/// Line-based console over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
    interactive: bool,
}

impl Console<io::StdinLock<'static>, Stdout> {
    /// Console over the process stdin/stdout; interactive only when stdin is a TTY.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout(), atty::is(atty::Stream::Stdin))
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, interactive: bool) -> Self {
        Self {
            input,
            output,
            interactive,
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

impl<R: BufRead, W: Write> Interact for Console<R, W> {
    fn ask_target(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "{TARGET_PROMPT}")?;
        self.output.flush()?;
        let answer = self
            .read_line()?
            .map(|line| strip_wrapping_quotes(&line).to_string())
            .filter(|s| !s.is_empty());
        Ok(answer)
    }

    fn pause(&mut self) -> io::Result<()> {
        if !self.interactive {
            return Ok(());
        }
        write!(self.output, "{EXIT_PROMPT}")?;
        self.output.flush()?;
        self.read_line().map(|_| ())
    }
}
