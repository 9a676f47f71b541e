//! Read-eval-print loop.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use crate::render::Renderer;
use crate::session::{Outcome, Session};

const PROMPT: &str = "cmd> ";

pub struct Shell {
    session: Session,
    renderer: Box<dyn Renderer>,
    prompt: bool,
}

impl Shell {
    /// With `prompt` set, each command is preceded by `cmd> ` and echoed back,
    /// so a transcript of redirected input reads like an interactive session.
    pub fn new(session: Session, renderer: Box<dyn Renderer>, prompt: bool) -> Self {
        Self {
            session,
            renderer,
            prompt,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        let mut line = Vec::new();
        loop {
            if self.prompt {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            let text = String::from_utf8_lossy(&line);
            let command = text.trim_end_matches(['\n', '\r']);
            if self.prompt {
                writeln!(out, "{command}")?;
            }

            // A line that is not UTF-8 is a bad command, not a broken stream.
            let outcome = match &text {
                Cow::Borrowed(_) => self.session.execute(command),
                Cow::Owned(_) => {
                    tracing::debug!(command, "command is not valid UTF-8");
                    Outcome::Invalid("command is not valid UTF-8".to_string())
                }
            };
            self.renderer.render(out, &outcome)?;

            if outcome == Outcome::Quit {
                break;
            }
        }
        out.flush()
    }
}
