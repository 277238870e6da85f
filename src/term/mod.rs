//! Terminal interaction layer.
//!
//! The controller talks to the outside world only through [`Console`], so the
//! real terminal ([`Terminal`]) and the in-memory script used by tests
//! ([`ScriptedConsole`]) are interchangeable.
//!
mod scripted;

pub use scripted::ScriptedConsole;

use crossterm::cursor::{MoveLeft, MoveTo};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode};
use crossterm::{execute, queue};
use std::io::{self, BufRead, ErrorKind, IsTerminal, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;
use unicode_width::UnicodeWidthChar;

/// How often a blocked read looks at the interrupt flag.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What a blocking read produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// A submitted line, without its terminator.
    Line(String),
    /// The user pressed Ctrl-C, or the process received SIGINT/SIGTERM.
    Interrupted,
    /// Input ended (EOF, or Ctrl-D on an empty line).
    Closed,
}

/// Line-oriented input/output used by the viewer.
pub trait Console {
    /// Write `line` followed by a newline.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Show `prompt` and block until a line, an interrupt or end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Input>;

    /// Clear the screen. Consoles without the capability do nothing.
    fn clear(&mut self) -> io::Result<()>;
}

/// Route SIGINT/SIGTERM into a flag instead of killing the process.
///
/// Can be installed once per process.
pub fn install_interrupt_flag() -> Result<Arc<AtomicBool>, ctrlc::Error> {
    let flag = Arc::new(AtomicBool::new(false));
    let f = flag.clone();
    ctrlc::set_handler(move || {
        f.store(true, Ordering::SeqCst);
    })?;
    Ok(flag)
}

/// One message from the stdin reader thread: a line, or `None` at EOF.
type StdinLine = io::Result<Option<String>>;

/// Console over the process's stdin/stdout.
pub struct Terminal {
    out: io::Stdout,
    clear_enabled: bool,
    interactive: bool,
    interrupt: Arc<AtomicBool>,
    stdin_lines: Option<Receiver<StdinLine>>,
}

impl Terminal {
    /// Attach to stdio. Line editing runs in raw mode when stdin is a TTY.
    ///
    /// Reads end with [`Input::Interrupted`] once `interrupt` is set.
    pub fn stdio(clear_enabled: bool, interrupt: Arc<AtomicBool>) -> Self {
        let out = io::stdout();
        let interactive = io::stdin().is_terminal();
        let clear_enabled = clear_enabled && out.is_terminal();
        tracing::debug!(interactive, clear_enabled, "terminal attached");
        Self {
            out,
            clear_enabled,
            interactive,
            interrupt,
            stdin_lines: None,
        }
    }

    fn read_buffered(&mut self) -> io::Result<Input> {
        let lines = self.stdin_lines.get_or_insert_with(spawn_stdin_reader);
        next_buffered_line(lines, &self.interrupt)
    }

    fn read_raw(&mut self) -> io::Result<Input> {
        let guard = RawModeGuard::enable()?;
        let res = self.edit_line();
        drop(guard);
        // The submitting Enter was swallowed by raw mode.
        writeln!(self.out)?;
        res
    }

    fn edit_line(&mut self) -> io::Result<Input> {
        let mut buf = String::new();
        loop {
            if self.interrupt.load(Ordering::SeqCst) {
                return Ok(Input::Interrupted);
            }
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match edit_key(&mut buf, key) {
                Edit::Done(input) => return Ok(input),
                Edit::Echo(c) => queue!(self.out, crossterm::style::Print(c))?,
                Edit::Erase(cols) => {
                    queue!(self.out, MoveLeft(cols), Clear(ClearType::UntilNewLine))?
                }
                Edit::Nothing => {}
            }
            self.out.flush()?;
        }
    }
}

impl Console for Terminal {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Input> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        if self.interrupt.load(Ordering::SeqCst) {
            return Ok(Input::Interrupted);
        }
        if self.interactive {
            self.read_raw()
        } else {
            self.read_buffered()
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_enabled {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

/// Read stdin line by line on a helper thread so the caller can keep
/// watching the interrupt flag while it waits.
fn spawn_stdin_reader() -> Receiver<StdinLine> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let stdin = io::stdin();
        loop {
            let mut buf = String::new();
            let msg = match stdin.lock().read_line(&mut buf) {
                Ok(0) => Ok(None),
                Ok(_) => Ok(Some(strip_line_ending(&buf).to_string())),
                Err(e) => Err(e),
            };
            let done = !matches!(msg, Ok(Some(_)));
            if tx.send(msg).is_err() || done {
                break;
            }
        }
    });
    rx
}

fn strip_line_ending(buf: &str) -> &str {
    let line = buf.strip_suffix('\n').unwrap_or(buf);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Wait for the next line from `lines`, giving up as soon as `interrupt` is set.
fn next_buffered_line(lines: &Receiver<StdinLine>, interrupt: &AtomicBool) -> io::Result<Input> {
    loop {
        if interrupt.load(Ordering::SeqCst) {
            return Ok(Input::Interrupted);
        }
        match lines.recv_timeout(POLL_INTERVAL) {
            Ok(Ok(Some(line))) => return Ok(Input::Line(line)),
            Ok(Ok(None)) | Err(RecvTimeoutError::Disconnected) => return Ok(Input::Closed),
            Ok(Err(e)) if e.kind() == ErrorKind::Interrupted => return Ok(Input::Interrupted),
            Ok(Err(e)) => return Err(e),
            Err(RecvTimeoutError::Timeout) => {}
        }
    }
}

/// Restores cooked mode when dropped, including on early return.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        disable_raw_mode().ok();
    }
}

/// Effect of one key press on the line being edited.
#[derive(Debug, PartialEq, Eq)]
enum Edit {
    Done(Input),
    Echo(char),
    /// Step back this many columns and clear to the end of the line.
    Erase(u16),
    Nothing,
}

fn edit_key(buf: &mut String, key: KeyEvent) -> Edit {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Edit::Done(Input::Interrupted),
        KeyCode::Char('d') if ctrl && buf.is_empty() => Edit::Done(Input::Closed),
        KeyCode::Char(_) if ctrl => Edit::Nothing,
        KeyCode::Enter => Edit::Done(Input::Line(std::mem::take(buf))),
        KeyCode::Backspace => match buf.pop().and_then(UnicodeWidthChar::width) {
            Some(cols) if cols > 0 => Edit::Erase(cols as u16),
            _ => Edit::Nothing,
        },
        KeyCode::Char(c) => {
            buf.push(c);
            Edit::Echo(c)
        }
        _ => Edit::Nothing,
    }
}
