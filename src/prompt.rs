// File: src/prompt.rs
use crossterm::cursor::MoveToColumn;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::queue;
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use std::io::{self, BufRead, IsTerminal, Write};

/// In-memory history of submitted queries, browsed with Up/Down.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
    /// Position while browsing; `None` means editing a fresh line.
    cursor: Option<usize>,
    /// What was typed before browsing started.
    draft: String,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a submitted line. Blank lines and repeats of the last entry
    /// are not stored.
    pub fn push(&mut self, line: &str) {
        self.cursor = None;
        self.draft.clear();
        let line = line.trim();
        if line.is_empty() || self.entries.last().map(String::as_str) == Some(line) {
            return;
        }
        self.entries.push(line.to_string());
    }

    fn matches(&self, idx: usize) -> bool {
        self.entries[idx].starts_with(self.draft.as_str())
    }

    /// Steps back to the previous entry starting with the draft. `current`
    /// becomes the draft when browsing starts, so an empty line walks the
    /// whole history and a typed prefix only recalls matching queries.
    pub fn older(&mut self, current: &str) -> Option<&str> {
        let start = match self.cursor {
            Some(i) => i,
            None => {
                self.draft = current.to_string();
                self.entries.len()
            }
        };
        // Nothing older: stay on the current entry, if any.
        if let Some(idx) = (0..start).rev().find(|&i| self.matches(i)) {
            self.cursor = Some(idx);
        }
        self.cursor.map(|idx| self.entries[idx].as_str())
    }

    /// Steps forward to the next matching entry; past the newest one the
    /// draft comes back.
    pub fn newer(&mut self) -> Option<&str> {
        let i = self.cursor?;
        match (i + 1..self.entries.len()).find(|&j| self.matches(j)) {
            Some(idx) => {
                self.cursor = Some(idx);
                Some(&self.entries[idx])
            }
            None => {
                self.cursor = None;
                Some(&self.draft)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Line reader for the query loop.
///
/// On a terminal it reads keys in raw mode (Backspace, Up/Down history
/// search by typed prefix, Esc / Ctrl-U to clear). Otherwise it reads buffered lines from stdin.
/// `Ok(None)` ends the session: Ctrl-C, Ctrl-D on an empty line, or EOF.
pub struct Prompt {
    prompt: String,
    history: History,
    interactive: bool,
}

impl Prompt {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            history: History::new(),
            interactive: io::stdin().is_terminal() && io::stdout().is_terminal(),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let line = if self.interactive {
            self.read_raw()?
        } else {
            self.read_buffered()?
        };
        if let Some(line) = &line {
            self.history.push(line);
        }
        Ok(line)
    }

    fn read_buffered(&self) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", self.prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn read_raw(&mut self) -> io::Result<Option<String>> {
        let _raw = RawMode::enable()?;
        let mut stdout = io::stdout();
        let mut buffer = String::new();
        self.redraw(&mut stdout, &buffer)?;

        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            match key.code {
                KeyCode::Char('c') if ctrl => {
                    write!(stdout, "\r\n")?;
                    return Ok(None);
                }
                KeyCode::Char('d') if ctrl => {
                    if buffer.is_empty() {
                        write!(stdout, "\r\n")?;
                        return Ok(None);
                    }
                    continue;
                }
                KeyCode::Char('u') if ctrl => buffer.clear(),
                KeyCode::Char(c) if !ctrl => buffer.push(c),
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Esc => buffer.clear(),
                KeyCode::Up => {
                    if let Some(entry) = self.history.older(&buffer) {
                        buffer = entry.to_string();
                    }
                }
                KeyCode::Down => {
                    if let Some(entry) = self.history.newer() {
                        buffer = entry.to_string();
                    }
                }
                KeyCode::Enter => {
                    write!(stdout, "\r\n")?;
                    stdout.flush()?;
                    return Ok(Some(buffer));
                }
                _ => continue,
            }
            self.redraw(&mut stdout, &buffer)?;
        }
    }

    fn redraw(&self, stdout: &mut io::Stdout, buffer: &str) -> io::Result<()> {
        queue!(
            stdout,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            PrintStyledContent(self.prompt.as_str().bold()),
            Print(buffer)
        )?;
        stdout.flush()
    }
}
