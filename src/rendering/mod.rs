//! Text rendering of generations and the sinks frames are written to.

use crate::application::Generation;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Characters used for live and dead cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self { alive: 'O', dead: '.' }
    }
}

impl Glyphs {
    pub fn legend(&self) -> String {
        format!("\"{}\" - alive cell, \"{}\" - dead cell.", self.alive, self.dead)
    }
}

/// Format a generation as header, legend, blank line, then one line per row
pub fn render_frame(generation: &Generation, glyphs: &Glyphs) -> String {
    let grid = generation.grid();
    let (rows, cols) = grid.dimensions();
    let mut out = String::with_capacity(64 + rows * cols * 2);

    out.push_str(&format!("Generation {}\n", generation.number()));
    out.push_str(&glyphs.legend());
    out.push_str("\n\n");

    for row in grid.rows_iter() {
        for (col, cell) in row.iter().enumerate() {
            if col > 0 {
                out.push(' ');
            }
            out.push(if cell.is_alive() { glyphs.alive } else { glyphs.dead });
        }
        out.push('\n');
    }
    out
}

/// Destination for rendered frames
pub trait FrameSink {
    fn show(&mut self, frame: &str) -> io::Result<()>;
}

/// Clears the terminal and redraws each frame from the top-left corner
pub struct TerminalSink<W: Write> {
    out: W,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn show(&mut self, frame: &str) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        // Raw mode is never enabled, but keep \r so lines start at column 0 either way
        self.out.write_all(frame.replace('\n', "\r\n").as_bytes())?;
        self.out.flush()
    }
}

/// Keeps every frame in memory
#[derive(Default, Debug)]
pub struct MemorySink {
    pub frames: Vec<String>,
}

impl FrameSink for MemorySink {
    fn show(&mut self, frame: &str) -> io::Result<()> {
        self.frames.push(frame.to_owned());
        Ok(())
    }
}
