//! Console playback over a finished polygon sequence.
//!
//! The cursor owns an index into the sequence and nothing else; the sequence
//! itself is never touched. Each tick shows the polygon at the index and
//! advances. Past the end, ticks do nothing.

use anyhow::{bail, Result};
use gridpoly::prelude::*;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    running: bool,
}

/// What one tick shows.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    /// 1-based position of `polygon` in the sequence.
    pub position: usize,
    pub total: usize,
    pub polygon: &'a Polygon,
}

impl Frame<'_> {
    pub fn progress_percent(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.position * 100 / self.total
    }
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Back to the first polygon; the running state is kept.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn tick<'a>(&mut self, seq: &'a PolygonSequence) -> Option<Frame<'a>> {
        if !self.running {
            return None;
        }
        let polygon = seq.get(self.index)?;
        self.index += 1;
        Some(Frame {
            position: self.index,
            total: seq.len(),
            polygon,
        })
    }

    pub fn finished(&self, seq: &PolygonSequence) -> bool {
        self.index >= seq.len()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PlayCfg {
    pub fps: f64,
    /// Stop after this many frames.
    pub limit: Option<usize>,
    /// Start over at the end instead of stopping.
    pub repeat: bool,
}

impl Default for PlayCfg {
    fn default() -> Self {
        Self {
            fps: 20.0,
            limit: None,
            repeat: false,
        }
    }
}

pub fn render(frame: &Frame<'_>) -> String {
    format!(
        "{}/{}  {}%\nPolygon: {}\nArea: {}",
        frame.position,
        frame.total,
        frame.progress_percent(),
        frame.polygon,
        frame.polygon.area()
    )
}

/// Play `seq` to stdout at `cfg.fps`. Returns the number of frames shown.
pub fn play(seq: &PolygonSequence, cfg: PlayCfg) -> Result<usize> {
    if !(cfg.fps.is_finite() && cfg.fps > 0.0) {
        bail!("fps must be a positive number, got {}", cfg.fps);
    }
    let pause = Duration::from_secs_f64(1.0 / cfg.fps);
    let mut cursor = Cursor::new();
    cursor.start();
    let mut shown = 0usize;
    while cfg.limit.map_or(true, |l| shown < l) {
        match cursor.tick(seq) {
            Some(frame) => {
                println!("{}", render(&frame));
                shown += 1;
                std::thread::sleep(pause);
            }
            None if cfg.repeat && !seq.is_empty() => {
                tracing::debug!(shown, "sequence finished; starting over");
                cursor.reset();
            }
            None => {
                cursor.stop();
                break;
            }
        }
    }
    tracing::info!(shown, total = seq.len(), "playback finished");
    Ok(shown)
}
