//! Terminal session: input registration and frame presentation.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    self, BeginSynchronizedUpdate, EndSynchronizedUpdate, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use crate::canvas::Canvas;
use crate::graphics::Rgb;

/// Columns and rows of the terminal, falling back to 80x24
pub fn probe_size() -> (u16, u16) {
    termsize::get()
        .map(|size| (size.cols, size.rows))
        .or_else(|| terminal::size().ok())
        .filter(|&(cols, rows)| cols > 0 && rows > 0)
        .unwrap_or((80, 24))
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb[0],
        g: rgb[1],
        b: rgb[2],
    }
}

/// Holds the terminal in raw mode with mouse capture on the alternate
/// screen; everything is restored when the guard drops
pub struct TerminalGuard {
    out: Stdout,
    key_releases: bool,
}

impl TerminalGuard {
    pub fn attach() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // From here on, an early return drops the guard and restores the terminal
        let mut guard = TerminalGuard {
            out: io::stdout(),
            key_releases: false,
        };
        execute!(
            guard.out,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange,
            Hide
        )?;

        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                guard.out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            guard.key_releases = true;
        }
        log::info!(
            "terminal attached, key release events {}",
            if guard.key_releases { "enabled" } else { "unavailable" }
        );
        Ok(guard)
    }

    /// Whether the terminal reports key-up events
    pub fn key_releases(&self) -> bool {
        self.key_releases
    }

    /// Writes the whole canvas in one synchronized update
    pub fn present(&mut self, canvas: &Canvas) -> io::Result<()> {
        queue!(self.out, BeginSynchronizedUpdate)?;
        let mut run = String::new();
        for row in 0..canvas.rows {
            queue!(self.out, MoveTo(0, row as u16))?;
            let mut current: Option<(Rgb, Rgb, bool)> = None;
            for cell in canvas.row(row) {
                let style = (cell.fg, cell.bg, cell.bold);
                if current != Some(style) {
                    if !run.is_empty() {
                        queue!(self.out, Print(&run))?;
                        run.clear();
                    }
                    let weight = if cell.bold {
                        Attribute::Bold
                    } else {
                        Attribute::NormalIntensity
                    };
                    queue!(
                        self.out,
                        SetAttribute(weight),
                        SetForegroundColor(color(cell.fg)),
                        SetBackgroundColor(color(cell.bg))
                    )?;
                    current = Some(style);
                }
                run.push(cell.ch);
            }
            if !run.is_empty() {
                queue!(self.out, Print(&run))?;
                run.clear();
            }
        }
        queue!(self.out, ResetColor, EndSynchronizedUpdate)?;
        self.out.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.key_releases {
            if let Err(e) = execute!(self.out, PopKeyboardEnhancementFlags) {
                log::warn!("failed to pop keyboard flags: {e}");
            }
        }
        if let Err(e) = execute!(
            self.out,
            ResetColor,
            Show,
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        ) {
            log::warn!("failed to restore screen: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("failed to leave raw mode: {e}");
        }
        log::info!("terminal detached");
    }
}
