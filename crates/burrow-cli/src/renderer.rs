//! Terminal rendering of the markdown views.

use std::io::{self, Write};

use termimad::{crossterm::style::Color, MadSkin};

/// Prints markdown either through a cave-coloured termimad skin or as plain
/// text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::AnsiValue(179));
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkYellow);
        skin.strikeout.set_fg(Color::DarkGrey);
        skin.inline_code.set_fg(Color::Green);
        skin.inline_code.set_bg(Color::AnsiValue(236));
        skin.code_block.set_bg(Color::AnsiValue(236));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    pub fn render(&self, markdown: &str) {
        if self.rich_enabled {
            // Headers keep their hash marks.
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[38;5;179m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
    }

    /// Overwrite the current terminal line, used for animation frames.
    pub fn render_frame(&self, frame: &str) {
        if self.rich_enabled {
            print!("\r\x1b[2K{frame}");
            let _ = io::stdout().flush();
        } else {
            println!("{frame}");
        }
    }

    /// End a run of frames.
    pub fn finish_frames(&self) {
        if self.rich_enabled {
            println!();
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
