//! Terminal rendering for Markdown output
//!
//! Rich mode styles Markdown with termimad and colors headers and status
//! lines; plain mode prints the Markdown untouched.

use std::io::{self, Write};

use anyhow::Result;
use campus_core::OperationStatus;
use termimad::{crossterm::style::Color, MadSkin};

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_fg(Color::Cyan);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        self.write_markdown(&mut out, markdown)?;
        out.flush()?;
        Ok(())
    }

    /// Render a success or failure line to stdout
    pub fn render_status(&self, status: &OperationStatus) -> Result<()> {
        let mut out = io::stdout().lock();
        self.write_status(&mut out, status)?;
        out.flush()?;
        Ok(())
    }

    fn write_markdown<W: Write>(&self, out: &mut W, markdown: &str) -> io::Result<()> {
        if !self.rich_enabled {
            return write!(out, "{markdown}");
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                // Keep the hashes visible so heading levels stay readable
                writeln!(out, "{BLUE}{line}{RESET}")?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }

    fn write_status<W: Write>(&self, out: &mut W, status: &OperationStatus) -> io::Result<()> {
        if !self.rich_enabled {
            return write!(out, "{status}");
        }

        let (color, mark) = if status.success {
            (GREEN, "✓")
        } else {
            (RED, "✗")
        };
        writeln!(out, "{color}{mark} {}{RESET}", status.message)
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markdown(renderer: &TerminalRenderer, text: &str) -> String {
        let mut out = Vec::new();
        renderer
            .write_markdown(&mut out, text)
            .expect("Failed to write");
        String::from_utf8(out).expect("Invalid UTF-8")
    }

    fn status(renderer: &TerminalRenderer, status: &OperationStatus) -> String {
        let mut out = Vec::new();
        renderer
            .write_status(&mut out, status)
            .expect("Failed to write");
        String::from_utf8(out).expect("Invalid UTF-8")
    }

    #[test]
    fn test_plain_markdown_is_untouched() {
        let renderer = TerminalRenderer::new(false);
        let text = "# Activities\n\n- **Status**: ○ Pending\n";
        assert_eq!(markdown(&renderer, text), text);
    }

    #[test]
    fn test_rich_headers_are_blue() {
        let renderer = TerminalRenderer::new(true);
        let output = markdown(&renderer, "## 📚 Calculus I (ID: 1)\n");
        assert_eq!(output, "\x1b[34m## 📚 Calculus I (ID: 1)\x1b[0m\n");
    }

    #[test]
    fn test_status_lines() {
        let plain = TerminalRenderer::new(false);
        let ok = OperationStatus::success("Saved".to_string());
        assert_eq!(status(&plain, &ok), "Success: Saved\n");

        let rich = TerminalRenderer::default();
        let failed = OperationStatus::failure("Not saved".to_string());
        assert_eq!(status(&rich, &failed), "\x1b[31m✗ Not saved\x1b[0m\n");
    }
}
