//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render a diagnostic line on the error stream.
    fn diagnostic(&mut self, msg: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render generated code verbatim.
    fn code(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn diagnostic(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn code(&mut self, text: &str) {
        print!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects rendered lines, for tests.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub stdout: String,
    pub stderr: String,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn section(&mut self, name: &str) {
        self.stdout.push_str(&format!("{}:\n", name));
    }

    fn list_item(&mut self, text: &str) {
        self.stdout.push_str(&format!("  - {}\n", text));
    }

    fn diagnostic(&mut self, msg: &str) {
        self.stderr.push_str(&format!("{}\n", msg));
    }

    fn preformatted(&mut self, text: &str) {
        self.stdout.push_str(&format!("{}\n", text));
    }

    fn code(&mut self, text: &str) {
        self.stdout.push_str(text);
    }

    fn newline(&mut self) {
        self.stdout.push('\n');
    }
}
