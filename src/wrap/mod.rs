//! Fixed-width line wrapping of rendered tokens into C string literals.

use std::io::{self, Write};

use genversion_config::Layout;

/// Terminates a string element: escaped newline, closing quote, comma.
const LINE_END: &str = "\\n\",\n";
const LINE_START: &str = "  \"";

/// Label column width and wrap column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBudget {
    pub left_margin: usize,
    pub right_margin: usize,
}

impl LineBudget {
    pub fn new(left_margin: usize, right_margin: usize) -> Self {
        Self {
            left_margin,
            right_margin,
        }
    }

    /// Columns available for tokens.
    pub fn width(&self) -> usize {
        self.right_margin.saturating_sub(self.left_margin)
    }
}

impl Default for LineBudget {
    fn default() -> Self {
        Layout::default().into()
    }
}

impl From<Layout> for LineBudget {
    fn from(layout: Layout) -> Self {
        Self::new(layout.left_margin, layout.right_margin)
    }
}

/// Accumulates rendered tokens into output lines.
///
/// `linelen` counts the bytes appended since the current line started,
/// separating spaces included.
pub struct LineWrapper<W: Write> {
    out: W,
    budget: LineBudget,
    linelen: usize,
}

impl<W: Write> LineWrapper<W> {
    pub fn new(out: W, budget: LineBudget) -> Self {
        Self {
            out,
            budget,
            linelen: 0,
        }
    }

    /// Opens a string element with `label` in the label column.
    pub fn start_line(&mut self, label: &str) -> io::Result<()> {
        let width = self.budget.left_margin;
        let label = clip(label, width);
        write!(self.out, "{LINE_START}{label:<width$}")?;
        self.linelen = 0;
        Ok(())
    }

    /// Appends one rendered token preceded by a space, wrapping first when
    /// the current line already holds content and the token would not fit.
    /// A token wider than the budget on an empty line is written whole.
    pub fn append(&mut self, rendered: &str) -> io::Result<()> {
        let len = rendered.len() + 1;
        if self.linelen > 0 && self.linelen + len >= self.budget.width() {
            self.end_line()?;
            self.start_line("")?;
        }
        write!(self.out, " {rendered}")?;
        self.linelen += len;
        Ok(())
    }

    pub fn end_line(&mut self) -> io::Result<()> {
        self.out.write_all(LINE_END.as_bytes())
    }

    pub fn linelen(&self) -> usize {
        self.linelen
    }

    /// Gives mutable access to the sink for the array's surrounding text.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Cuts `label` to at most `width` chars on a char boundary.
fn clip(label: &str, width: usize) -> &str {
    match label.char_indices().nth(width) {
        Some((idx, _)) => &label[..idx],
        None => label,
    }
}
