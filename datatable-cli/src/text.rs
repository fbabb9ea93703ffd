//! Terminal renderers for table descriptors.

use std::io::Write;

use datatable_lib::query::Direction;
use datatable_lib::query::PageToken;
use datatable_lib::view::Footer;
use datatable_lib::view::RenderDescriptor;
use datatable_lib::view::Renderer;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

const COLUMN_SEPARATOR: &str = " │ ";

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = s.to_string();
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(display_width(s))));
    out
}

fn sort_indicator(direction: Option<Direction>) -> &'static str {
    match direction {
        Some(Direction::Asc) => " ▲",
        Some(Direction::Desc) => " ▼",
        None => "",
    }
}

/// Draws descriptors as a plain-text table.
///
/// Every frame is a full redraw; the same descriptor always produces the
/// same text.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
    /// Widest a single cell may get before it is truncated.
    max_cell_width: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, max_cell_width: usize) -> Self {
        Self {
            out,
            max_cell_width: max_cell_width.max(1),
        }
    }

    /// Formats one frame.
    pub fn draw(&self, view: &RenderDescriptor) -> String {
        let mut lines = Vec::new();

        if let Some(search) = &view.search {
            lines.push(format!("Search: {}", search.term).trim_end().to_string());
        }

        let headers: Vec<String> = view
            .header
            .iter()
            .map(|cell| {
                let label = truncate_to_width(&cell.label, self.max_cell_width);
                format!("{}{}", label, sort_indicator(cell.sort))
            })
            .collect();
        let rows: Vec<Vec<String>> = view
            .body
            .iter()
            .map(|row| {
                row.cells
                    .iter()
                    .map(|cell| truncate_to_width(cell.content(), self.max_cell_width))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                rows.iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| display_width(cell))
                    .chain(std::iter::once(display_width(header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let join = |cells: &[String]| -> String {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| pad_to_width(cell, *width))
                .collect();
            padded.join(COLUMN_SEPARATOR).trim_end().to_string()
        };

        lines.push(join(&headers));
        lines.push(
            widths
                .iter()
                .map(|w| "─".repeat(*w))
                .collect::<Vec<_>>()
                .join("─┼─"),
        );

        if rows.is_empty() {
            lines.push("(no matching entries)".to_string());
        }
        for row in &rows {
            lines.push(join(row));
        }

        lines.push(view.footer.caption());
        if let Footer::Summary {
            page_window,
            current_page,
            ..
        } = &view.footer
            && !page_window.is_empty()
        {
            let tokens: Vec<String> = page_window
                .iter()
                .map(|token| match token {
                    PageToken::Page(n) if n == current_page => format!("[{}]", n),
                    PageToken::Page(n) => n.to_string(),
                    PageToken::Ellipsis => "…".to_string(),
                })
                .collect();
            lines.push(tokens.join(" "));
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &RenderDescriptor) {
        let frame = self.draw(view);
        if let Err(e) = writeln!(self.out, "{}", frame).and_then(|_| self.out.flush()) {
            log::error!("[text] failed to write frame: {}", e);
        }
    }
}

/// Emits each descriptor as one line of JSON.
#[derive(Debug)]
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, view: &RenderDescriptor) {
        let result = serde_json::to_writer(&mut self.out, view)
            .map_err(std::io::Error::from)
            .and_then(|_| writeln!(self.out))
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            log::error!("[json] failed to write frame: {}", e);
        }
    }
}

/// The output selected on the command line.
#[derive(Debug)]
pub enum Surface<W: Write> {
    Text(TextRenderer<W>),
    Json(JsonRenderer<W>),
}

impl<W: Write> Surface<W> {
    /// Whether this surface is meant for a person at a terminal.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Surface::Text(_))
    }
}

impl<W: Write> Renderer for Surface<W> {
    fn render(&mut self, view: &RenderDescriptor) {
        match self {
            Surface::Text(r) => r.render(view),
            Surface::Json(r) => r.render(view),
        }
    }
}
