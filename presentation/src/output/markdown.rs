//! Terminal rendering for briefing Markdown
//!
//! Parses with `pulldown_cmark` (GFM tables and strikethrough enabled) and
//! maps the event stream onto `colored` output: styled headings, bullet and
//! numbered lists, inline emphasis, code spans, links with their targets,
//! fenced code and box-drawn tables.

use colored::Colorize;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};

/// Render briefing Markdown for a terminal
pub fn render(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let mut renderer = Renderer::default();
    for event in Parser::new_ext(markdown, options) {
        renderer.event(event);
    }
    renderer.finish()
}

#[derive(Default)]
struct Table {
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    cell: String,
    head_rows: usize,
}

impl Table {
    fn end_cell(&mut self) {
        self.row.push(self.cell.trim().to_string());
        self.cell.clear();
    }

    fn end_row(&mut self) {
        if !self.row.is_empty() {
            self.rows.push(std::mem::take(&mut self.row));
        }
    }

    fn lines(&self) -> Vec<String> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let widths: Vec<usize> = (0..columns)
            .map(|c| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(c))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        for (i, row) in self.rows.iter().enumerate() {
            let cells: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(c, width)| {
                    let cell = row.get(c).map(String::as_str).unwrap_or("");
                    format!("{cell:<width$}")
                })
                .collect();
            let line = cells.join(" │ ").trim_end().to_string();

            if i < self.head_rows {
                lines.push(line.bold().to_string());
            } else {
                lines.push(line);
            }
            if i + 1 == self.head_rows {
                let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
                lines.push(rule.join("─┼─").dimmed().to_string());
            }
        }
        lines
    }
}

#[derive(Default)]
struct Renderer {
    lines: Vec<String>,
    line: String,
    heading: Option<HeadingLevel>,
    strong: usize,
    emphasis: usize,
    strikethrough: usize,
    links: Vec<String>,
    // one entry per open list; Some(n) is the next ordered number
    lists: Vec<Option<u64>>,
    code_block: Option<String>,
    table: Option<Table>,
}

impl Renderer {
    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                if let Some(table) = self.table.as_mut() {
                    table.cell.push_str(&code);
                } else if self.heading.is_some() {
                    self.line.push_str(&code);
                } else {
                    self.line.push_str(&code.yellow().to_string());
                }
            }
            Event::SoftBreak => self.text(" "),
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                self.lines.push("─".repeat(40).dimmed().to_string());
                self.blank();
            }
            Event::TaskListMarker(done) => self.text(if done { "[x] " } else { "[ ] " }),
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading(level, _, _) => {
                self.flush_line();
                self.heading = Some(level);
            }
            Tag::List(start) => {
                self.flush_line();
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush_line();
                let depth = self.lists.len().max(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{n}.");
                        *n += 1;
                        marker.green().to_string()
                    }
                    _ => "•".green().to_string(),
                };
                self.line = format!("{}{} ", "  ".repeat(depth), marker);
            }
            Tag::CodeBlock(_) => {
                self.flush_line();
                self.code_block = Some(String::new());
            }
            Tag::Table(_) => {
                self.flush_line();
                self.table = Some(Table::default());
            }
            Tag::Strong => self.strong += 1,
            Tag::Emphasis => self.emphasis += 1,
            Tag::Strikethrough => self.strikethrough += 1,
            Tag::Link(_, dest, _) => self.links.push(dest.to_string()),
            _ => {}
        }
    }

    fn end(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading(level, _, _) => {
                let title = std::mem::take(&mut self.line);
                let title = title.trim();
                self.heading = None;
                match level {
                    HeadingLevel::H1 => self.lines.push(title.bold().underline().to_string()),
                    HeadingLevel::H2 => {
                        let rule = "─".repeat(title.chars().count());
                        self.lines.push(title.cyan().bold().to_string());
                        self.lines.push(rule.cyan().to_string());
                    }
                    HeadingLevel::H3 => self.lines.push(title.yellow().bold().to_string()),
                    _ => self.lines.push(title.bold().to_string()),
                }
                self.blank();
            }
            Tag::Paragraph => {
                self.flush_line();
                if self.lists.is_empty() {
                    self.blank();
                }
            }
            Tag::Item => self.flush_line(),
            Tag::List(_) => {
                self.flush_line();
                self.lists.pop();
                if self.lists.is_empty() {
                    self.blank();
                }
            }
            Tag::CodeBlock(_) => {
                if let Some(code) = self.code_block.take() {
                    for line in code.lines() {
                        self.lines.push(format!("    {}", line.dimmed()));
                    }
                }
                self.blank();
            }
            Tag::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    table.end_row();
                    table.head_rows = table.rows.len();
                }
            }
            Tag::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    table.end_row();
                }
            }
            Tag::TableCell => {
                if let Some(table) = self.table.as_mut() {
                    table.end_cell();
                }
            }
            Tag::Table(_) => {
                if let Some(table) = self.table.take() {
                    self.lines.extend(table.lines());
                }
                self.blank();
            }
            Tag::Strong => self.strong = self.strong.saturating_sub(1),
            Tag::Emphasis => self.emphasis = self.emphasis.saturating_sub(1),
            Tag::Strikethrough => self.strikethrough = self.strikethrough.saturating_sub(1),
            Tag::Link(..) => {
                if let Some(dest) = self.links.pop().filter(|d| !d.is_empty()) {
                    if let Some(table) = self.table.as_mut() {
                        table.cell.push_str(&format!(" ({dest})"));
                    } else {
                        self.line.push_str(&format!(" ({})", dest.dimmed()));
                    }
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(code) = self.code_block.as_mut() {
            code.push_str(text);
            return;
        }
        if let Some(table) = self.table.as_mut() {
            table.cell.push_str(text);
            return;
        }
        if self.heading.is_some() {
            self.line.push_str(text);
            return;
        }

        let mut styled = text.normal();
        if self.strong > 0 {
            styled = styled.bold();
        }
        if self.emphasis > 0 {
            styled = styled.italic();
        }
        if self.strikethrough > 0 {
            styled = styled.strikethrough();
        }
        if !self.links.is_empty() {
            styled = styled.underline();
        }
        self.line.push_str(&styled.to_string());
    }

    fn flush_line(&mut self) {
        let line = std::mem::take(&mut self.line);
        if !line.trim().is_empty() {
            self.lines.push(line.trim_end().to_string());
        }
    }

    fn blank(&mut self) {
        if self.lines.last().is_some_and(|l| !l.is_empty()) {
            self.lines.push(String::new());
        }
    }

    fn finish(mut self) -> String {
        self.flush_line();
        while self.lines.last().is_some_and(|l| l.is_empty()) {
            self.lines.pop();
        }
        self.lines.join("\n")
    }
}
