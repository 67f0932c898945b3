//! # Table Rendering
//!
//! The collaborator that turns headers plus rows into a text table.
//!
//! ## Fancy Grid Layout
//! ```text
//! ╒════╤════════╤══════════╕   ◄── top
//! │ id │ name   │ quantity │   ◄── header
//! ╞════╪════════╪══════════╡   ◄── header separator
//! │  1 │ Tablet │       30 │
//! ├────┼────────┼──────────┤   ◄── row separator
//! │  2 │ TV     │       10 │
//! ╘════╧════════╧══════════╛   ◄── bottom
//! ```
//!
//! Numbers are right-aligned, text left-aligned. Widths are measured in
//! characters, so accented names line up.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ReportError, ReportResult};

// =============================================================================
// Columns
// =============================================================================

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A column header and how its cells are aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub align: Align,
}

impl Column {
    /// Left-aligned text column.
    pub const fn text(header: &'static str) -> Self {
        Column {
            header,
            align: Align::Left,
        }
    }

    /// Right-aligned numeric column.
    pub const fn numeric(header: &'static str) -> Self {
        Column {
            header,
            align: Align::Right,
        }
    }
}

// =============================================================================
// Renderer Trait
// =============================================================================

/// Renders rows under a set of columns to an output stream.
///
/// Every row must have exactly one cell per column.
pub trait TableRenderer {
    fn render(&self, out: &mut dyn Write, columns: &[Column], rows: &[Vec<String>]) -> ReportResult<()>;
}

// =============================================================================
// Table Style
// =============================================================================

/// Border style of [`GridRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStyle {
    /// Box-drawing characters.
    #[default]
    FancyGrid,
    /// Plain `+`, `-`, `=` and `|`.
    Ascii,
}

impl std::fmt::Display for TableStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableStyle::FancyGrid => write!(f, "fancy_grid"),
            TableStyle::Ascii => write!(f, "ascii"),
        }
    }
}

impl std::str::FromStr for TableStyle {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fancy_grid" | "fancy" | "grid" => Ok(TableStyle::FancyGrid),
            "ascii" | "plain" => Ok(TableStyle::Ascii),
            other => Err(ReportError::InvalidConfig(format!(
                "Unknown table style: '{}'. Valid options: fancy_grid, ascii",
                other
            ))),
        }
    }
}

/// One horizontal rule: left corner, fill, junction, right corner.
struct Rule {
    left: char,
    fill: char,
    mid: char,
    right: char,
}

struct Glyphs {
    top: Rule,
    header: Rule,
    row: Rule,
    bottom: Rule,
    vertical: char,
}

impl TableStyle {
    fn glyphs(&self) -> Glyphs {
        let rule = |left, fill, mid, right| Rule {
            left,
            fill,
            mid,
            right,
        };

        match self {
            TableStyle::FancyGrid => Glyphs {
                top: rule('╒', '═', '╤', '╕'),
                header: rule('╞', '═', '╪', '╡'),
                row: rule('├', '─', '┼', '┤'),
                bottom: rule('╘', '═', '╧', '╛'),
                vertical: '│',
            },
            TableStyle::Ascii => Glyphs {
                top: rule('+', '-', '+', '+'),
                header: rule('+', '=', '+', '+'),
                row: rule('+', '-', '+', '+'),
                bottom: rule('+', '-', '+', '+'),
                vertical: '|',
            },
        }
    }
}

// =============================================================================
// Grid Renderer
// =============================================================================

/// Bordered grid with a rule between every row.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridRenderer {
    style: TableStyle,
}

impl GridRenderer {
    pub fn new(style: TableStyle) -> Self {
        GridRenderer { style }
    }

    pub fn style(&self) -> TableStyle {
        self.style
    }
}

impl TableRenderer for GridRenderer {
    fn render(&self, out: &mut dyn Write, columns: &[Column], rows: &[Vec<String>]) -> ReportResult<()> {
        if let Some(bad) = rows.iter().find(|row| row.len() != columns.len()) {
            return Err(ReportError::RaggedRow {
                cells: bad.len(),
                columns: columns.len(),
            });
        }

        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                rows.iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(col.header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let glyphs = self.style.glyphs();
        let headers: Vec<&str> = columns.iter().map(|c| c.header).collect();

        write_rule(out, &glyphs.top, &widths)?;
        write_cells(out, glyphs.vertical, columns, &widths, &headers)?;
        write_rule(out, &glyphs.header, &widths)?;

        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                write_rule(out, &glyphs.row, &widths)?;
            }
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            write_cells(out, glyphs.vertical, columns, &widths, &cells)?;
        }

        write_rule(out, &glyphs.bottom, &widths)?;
        Ok(())
    }
}

fn write_rule(out: &mut dyn Write, rule: &Rule, widths: &[usize]) -> ReportResult<()> {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| rule.fill.to_string().repeat(w + 2))
        .collect();

    writeln!(
        out,
        "{}{}{}",
        rule.left,
        segments.join(rule.mid.to_string().as_str()),
        rule.right
    )?;
    Ok(())
}

fn write_cells(
    out: &mut dyn Write,
    vertical: char,
    columns: &[Column],
    widths: &[usize],
    cells: &[&str],
) -> ReportResult<()> {
    let mut line = String::new();
    line.push(vertical);

    for ((col, width), cell) in columns.iter().zip(widths).zip(cells) {
        let padded = match col.align {
            Align::Left => format!(" {:<width$} ", cell, width = *width),
            Align::Right => format!(" {:>width$} ", cell, width = *width),
        };
        line.push_str(&padded);
        line.push(vertical);
    }

    writeln!(out, "{}", line)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render_to_string(renderer: &GridRenderer, columns: &[Column], rows: &[Vec<String>]) -> String {
        let mut buf = Vec::new();
        renderer.render(&mut buf, columns, rows).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_fancy_grid_layout() {
        let columns = [Column::numeric("id"), Column::text("name")];
        let rows = vec![row(&["1", "Tablet"]), row(&["2", "TV"])];

        let output = render_to_string(&GridRenderer::new(TableStyle::FancyGrid), &columns, &rows);

        let expected = "\
╒════╤════════╕
│ id │ name   │
╞════╪════════╡
│  1 │ Tablet │
├────┼────────┤
│  2 │ TV     │
╘════╧════════╛
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_ascii_layout() {
        let columns = [Column::text("name"), Column::numeric("qty")];
        let rows = vec![row(&["Fone de Ouvido", "25"])];

        let output = render_to_string(&GridRenderer::new(TableStyle::Ascii), &columns, &rows);

        let expected = "\
+----------------+-----+
| name           | qty |
+================+=====+
| Fone de Ouvido |  25 |
+----------------+-----+
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_widths_count_characters_not_bytes() {
        let columns = [Column::text("name")];
        let rows = vec![row(&["Eletrônicos"]), row(&["TV"])];

        let output = render_to_string(&GridRenderer::default(), &columns, &rows);
        let line_lengths: Vec<usize> = output.lines().map(|l| l.chars().count()).collect();

        assert!(line_lengths.iter().all(|&len| len == line_lengths[0]));
    }

    #[test]
    fn test_headers_only_when_no_rows() {
        let columns = [Column::numeric("id")];
        let output = render_to_string(&GridRenderer::new(TableStyle::Ascii), &columns, &[]);
        assert_eq!(output, "+----+\n| id |\n+====+\n+----+\n");
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let columns = [Column::numeric("id"), Column::text("name")];
        let mut buf = Vec::new();
        let result = GridRenderer::default().render(&mut buf, &columns, &[row(&["1"])]);
        assert!(matches!(
            result,
            Err(ReportError::RaggedRow { cells: 1, columns: 2 })
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!("fancy_grid".parse::<TableStyle>().unwrap(), TableStyle::FancyGrid);
        assert_eq!("ASCII".parse::<TableStyle>().unwrap(), TableStyle::Ascii);
        assert!("html".parse::<TableStyle>().is_err());
        assert_eq!(TableStyle::default().to_string(), "fancy_grid");
    }
}
