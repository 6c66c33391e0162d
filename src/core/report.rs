use crate::domain::model::Statistics;

pub const HEADERS: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Renders statistics as an ASCII table with `title` set into the top border.
pub fn render(statistics: &Statistics, title: &str) -> String {
    let mut rows: Vec<[String; 4]> = Vec::with_capacity(statistics.len() + 1);
    rows.push(HEADERS.map(str::to_string));
    for (language, summary) in statistics.iter() {
        rows.push([
            language.to_string(),
            summary.found.to_string(),
            summary.processed.to_string(),
            summary.average_salary.to_string(),
        ]);
    }

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = border(&widths);
    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(titled_border(&separator, title));
    for (index, row) in rows.iter().enumerate() {
        lines.push(format_row(row, &widths));
        if index == 0 {
            lines.push(separator.clone());
        }
    }
    lines.push(separator);

    lines.join("\n")
}

fn border(widths: &[usize; 4]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

// The title replaces dashes right after the leading corner when it fits.
fn titled_border(separator: &str, title: &str) -> String {
    let title_len = title.chars().count();
    if title.is_empty() || title_len + 2 > separator.chars().count() {
        return separator.to_string();
    }
    let rest: String = separator.chars().skip(title_len + 1).collect();
    format!("+{}{}", title, rest)
}

fn format_row(row: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::from("|");
    for (cell, width) in row.iter().zip(widths) {
        let padding = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(padding + 1));
        line.push('|');
    }
    line
}
