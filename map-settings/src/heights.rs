use crate::SettingsError;
use std::path::Path;

/// Parses height rows: one row per line, integers separated by commas or
/// whitespace. Blank lines and `#` comments are skipped. All rows must have
/// the length of the first one.
pub fn parse_height_rows(text: &str) -> Result<Vec<Vec<i32>>, SettingsError> {
    let mut rows: Vec<Vec<i32>> = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<i32>()
                    .map_err(|_| SettingsError::InvalidSample {
                        line: line_no,
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<i32>, SettingsError>>()?;
        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(SettingsError::RowLength {
                    line: line_no,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

pub fn load_height_rows(path: impl AsRef<Path>) -> Result<Vec<Vec<i32>>, SettingsError> {
    let text = std::fs::read_to_string(path)?;
    parse_height_rows(&text)
}
