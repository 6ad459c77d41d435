//! Preview readers for horse.
//!
//! Produces the lines shown in the preview pane for the highlighted entry.
//! Every file or directory handle is opened and dropped inside a single call.

use crate::core::browse_dir;

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read, Seek};
use std::path::Path;
use unicode_width::UnicodeWidthChar;

/// Hard cap on lines read from a file regardless of pane height.
pub(crate) const MAX_PREVIEW_LINES: usize = 1000;
/// Bytes inspected for NUL to detect binary files.
const BINARY_PEEK_BYTES: usize = 1024;

/// A single preview line, tagged so the renderer can style directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewLine {
    Text(String),
    Dir(String),
    Notice(&'static str),
}

/// Reads up to `max_lines` preview lines for `path`.
///
/// Directories list their entries, regular files up to `max_bytes` show their text.
pub(crate) fn read_preview(path: &Path, max_lines: usize, max_bytes: u64) -> Vec<PreviewLine> {
    let max_lines = max_lines.min(MAX_PREVIEW_LINES);

    let Ok(meta) = std::fs::metadata(path) else {
        return vec![PreviewLine::Notice("[Access denied]")];
    };

    if meta.is_dir() {
        return preview_directory(path, max_lines);
    }

    if !meta.is_file() {
        return vec![PreviewLine::Notice("[Not a regular file]")];
    }

    if meta.len() > max_bytes {
        return vec![PreviewLine::Notice("[File too large for preview]")];
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return vec![PreviewLine::Notice("[Permission denied]")];
        }
        Err(_) => return vec![PreviewLine::Notice("[Unreadable file]")],
    };

    read_text(file, max_lines, max_bytes)
}

/// Binary sniff and line reading over an open file.
fn read_text<R: Read + Seek>(mut reader: R, max_lines: usize, max_bytes: u64) -> Vec<PreviewLine> {
    let mut head = [0u8; BINARY_PEEK_BYTES];
    let n = match reader.read(&mut head) {
        Ok(n) => n,
        Err(_) => return vec![PreviewLine::Notice("[Unreadable file]")],
    };
    if head[..n].contains(&0) {
        return vec![PreviewLine::Notice("[Binary file]")];
    }
    if reader.rewind().is_err() {
        return vec![PreviewLine::Notice("[Unreadable file]")];
    }

    let lines: Vec<PreviewLine> = BufReader::new(reader.take(max_bytes))
        .lines()
        .take(max_lines)
        .map_while(|line| line.ok())
        .map(|line| PreviewLine::Text(sanitize_line(&line)))
        .collect();

    if lines.is_empty() {
        return vec![PreviewLine::Notice("[Empty file]")];
    }
    lines
}

/// Lists a directory's entries for the preview pane.
pub(crate) fn preview_directory(path: &Path, max_lines: usize) -> Vec<PreviewLine> {
    match browse_dir(path) {
        Ok(entries) if entries.is_empty() => vec![PreviewLine::Notice("*nothing here*")],
        Ok(entries) => entries
            .iter()
            .take(max_lines)
            .map(|e| {
                if e.is_dir() {
                    PreviewLine::Dir(e.display_name().into_owned())
                } else {
                    PreviewLine::Text(e.name_str().to_string())
                }
            })
            .collect(),
        Err(_) => vec![PreviewLine::Notice("[Access denied]")],
    }
}

/// Expands tabs and strips control characters so a line can be drawn as-is.
fn sanitize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut width = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = 4 - (width % 4);
            out.push_str(&" ".repeat(pad));
            width += pad;
            continue;
        }
        if ch.is_control() {
            continue;
        }
        width += ch.width().unwrap_or(0);
        out.push(ch);
    }
    out
}
