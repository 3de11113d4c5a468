/// Bulk actions over the selected row subset.
///
/// Export, print and share operate on the materialized selected rows
/// plus the column model, independent of engine state. The host
/// environment (file save dialog, print surface, native share,
/// clipboard) is abstracted behind the `Host` trait so the dispatcher is
/// testable with a recording fake and the fallback paths are explicit.
///
/// Environment trouble never propagates as an error: a blocked print
/// surface or a denied clipboard write degrades to an `Outcome` and a
/// user-visible notice, leaving the grid interactive.

use crate::column::ColumnSet;
use crate::error::GridError;
use crate::value::CellValue;
use log::warn;
use serde_json::Value as JsonValue;

/// Fixed filename for the CSV export artifact.
pub const EXPORT_FILENAME: &str = "exported_rows.csv";

/// Host environment capabilities the dispatcher relies on.
pub trait Host {
    /// Offer a file download to the user.
    fn save_file(&mut self, name: &str, contents: &str) -> Result<(), GridError>;

    /// Open a new viewing surface with the given document and invoke
    /// the environment's print mechanism.
    fn open_print_surface(&mut self, document: &str) -> Result<(), GridError>;

    /// Hand a payload to the native share capability.
    fn share(&mut self, payload: &str) -> Result<(), GridError>;

    /// Copy a payload to the clipboard.
    fn copy_to_clipboard(&mut self, payload: &str) -> Result<(), GridError>;

    /// Show a non-fatal notice to the user.
    fn notify(&mut self, message: &str);
}

/// What a bulk action dispatch actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The action ran through its primary path.
    Completed,
    /// Nothing was selected; the user was notified and no artifact was
    /// produced.
    NothingSelected,
    /// Native share was unavailable; the payload went to the clipboard
    /// instead.
    SharedViaClipboard,
    /// The environment refused every path; the user was notified.
    Unavailable,
}

/// Serialize rows to the delimited export format.
///
/// Header row carries the column header labels (falling back to ids),
/// data rows carry the rendered accessor values. String-typed values are
/// quoted, as is any rendered field containing a delimiter, quote or
/// newline; embedded quotes are doubled.
pub fn export_csv<T>(rows: &[&T], columns: &ColumnSet<T>) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);

    let header: Vec<String> = columns
        .data_columns()
        .map(|c| csv_field(&CellValue::from(c.header_label()), true))
        .collect();
    lines.push(header.join(","));

    for row in rows {
        let fields: Vec<String> = columns
            .data_columns()
            .map(|c| {
                let value = c.value(row);
                let quote = matches!(value, CellValue::String(_));
                csv_field(&value, quote)
            })
            .collect();
        lines.push(fields.join(","));
    }

    lines.join("\n")
}

fn csv_field(value: &CellValue, quote: bool) -> String {
    let rendered = value.render();
    if quote || rendered.contains(',') || rendered.contains('"') || rendered.contains('\n') {
        format!("\"{}\"", rendered.replace('"', "\"\""))
    } else {
        rendered
    }
}

/// Render rows as a minimal print-ready HTML document.
pub fn print_document<T>(rows: &[&T], columns: &ColumnSet<T>) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head><title>Print</title></head>\n<body>\n<table border=\"1\">\n<thead><tr>",
    );
    for column in columns.data_columns() {
        html.push_str(&format!("<th>{}</th>", html_escape(column.header_label())));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in rows {
        html.push_str("<tr>");
        for column in columns.data_columns() {
            html.push_str(&format!("<td>{}</td>", html_escape(&column.value(row).render())));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Serialize rows to the JSON share payload: an array of objects keyed
/// by column id.
pub fn share_payload<T>(rows: &[&T], columns: &ColumnSet<T>) -> JsonValue {
    let objects: Vec<JsonValue> = rows
        .iter()
        .map(|row| {
            let mut object = serde_json::Map::new();
            for column in columns.data_columns() {
                object.insert(column.id().to_string(), column.value(row).to_json());
            }
            JsonValue::Object(object)
        })
        .collect();
    JsonValue::Array(objects)
}

/// Export the selected rows as a downloadable CSV artifact.
pub fn export<T>(
    rows: &[&T],
    columns: &ColumnSet<T>,
    host: &mut dyn Host,
) -> Result<Outcome, GridError> {
    if rows.is_empty() {
        host.notify("No rows selected");
        return Ok(Outcome::NothingSelected);
    }

    let csv = export_csv(rows, columns);
    match host.save_file(EXPORT_FILENAME, &csv) {
        Ok(()) => Ok(Outcome::Completed),
        Err(err) => {
            warn!("export failed: {}", err);
            host.notify("Export failed");
            Ok(Outcome::Unavailable)
        }
    }
}

/// Render the selected rows into a print surface.
pub fn print<T>(
    rows: &[&T],
    columns: &ColumnSet<T>,
    host: &mut dyn Host,
) -> Result<Outcome, GridError> {
    if rows.is_empty() {
        host.notify("No rows selected");
        return Ok(Outcome::NothingSelected);
    }

    let document = print_document(rows, columns);
    match host.open_print_surface(&document) {
        Ok(()) => Ok(Outcome::Completed),
        Err(err) => {
            // Popup blockers land here; abort with a notice, never throw
            warn!("print surface unavailable: {}", err);
            host.notify("Unable to open print view");
            Ok(Outcome::Unavailable)
        }
    }
}

/// Share the selected rows as JSON, falling back to the clipboard when
/// native share is unavailable.
pub fn share<T>(
    rows: &[&T],
    columns: &ColumnSet<T>,
    host: &mut dyn Host,
) -> Result<Outcome, GridError> {
    if rows.is_empty() {
        host.notify("No rows selected");
        return Ok(Outcome::NothingSelected);
    }

    let payload = share_payload(rows, columns).to_string();
    match host.share(&payload) {
        Ok(()) => Ok(Outcome::Completed),
        Err(share_err) => {
            warn!("native share unavailable: {}", share_err);
            match host.copy_to_clipboard(&payload) {
                Ok(()) => {
                    host.notify("Copied to clipboard");
                    Ok(Outcome::SharedViaClipboard)
                }
                Err(clip_err) => {
                    warn!("clipboard write failed: {}", clip_err);
                    host.notify("Sharing is not available");
                    Ok(Outcome::Unavailable)
                }
            }
        }
    }
}
