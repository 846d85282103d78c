//! In-memory CSV generation and download responses

use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};

use crate::errors::SharedResult;

/// Write a header row followed by data rows into a CSV buffer
pub fn write_csv<R, I, F>(headers: &[&str], rows: R) -> SharedResult<Vec<u8>>
where
    R: IntoIterator<Item = I>,
    I: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    writer
        .into_inner()
        .map_err(|e| crate::SharedError::IoError(e.into_error()))
}

/// Keep only characters that are safe inside a Content-Disposition filename
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches(|c| c == '_' || c == '.').is_empty() {
        "export.csv".to_string()
    } else {
        cleaned
    }
}

/// A CSV file sent as a download
#[derive(Debug, Clone)]
pub struct CsvAttachment {
    pub filename: String,
    pub body: Vec<u8>,
}

impl CsvAttachment {
    pub fn new(filename: impl AsRef<str>, body: Vec<u8>) -> Self {
        Self {
            filename: sanitize_filename(filename.as_ref()),
            body,
        }
    }
}

impl IntoResponse for CsvAttachment {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename=\"{}\"", self.filename);
        let disposition = HeaderValue::from_str(&disposition)
            .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

        (
            [
                (header::CONTENT_TYPE, HeaderValue::from_static("text/csv; charset=utf-8")),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_csv_with_header() {
        let rows = vec![vec!["Ada".to_string(), "90".to_string()]];
        let bytes = write_csv(&["Name", "Score"], rows).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "Name,Score\nAda,90\n");
    }

    #[test]
    fn test_write_csv_quotes_commas() {
        let rows = vec![vec!["Lovelace, Ada", "1"]];
        let bytes = write_csv(&["Name", "N"], rows).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "Name,N\n\"Lovelace, Ada\",1\n");
    }

    #[test]
    fn test_write_csv_header_only() {
        let rows: Vec<Vec<String>> = Vec::new();
        let bytes = write_csv(&["A", "B"], rows).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "A,B\n");
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("ada_quiz_results.csv"), "ada_quiz_results.csv");
        assert_eq!(sanitize_filename("a b/c\"d.csv"), "a_b_c_d.csv");
        assert_eq!(sanitize_filename("///"), "export.csv");
    }

    #[test]
    fn test_attachment_headers() {
        let response = CsvAttachment::new("scores.csv", b"A\n".to_vec()).into_response();
        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_TYPE], "text/csv; charset=utf-8");
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"scores.csv\""
        );
    }
}
