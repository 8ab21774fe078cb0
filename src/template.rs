//! The HTML skeleton and row rendering.
//!
//! All markup lives here; the traversal and formatting code only ever
//! deal in [`Entry`] fields.

use crate::format;
use crate::model::{Entry, EntryKind};
use chrono::{DateTime, Local};

/// Document head with the fixed styling, plus the table open and its
/// header row.
pub fn header() -> &'static str {
    r#"<html>
<head>
    <title>Index of Files</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 0;
            background-color: #f4f4f4;
            color: #333;
            text-align: center;
        }
        h1 {
            color: #444;
        }
        table {
            margin: 20px auto;
            border-collapse: collapse;
            width: 80%;
        }
        th, td {
            padding: 8px 15px;
            border: 1px solid #ddd;
        }
        th {
            background-color: #f0f0f0;
            color: #333;
        }
        tr:nth-child(even) {
            background-color: #f2f2f2;
        }
        a {
            color: #0275d8;
            text-decoration: none;
        }
        a:hover {
            text-decoration: underline;
        }
    </style>
</head>
<body>
    <h1>Files</h1>
    <table>
        <tr>
            <th>Name</th>
            <th>Size</th>
            <th>Last Modified</th>
        </tr>
"#
}

/// One table row for a listed entry. Directories carry no meaningful
/// size, so their size cell is the literal `N/A`.
pub fn row(entry: &Entry) -> String {
    let size = match entry.kind() {
        EntryKind::File { size } => format::human_size(*size),
        EntryKind::Directory => "N/A".to_string(),
    };

    format!(
        "        <tr><td><a href='{link}'>{link}</a></td><td>{size}</td><td>{modified}</td></tr>\n",
        link = entry.link(),
        modified = format::modified_time(entry.modified()),
    )
}

/// Table close and closing tags, stamped with the generation time.
pub fn footer(now: DateTime<Local>) -> String {
    format!(
        "    </table>\n    <footer>Generated at {}</footer>\n</body>\n</html>\n",
        format::generated_at(now)
    )
}
