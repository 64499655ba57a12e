//! Extraction of apiDocJS comment blocks from source text.

/// Marker that opens a documentation comment block.
pub const OPEN_MARKER: &str = "/**";
/// Marker that closes a documentation comment block.
pub const CLOSE_MARKER: &str = "*/";
/// Substring a block must contain to be treated as an API block.
pub const API_MARKER: &str = "@api ";

/// Normalize comment text for consistent comparison: trim every line, join
/// with newlines, trim the result.
pub fn normalize_comment(comment: &str) -> String {
    comment
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Iterator over normalized apiDocJS comment blocks in one file's text.
///
/// A block opens at a line containing `/**` while outside any block and
/// closes at the first later line containing `*/` (inclusive). Open markers
/// inside an open block are not balanced: the first close marker terminates
/// the block. A one-line `/** ... */` therefore stays open until a close
/// marker on a later line. This mirrors the historical extractor exactly so
/// that re-parsing an old `_apidoc.js` recovers the same blocks.
pub struct ApiComments<'a> {
    lines: std::str::Lines<'a>,
}

/// Lazily extract apiDocJS comments from a file's full text.
pub fn api_comments(source: &str) -> ApiComments<'_> {
    ApiComments {
        lines: source.lines(),
    }
}

impl Iterator for ApiComments<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut block: Option<Vec<&str>> = None;

        for line in self.lines.by_ref() {
            match block.take() {
                Some(mut lines) if line.contains(CLOSE_MARKER) => {
                    lines.push(line);
                    let text = lines.join("\n");
                    if text.contains(API_MARKER) {
                        return Some(normalize_comment(&text));
                    }
                }
                Some(mut lines) => {
                    lines.push(line);
                    block = Some(lines);
                }
                None if line.contains(OPEN_MARKER) => block = Some(vec![line]),
                None => {}
            }
        }
        None
    }
}
