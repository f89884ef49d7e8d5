//! Extraction of the loose `key: value` metadata notes carry in their first
//! lines. This is not YAML front matter, just lines like `tags: GradeSense`
//! anywhere in the first [METADATA_SCAN_LINES] lines of the file.

/// Metadata is only recognized this far into a note. Anything later is body.
pub const METADATA_SCAN_LINES: usize = 10;

#[derive(Debug, PartialEq, Eq)]
pub struct FrontMatter {
    pub project: Option<String>,
    pub duration: Option<String>,
    /// Original text with every recognized metadata line removed.
    pub body: String,
}

/// Scans the first lines of a note for `tags:` and `duration:` entries. The
/// first line of each kind wins, later duplicates are dropped along with it.
pub fn extract_front_matter(text: &str) -> FrontMatter {
    let mut project = None;
    let mut duration = None;
    let mut body_lines: Vec<&str> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if index < METADATA_SCAN_LINES {
            if let Some(value) = metadata_value(line, "tags:") {
                if project.is_none() {
                    project = Some(value.to_string());
                }
                continue;
            }
            if let Some(value) = metadata_value(line, "duration:") {
                if duration.is_none() {
                    duration = Some(value.to_string());
                }
                continue;
            }
        }
        body_lines.push(line);
    }

    FrontMatter {
        project,
        duration,
        body: body_lines.join("\n"),
    }
}

fn metadata_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let prefix = line.get(..key.len())?;
    if prefix.eq_ignore_ascii_case(key) {
        Some(line[key.len()..].trim())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{extract_front_matter, FrontMatter};

    #[test]
    fn test_extracts_both_keys() {
        let front = extract_front_matter("tags: GradeSense\nduration: 1h 15m\n# Heading\nBody.");
        assert_eq!(
            front,
            FrontMatter {
                project: Some("GradeSense".to_string()),
                duration: Some("1h 15m".to_string()),
                body: "# Heading\nBody.".to_string(),
            }
        );
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let front = extract_front_matter("TAGS: GradeSense\nDuration: 45m\nBody");
        assert_eq!(front.project.as_deref(), Some("GradeSense"));
        assert_eq!(front.duration.as_deref(), Some("45m"));
    }

    #[test]
    fn test_first_line_of_each_kind_wins() {
        let front = extract_front_matter("tags: First\ntags: Second\nduration: 1h\nduration: 2h\n");
        assert_eq!(front.project.as_deref(), Some("First"));
        assert_eq!(front.duration.as_deref(), Some("1h"));
        // Duplicates are still stripped out of the body.
        assert_eq!(front.body, "");
    }

    #[test]
    fn test_metadata_outside_scan_window_is_body() {
        let mut text = "line\n".repeat(10);
        text.push_str("tags: GradeSense");
        let front = extract_front_matter(&text);
        assert_eq!(front.project, None);
        assert!(front.body.ends_with("tags: GradeSense"));
    }

    #[test]
    fn test_body_line_order_preserved() {
        let front = extract_front_matter("one\ntags: X\ntwo\nduration: 1h\nthree");
        assert_eq!(front.body, "one\ntwo\nthree");
    }

    #[test]
    fn test_missing_metadata() {
        let front = extract_front_matter("# Just a heading\n\nSome text.");
        assert_eq!(front.project, None);
        assert_eq!(front.duration, None);
        assert_eq!(front.body, "# Just a heading\n\nSome text.");
    }
}
