//! Documentation comments (`/** ... */`).
//!
//! The comment body is stripped of its left border (leading whitespace and an
//! optional `*` column), then split into a description and `@param` /
//! `@return` directives. The description's first sentence is the brief.

/// Documentation for one parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamDoc {
    pub name: String,
    pub text: String,
}

/// A parsed documentation comment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocComment {
    /// Full description without directives.
    pub description: String,
    /// First sentence of the description.
    pub brief: String,
    /// Description minus the brief.
    pub long: String,
    pub params: Vec<ParamDoc>,
    pub retval: Option<String>,
}

impl DocComment {
    /// Parse the raw text of a `/** ... */` comment.
    ///
    /// Never fails: directives without a name are dropped, and text that
    /// precedes any directive is the description.
    pub fn parse(raw: &str) -> DocComment {
        let body = strip_border(raw);

        let (description, directives) = match find_directive(&body) {
            Some(at) => (body[..at].trim(), &body[at..]),
            None => (body.trim(), ""),
        };

        let brief = brief_of(description);
        let long = description[brief.len()..].trim().to_owned();

        let mut doc = DocComment {
            description: description.to_owned(),
            brief: brief.trim().to_owned(),
            long,
            params: Vec::new(),
            retval: None,
        };

        for directive in split_directives(directives) {
            if let Some(rest) = directive.strip_prefix("@param") {
                let rest = rest.trim_start();
                let name_end = rest
                    .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                    .unwrap_or(rest.len());
                if name_end == 0 {
                    continue;
                }
                doc.params.push(ParamDoc {
                    name: rest[..name_end].to_owned(),
                    text: collapse(&rest[name_end..]),
                });
            } else if let Some(rest) = directive.strip_prefix("@return") {
                doc.retval = Some(collapse(rest));
            }
        }

        doc
    }

    /// Documentation for a named parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.text.as_str())
    }
}

/// Remove the comment delimiters and the `*` border of each line.
fn strip_border(raw: &str) -> String {
    let inner = raw.trim();
    let inner = inner.strip_prefix("/**").unwrap_or(inner);
    let inner = inner.strip_suffix("*/").unwrap_or(inner);

    let mut out = String::with_capacity(inner.len());
    for (i, line) in inner.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let line = line.trim_start();
        let line = match line.strip_prefix('*') {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        };
        out.push_str(line.trim_end());
    }
    out
}

/// Byte offset of the first directive that starts a line.
fn find_directive(body: &str) -> Option<usize> {
    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if trimmed.starts_with("@param") || trimmed.starts_with("@return") {
            return Some(offset + (line.len() - trimmed.len()));
        }
        offset += line.len();
    }
    None
}

fn split_directives(text: &str) -> Vec<&str> {
    let mut starts: Vec<usize> = text
        .match_indices("@param")
        .chain(text.match_indices("@return"))
        .map(|(i, _)| i)
        .collect();
    starts.sort_unstable();

    starts
        .iter()
        .enumerate()
        .map(|(n, &start)| {
            let end = starts.get(n + 1).copied().unwrap_or(text.len());
            &text[start..end]
        })
        .collect()
}

/// The first sentence: up to a `.` followed by whitespace or end of text.
fn brief_of(description: &str) -> &str {
    let bytes = description.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'.' && bytes.get(i + 1).map_or(true, u8::is_ascii_whitespace) {
            return &description[..=i];
        }
    }
    description
}

/// Join wrapped lines into single-spaced text.
fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
