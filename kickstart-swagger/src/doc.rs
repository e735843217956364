//! KDoc comment emission.

use kickstart_codegen::builder::Indenter;
use kickstart_core::strip_line_breaks;

/// Collapse runs of empty lines into a single empty line.
pub fn drop_double_empty(lines: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        let empty = line.trim().is_empty();
        if empty && out.last().is_some_and(|last| last.trim().is_empty()) {
            continue;
        }
        out.push(if empty { String::new() } else { line });
    }
    out
}

/// Emit a KDoc block. Leading and trailing empty lines are dropped, and
/// nothing is emitted when no line remains.
pub fn kdoc(ind: &mut Indenter, lines: Vec<String>) {
    let lines = drop_double_empty(lines);
    let start = lines.iter().position(|l| !l.is_empty());
    let end = lines.iter().rposition(|l| !l.is_empty());
    let (Some(start), Some(end)) = (start, end) else {
        return;
    };

    ind.line("/**");
    for line in &lines[start..=end] {
        if line.is_empty() {
            ind.line(" *");
        } else {
            ind.line(format!(" * {}", line));
        }
    }
    ind.line(" */");
}

/// Emit the KDoc of a declaration from its parts. Parameters without a
/// description are still listed.
pub fn operation_doc<'a>(
    ind: &mut Indenter,
    title: Option<&str>,
    description: Option<&str>,
    params: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
    retval: Option<&str>,
) {
    let mut lines = Vec::new();
    if let Some(title) = title {
        lines.push(strip_line_breaks(title));
        lines.push(String::new());
    }
    if let Some(description) = description {
        lines.extend(description.lines().map(|l| l.trim_end().to_string()));
        lines.push(String::new());
    }
    for (name, text) in params {
        match text {
            Some(text) => lines.push(format!("@param {} {}", name, strip_line_breaks(text))),
            None => lines.push(format!("@param {}", name)),
        }
    }
    if let Some(retval) = retval {
        lines.push(format!("@return {}", strip_line_breaks(retval)));
    }
    kdoc(ind, lines);
}
