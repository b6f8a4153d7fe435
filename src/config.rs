//! Loading [`HoundOptions`] from disk.
//!
//! An options file is either a plain options object:
//!
//! ```json
//! { "strictFunctionTypes": false, "ignoredCodes": [6133] }
//! ```
//!
//! or a project config, in which case `compilerOptions.strictFunctionTypes`
//! (falling back to `compilerOptions.strict`) fills in `strictFunctionTypes`
//! when the top level does not set it. Comments and trailing commas are
//! accepted, as in `tsconfig.json`.

use std::path::Path;

use anyhow::{Context, Result};
use hound_checker::HoundOptions;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectSection {
    #[serde(default)]
    compiler_options: Option<CompilerSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompilerSection {
    #[serde(default)]
    strict_function_types: Option<bool>,
    #[serde(default)]
    strict: Option<bool>,
}

pub fn parse_options(source: &str) -> Result<HoundOptions> {
    let normalized = drop_trailing_commas(&strip_comments(source));
    let mut options =
        HoundOptions::from_json_str(&normalized).context("failed to parse hound options")?;
    if options.strict_function_types.is_none() {
        let project: ProjectSection =
            serde_json::from_str(&normalized).context("failed to parse compilerOptions")?;
        options.strict_function_types = project
            .compiler_options
            .and_then(|compiler| compiler.strict_function_types.or(compiler.strict));
    }
    Ok(options)
}

pub fn load_options(path: &Path) -> Result<HoundOptions> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read options: {}", path.display()))?;
    let options = parse_options(&source)
        .with_context(|| format!("failed to load options: {}", path.display()))?;
    debug!(
        path = %path.display(),
        strict_function_types = ?options.strict_function_types,
        ignored = options.ignored_codes.len(),
        "loaded options"
    );
    Ok(options)
}

/// Remove `//` and `/* */` comments outside string literals. Newlines
/// inside comments are kept so parse errors report the right line.
fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match (ch, chars.peek().copied()) {
            ('"', _) => {
                in_string = true;
                out.push(ch);
            }
            ('/', Some('/')) => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut previous = '\0';
                for skipped in chars.by_ref() {
                    if previous == '*' && skipped == '/' {
                        break;
                    }
                    if skipped == '\n' {
                        out.push('\n');
                    }
                    previous = skipped;
                }
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Drop commas that directly precede `}` or `]`.
fn drop_trailing_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut escaped = false;

    for (position, ch) in input.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
        } else if ch == '"' {
            in_string = true;
        } else if ch == ','
            && matches!(
                input[position + 1..].trim_start().chars().next(),
                Some('}' | ']')
            )
        {
            continue;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
