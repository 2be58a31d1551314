#![forbid(unsafe_code)]

//! Configuration snippets suggesting whole rule categories

/// Render a `pyproject.toml` snippet adding `prefixes` under `key`
///
/// `key` is the setting to fill, usually `select` or `ignore`. Prefixes are
/// sorted and deduplicated. Returns an empty string when there is nothing to
/// suggest.
pub fn generate_pyproject_suggestion<S: AsRef<str>>(prefixes: &[S], key: &str) -> String {
    if prefixes.is_empty() {
        return String::new();
    }

    let mut sorted: Vec<&str> = prefixes.iter().map(|p| p.as_ref()).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let quoted: Vec<String> = sorted.iter().map(|p| format!("\"{}\"", p)).collect();

    format!(
        "```toml\n[tool.ruff.lint]\n{} = [{}]\n```\n",
        key,
        quoted.join(", ")
    )
}
