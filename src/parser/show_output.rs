//! Parser for `module show` output.
//!
//! Scans the raw text an lmod-style module system prints when asked to
//! describe a module, and collects the names declared through the
//! dependency keywords (`depends_on`, `load`, `always_load`, `prereq`).

/// Declaration keywords that name other modules as dependencies.
///
/// A line counts as a dependency declaration only when its trimmed text
/// before the first `(` equals one of these exactly.
const DEPENDENCY_KEYWORDS: [&str; 4] = ["depends_on", "load", "always_load", "prereq"];

/// Extracts dependency module names from the lines of a module description.
///
/// Lines are trimmed here; callers pass them through as split from the raw
/// output. For each matching line the argument list between the first `(`
/// and the last `)` is split on commas and each fragment has one pair of
/// surrounding double quotes removed. Results keep declaration order and
/// duplicates.
///
/// Malformed argument lists (for example a missing closing parenthesis) are
/// not rejected; whatever substring the delimiters yield is used as-is.
///
/// # Example
///
/// ```
/// use modgraph::parser::extract_dependencies;
///
/// let lines = ["depends_on(\"gcc/11.2.0\",\"cmake/3.22\")", "whatis(\"...\")"];
/// let deps = extract_dependencies(lines.iter().map(|l| l.to_string()));
/// assert_eq!(deps, vec!["gcc/11.2.0", "cmake/3.22"]);
/// ```
pub fn extract_dependencies<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut deps = Vec::new();

    for line in lines {
        let trimmed = line.as_ref().trim();

        let Some(open) = trimmed.find('(') else {
            continue;
        };
        if !DEPENDENCY_KEYWORDS.contains(&&trimmed[..open]) {
            continue;
        }

        // Everything between the first '(' and the last ')'. When the
        // closing parenthesis is missing this slices up to the opening
        // one, yielding an empty argument list.
        let close = trimmed.rfind(')').unwrap_or(open);
        let arguments = if close > open {
            &trimmed[open + 1..close]
        } else {
            ""
        };

        for fragment in arguments.split(',') {
            deps.push(strip_quotes(fragment).to_string());
        }
    }

    deps
}

/// Removes exactly one leading and one trailing double quote, if present.
///
/// Mirrors a quote-only strip: surrounding whitespace inside the argument
/// list is left untouched.
fn strip_quotes(fragment: &str) -> &str {
    let fragment = fragment.strip_prefix('"').unwrap_or(fragment);
    fragment.strip_suffix('"').unwrap_or(fragment)
}
