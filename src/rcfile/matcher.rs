//! Text rules for `export PATH="..."` lines.
//!
//! Only single-line assignments of the exact shape `export PATH="<value>"` are
//! recognised. The value runs from the opening quote to the last `"` on the
//! same line. Directories are matched as plain substrings next to a `:`
//! separator, so `/bin` is also found inside `/usr/local/bin:$PATH`.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static ASSIGNMENT: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r#"export PATH="(.*)""#).expect("assignment pattern is valid"));

static NEWLINE_RUNS: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\n+").expect("newline pattern is valid"));

/// Assignment left behind once its only entry is gone.
const EMPTY_ASSIGNMENT: &str = r#"export PATH=":$PATH""#;

/// A `export PATH="..."` assignment found in rc file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathAssignment<'a> {
	/// Byte range of the whole assignment within the content.
	pub span: Range<usize>,

	/// Text between the quotes.
	pub value: &'a str,
}

impl PathAssignment<'_> {
	/// `directory` followed by a separator, in any position.
	pub fn has_leading_entry(&self, directory: &str) -> bool {
		self.value.contains(&format!("{directory}:"))
	}

	/// `directory` preceded by a separator, in any position.
	pub fn has_trailing_entry(&self, directory: &str) -> bool {
		self.value.contains(&format!(":{directory}"))
	}
}

/// Find every PATH assignment in `content`, in order.
pub fn assignments(content: &str) -> impl Iterator<Item = PathAssignment<'_>> {
	ASSIGNMENT.captures_iter(content).filter_map(|caps| {
		let whole = caps.get(0)?;
		let value = caps.get(1)?;
		Some(PathAssignment {
			span: whole.range(),
			value: value.as_str(),
		})
	})
}

/// Check whether any PATH assignment already references `directory`.
pub fn contains_directory(content: &str, directory: &str) -> bool {
	assignments(content)
		.any(|a| a.has_leading_entry(directory) || a.has_trailing_entry(directory))
}

/// Append a new assignment prepending `directory` to PATH.
pub fn append_directory(content: &str, directory: &str) -> String {
	format!("{content}\nexport PATH=\"{directory}:$PATH\"")
}

/// Remove the first assignment referencing `directory` followed by a separator.
///
/// Returns `None` if no assignment matches. The result has any
/// `export PATH=":$PATH"` leftovers removed, newline runs collapsed and
/// surrounding whitespace trimmed.
pub fn remove_directory(content: &str, directory: &str) -> Option<String> {
	let found = assignments(content).find(|a| a.has_leading_entry(directory))?;

	let mut edited = String::with_capacity(content.len());
	edited.push_str(&content[..found.span.start]);
	edited.push_str(&content[found.span.end..]);

	Some(normalize(&edited.replace(EMPTY_ASSIGNMENT, "")))
}

fn normalize(content: &str) -> String {
	NEWLINE_RUNS.replace_all(content, "\n").trim().to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_assignments_found_in_order() {
		let content = "# paths\nexport PATH=\"/a:$PATH\"\nalias ll='ls -l'\nexport PATH=\"$PATH:/b\"\n";
		let found: Vec<_> = assignments(content).collect();

		assert_eq!(found.len(), 2);
		assert_eq!(found[0].value, "/a:$PATH");
		assert_eq!(found[1].value, "$PATH:/b");
		assert_eq!(&content[found[0].span.clone()], "export PATH=\"/a:$PATH\"");
	}

	#[test]
	fn test_assignment_value_runs_to_last_quote() {
		let content = "export PATH=\"/a:$PATH\" # \"quoted\" note";
		let found: Vec<_> = assignments(content).collect();

		assert_eq!(found.len(), 1);
		assert_eq!(found[0].value, "/a:$PATH\" # \"quoted");
	}

	#[test]
	fn test_unquoted_export_is_ignored() {
		assert!(!contains_directory("export PATH=/opt/tool:$PATH", "/opt/tool"));
	}

	#[test]
	fn test_contains_directory_first_entry() {
		let content = "export PATH=\"/opt/tool:$PATH\"";
		assert!(contains_directory(content, "/opt/tool"));
	}

	#[test]
	fn test_contains_directory_later_entry() {
		let content = "export PATH=\"/usr/local/bin:/opt/tool:$PATH\"";
		assert!(contains_directory(content, "/opt/tool"));

		let content = "export PATH=\"$PATH:/opt/tool\"";
		assert!(contains_directory(content, "/opt/tool"));
	}

	#[test]
	fn test_contains_directory_any_line() {
		let content = "export PATH=\"/a:$PATH\"\nexport PATH=\"/b:$PATH\"\nexport PATH=\"/c:$PATH\"";
		assert!(contains_directory(content, "/b"));
		assert!(!contains_directory(content, "/d"));
	}

	#[test]
	fn test_contains_directory_outside_assignment() {
		let content = "# /opt/tool: installed manually\nalias t=/opt/tool:x";
		assert!(!contains_directory(content, "/opt/tool"));
	}

	#[test]
	fn test_contains_directory_literal_metacharacters() {
		let content = "export PATH=\"/opt/a.b:$PATH\"";
		assert!(contains_directory(content, "/opt/a.b"));
		assert!(!contains_directory(content, "/opt/a*b"));
		assert!(!contains_directory("export PATH=\"/opt/axb:$PATH\"", "/opt/a.b"));
	}

	#[test]
	fn test_substring_directories_match() {
		let content = "export PATH=\"/usr/local/bin:$PATH\"";
		assert!(contains_directory(content, "/bin"));
		assert!(remove_directory(content, "/bin").is_some());

		let content = "export PATH=\"$PATH:/usr/bin2\"";
		assert!(contains_directory(content, "/usr/bin"));
	}

	#[test]
	fn test_append_directory() {
		let content = "export PATH=\"/usr/bin:$PATH\"";
		assert_eq!(
			append_directory(content, "/opt/tool"),
			"export PATH=\"/usr/bin:$PATH\"\nexport PATH=\"/opt/tool:$PATH\""
		);
	}

	#[test]
	fn test_append_then_contains() {
		let content = append_directory("", "/opt/tool");
		assert!(contains_directory(&content, "/opt/tool"));
	}

	#[test]
	fn test_remove_directory_not_found() {
		let content = "export PATH=\"/usr/bin:$PATH\"";
		assert_eq!(remove_directory(content, "/opt/tool"), None);
	}

	#[test]
	fn test_remove_requires_trailing_separator() {
		let content = "export PATH=\"$PATH:/opt/tool\"";
		assert!(contains_directory(content, "/opt/tool"));
		assert_eq!(remove_directory(content, "/opt/tool"), None);
	}

	#[test]
	fn test_remove_sole_entry_leaves_no_residue() {
		let content = "alias ll='ls -l'\n\nexport PATH=\"/opt/tool:$PATH\"\n\nexport EDITOR=vim\n";
		let edited = remove_directory(content, "/opt/tool").unwrap();

		assert_eq!(edited, "alias ll='ls -l'\nexport EDITOR=vim");
		assert!(!edited.contains(EMPTY_ASSIGNMENT));
		assert!(!edited.contains("\n\n"));
	}

	#[test]
	fn test_remove_drops_empty_assignments() {
		let content = "export PATH=\":$PATH\"\nexport PATH=\"/opt/tool:$PATH\"";
		assert_eq!(remove_directory(content, "/opt/tool").unwrap(), "");
	}

	#[test]
	fn test_remove_only_first_match() {
		let content = "export PATH=\"/opt/tool:$PATH\"\nexport PATH=\"/opt/tool:/usr/bin:$PATH\"";
		assert_eq!(
			remove_directory(content, "/opt/tool").unwrap(),
			"export PATH=\"/opt/tool:/usr/bin:$PATH\""
		);
	}

	#[test]
	fn test_remove_end_to_end() {
		let content = append_directory("export PATH=\"/usr/bin:$PATH\"", "/opt/tool");
		assert!(content.contains("export PATH=\"/usr/bin:$PATH\""));
		assert!(content.contains("export PATH=\"/opt/tool:$PATH\""));

		let edited = remove_directory(&content, "/usr/bin").unwrap();
		assert_eq!(edited, "export PATH=\"/opt/tool:$PATH\"");
	}

	#[test]
	fn test_remove_add_remove_is_stable() {
		let original = "export EDITOR=vim\nexport PATH=\"/opt/tool:$PATH\"\nexport PATH=\"/usr/bin:$PATH\"\n";

		let removed = remove_directory(original, "/opt/tool").unwrap();
		let added = append_directory(&removed, "/opt/tool");
		let removed_again = remove_directory(&added, "/opt/tool").unwrap();

		assert_eq!(removed_again, removed);
		assert_eq!(removed, "export EDITOR=vim\nexport PATH=\"/usr/bin:$PATH\"");
	}

	#[test]
	fn test_repeated_cycles_do_not_accumulate_blank_lines() {
		let mut content = "export EDITOR=vim\n".to_string();
		for _ in 0..5 {
			content = append_directory(&content, "/opt/tool");
			content = remove_directory(&content, "/opt/tool").unwrap();
		}
		assert_eq!(content, "export EDITOR=vim");
	}
}
