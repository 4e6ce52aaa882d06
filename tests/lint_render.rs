//! Lint: detect bracket-key text (`[X]`) rendered without click registration.
//!
//! Any `[X]`-style key hint displayed by a `render.rs` must also be a click
//! target, registered via `ClickableList::push_clickable()`. A plain
//! `cl.push(...)` draws the hint but leaves it dead on touch screens.
//!
//! This test scans all `render.rs` files under `src/games/` and flags
//! `push(` calls whose string arguments contain bracket-key patterns.

use std::fs;
use std::path::Path;

/// Check if a string contains a bracket-key pattern like `[C]` or `[1]`.
fn contains_bracket_key(s: &str) -> bool {
    s.as_bytes()
        .windows(3)
        .any(|w| w[0] == b'[' && w[2] == b']' && w[1].is_ascii_alphanumeric())
}

/// Scan source for `push(` calls (non-clickable) containing bracket-key patterns.
fn find_bracket_key_in_push(source: &str) -> Vec<(usize, String)> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let trimmed = line.trim();
            if trimmed.starts_with("//") || !contains_bracket_key(line) {
                return None;
            }
            let has_push = line.contains(".push(");
            let has_clickable = line.contains("push_clickable(");
            (has_push && !has_clickable).then(|| (i + 1, trimmed.to_string()))
        })
        .collect()
}

#[test]
fn no_bracket_keys_in_non_clickable_push() {
    let games_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/games");
    let mut all_violations = Vec::new();
    let mut scanned = 0;

    visit_render_files(&games_dir, &mut all_violations, &mut scanned);
    assert!(scanned > 0, "no render.rs found under {}", games_dir.display());

    if !all_violations.is_empty() {
        let mut msg = String::from(
            "Found bracket-key text [X] in non-clickable cl.push() calls.\n\
             These should use push_clickable().\n\n",
        );
        for (file, line_num, line) in &all_violations {
            msg.push_str(&format!("  {}:{}: {}\n", file, line_num, line));
        }
        panic!("{}", msg);
    }
}

fn visit_render_files(dir: &Path, violations: &mut Vec<(String, usize, String)>, scanned: &mut usize) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            visit_render_files(&path, violations, scanned);
        } else if path.file_name().map(|n| n == "render.rs").unwrap_or(false) {
            let Ok(source) = fs::read_to_string(&path) else {
                continue;
            };
            *scanned += 1;
            let display_path = path.display().to_string();
            for (line_num, line) in find_bracket_key_in_push(&source) {
                violations.push((display_path.clone(), line_num, line));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_bracket_key_in_push() {
        let source = r#"cl.push(Line::from(" [C] CLICK! "));"#;
        assert_eq!(find_bracket_key_in_push(source).len(), 1);
    }

    #[test]
    fn allows_push_clickable() {
        let source = r#"cl.push_clickable(Line::from(" [C] CLICK! "), CLICK);"#;
        assert!(find_bracket_key_in_push(source).is_empty());
    }

    #[test]
    fn ignores_comments() {
        let source = r#"// cl.push(Line::from(" [7] Violet"));"#;
        assert!(find_bracket_key_in_push(source).is_empty());
    }

    #[test]
    fn bracket_key_detection() {
        assert!(contains_bracket_key("[C]"));
        assert!(contains_bracket_key("[1]"));
        assert!(contains_bracket_key(" [7] Violet"));
        assert!(!contains_bracket_key("[]"));
        assert!(!contains_bracket_key("[{}]"));
        assert!(!contains_bracket_key("[CC]"));
        assert!(!contains_bracket_key("abc"));
    }
}
