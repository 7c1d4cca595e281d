//! Signature normalization.
//!
//! A canonical signature has no whitespace and no parameter names:
//!   `"transfer(address to, uint256 amount)"` → `"transfer(address,uint256)"`
//!
//! Name stripping is lexical, not a grammar parse. A parameter name is only
//! dropped when it directly follows one of the primitive ABI type keywords
//! below; array suffixes (`uint256[] ids`) and tuples are left as written.

use std::sync::OnceLock;

use regex::Regex;

/// The characters ECMAScript `\s` matches. Note U+0085 (NEL) is not one of
/// them, while U+FEFF is.
const SPACE_CLASS: &str = r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

/// Primitive type keywords, tried in order. The leading boundary is ASCII-only.
const TYPE_KEYWORDS: &str = r"(?-u:\b)(address|uint[0-9]*|int[0-9]*|bool|string|bytes[0-9]*|bytes|fixed[0-9]+x[0-9]*|ufixed[0-9]+x[0-9]*)";

const IDENTIFIER: &str = "[a-zA-Z_][a-zA-Z0-9_]*";

struct Patterns {
    space: Regex,
    space_run: Regex,
    named_parameter: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        space: compile(SPACE_CLASS),
        space_run: compile(&format!("{SPACE_CLASS}+")),
        named_parameter: compile(&format!("{TYPE_KEYWORDS}{SPACE_CLASS}+{IDENTIFIER}")),
    })
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// Normalize a function/error signature to its canonical form.
///
/// 1. trim and collapse whitespace runs to a single space
/// 2. drop the identifier following a primitive type keyword (`uint256 amount` → `uint256`)
/// 3. remove all remaining whitespace
///
/// Never fails. Blank input yields an empty string, and the output is a
/// fixed point: normalizing it again returns it unchanged.
pub fn normalize_signature(raw: &str) -> String {
    let p = patterns();
    let collapsed = p.space_run.replace_all(raw, " ");
    let stripped = p.named_parameter.replace_all(collapsed.trim_matches(' '), "$1");
    p.space.replace_all(&stripped, "").into_owned()
}
