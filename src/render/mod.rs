//! Token rendering: turns a [`Token`] into the text placed inside a
//! generated C string literal.

mod token;

use std::fmt::Write as _;

pub use token::Token;

const UNDEF_SUFFIX: &str = "=UNDEF";
const QUOTE: &str = "\\\"";
/// Widest base-10 `i64`, sign included.
const MAX_NUMBER_WIDTH: usize = 20;

/// Renders tokens into a scratch buffer reused across calls.
///
/// The buffer only grows when a token needs more room than it already has.
/// If that growth fails the process aborts: a truncated token would produce
/// a corrupt generated file.
#[derive(Debug, Default)]
pub struct TokenRenderer {
    scratch: String,
}

impl TokenRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `token` and returns the escaped text. Its `len()` is the
    /// rendered length used for wrap decisions.
    pub fn render(&mut self, token: &Token) -> &str {
        self.scratch.clear();
        self.reserve(rendered_size(token));

        match token {
            Token::Literal(text) => self.scratch.push_str(text),
            Token::Defined(name, value) => {
                self.scratch.push_str(name);
                self.scratch.push('=');
                self.scratch.push_str(QUOTE);
                push_escaped(&mut self.scratch, value);
                self.scratch.push_str(QUOTE);
            }
            Token::DefinedNumeric(name, value) => {
                self.scratch.push_str(name);
                self.scratch.push('=');
                // Capacity is reserved above; writing into a String cannot fail.
                let _ = write!(self.scratch, "{value}");
            }
            Token::Undefined(name) => {
                self.scratch.push_str(name);
                self.scratch.push_str(UNDEF_SUFFIX);
            }
        }

        &self.scratch
    }

    pub fn capacity(&self) -> usize {
        self.scratch.capacity()
    }

    fn reserve(&mut self, needed: usize) {
        if needed <= self.scratch.capacity() {
            return;
        }
        if self.scratch.try_reserve_exact(needed).is_err() {
            out_of_memory();
        }
    }
}

fn rendered_size(token: &Token) -> usize {
    match token {
        Token::Literal(text) => text.len(),
        Token::Defined(name, value) => name.len() + 1 + 2 * QUOTE.len() + escaped_len(value),
        Token::DefinedNumeric(name, _) => name.len() + 1 + MAX_NUMBER_WIDTH,
        Token::Undefined(name) => name.len() + UNDEF_SUFFIX.len(),
    }
}

fn escape(ch: char) -> Option<&'static str> {
    match ch {
        '"' => Some("\\\""),
        '\\' => Some("\\\\"),
        '\n' => Some("\\n"),
        '\r' => Some("\\r"),
        '\t' => Some("\\t"),
        _ => None,
    }
}

fn escaped_len(value: &str) -> usize {
    value
        .chars()
        .map(|ch| escape(ch).map_or(ch.len_utf8(), str::len))
        .sum()
}

fn push_escaped(buf: &mut String, value: &str) {
    for ch in value.chars() {
        match escape(ch) {
            Some(seq) => buf.push_str(seq),
            None => buf.push(ch),
        }
    }
}

fn out_of_memory() -> ! {
    eprintln!("genversion: Not enough memory");
    std::process::abort()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(token: Token) -> String {
        TokenRenderer::new().render(&token).to_string()
    }

    #[test]
    fn literal_is_unchanged() {
        assert_eq!(render(Token::literal("LOCKING=FLOCK")), "LOCKING=FLOCK");
    }

    #[test]
    fn defined_value_is_wrapped_in_escaped_quotes() {
        assert_eq!(
            render(Token::defined("VERSION", "Foo-1.0")),
            r#"VERSION=\"Foo-1.0\""#
        );
    }

    #[test]
    fn defined_value_escapes_quotes_backslashes_and_newlines() {
        let rendered = render(Token::defined("CC", "cc -D\"X\" C:\\bin\nnext"));

        assert_eq!(rendered, r#"CC=\"cc -D\"X\" C:\\bin\nnext\""#);
        assert!(!rendered.contains('\n'));
    }

    #[test]
    fn defined_value_escapes_tabs_and_carriage_returns() {
        let token = Token::defined("FLAGS", "a\tb\rc");
        let rendered = render(token.clone());

        assert_eq!(rendered, r#"FLAGS=\"a\tb\rc\""#);
        assert!(!rendered.contains(['\t', '\r']));
        assert_eq!(rendered.len(), rendered_size(&token));
    }

    #[test]
    fn numeric_is_signed_base_ten() {
        assert_eq!(render(Token::numeric("DEBUG_DAYS", 4)), "DEBUG_DAYS=4");
        assert_eq!(
            render(Token::numeric("OFFSET", i64::MIN)),
            "OFFSET=-9223372036854775808"
        );
    }

    #[test]
    fn undefined_renders_marker() {
        assert_eq!(render(Token::undefined("BUILT_DATE")), "BUILT_DATE=UNDEF");
    }

    #[test]
    fn size_estimate_covers_rendered_text() {
        let tokens = [
            Token::literal("HAVE_MMAP"),
            Token::defined("bindir", "/usr/local/\"bin\"\t"),
            Token::numeric("N", -42),
            Token::undefined("MAILER"),
        ];
        let mut renderer = TokenRenderer::new();
        for token in &tokens {
            let estimate = rendered_size(token);
            let rendered = renderer.render(token).len();
            assert!(rendered <= estimate, "{token:?}: {rendered} > {estimate}");
        }
    }

    #[test]
    fn scratch_buffer_is_reused_for_smaller_tokens() {
        let mut renderer = TokenRenderer::new();
        renderer.render(&Token::defined("CONFIG_DIR", "/usr/local/etc/genversion"));
        let grown = renderer.capacity();

        renderer.render(&Token::undefined("CC"));

        assert_eq!(renderer.capacity(), grown);
    }
}
