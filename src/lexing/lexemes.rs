//! Structural lexemes
//!
//! The logos grammar for the four structural markers. It is only ever run on a single piece
//! produced by the splitting passes: a piece is a structural marker when the first lexeme
//! covers it entirely, and literal text otherwise.

use logos::Logos;

/// Caption and optional target of a reveal link, as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkParts {
    pub caption: String,
    pub target: Option<String>,
}

#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum Lexeme {
    /// `>` with an optional name and at most one trailing whitespace character.
    #[regex(r">[A-Za-z0-9\x{C0}-\x{FF}_'\-]*\s?", paragraph_name)]
    Paragraph(String),

    #[token("{")]
    FragmentOpen,

    #[regex(r"\{[A-Za-z0-9\x{C0}-\x{FF}_'\-]+:", fragment_name)]
    NamedFragmentOpen(String),

    #[token("}")]
    FragmentClose,

    #[regex(r"\[[^\]]*\]", link_parts)]
    #[regex(r"\[[^\]]*\]#[A-Za-z0-9\x{C0}-\x{FF}_'\-]+", link_parts)]
    RevealLink(LinkParts),
}

fn paragraph_name(lex: &mut logos::Lexer<Lexeme>) -> String {
    lex.slice()[1..].trim_end().to_string()
}

fn fragment_name(lex: &mut logos::Lexer<Lexeme>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

fn link_parts(lex: &mut logos::Lexer<Lexeme>) -> LinkParts {
    let slice = lex.slice();
    // The caption cannot contain `]`, so the first one closes it.
    let close = slice.find(']').unwrap_or(slice.len() - 1);
    let caption = slice[1..close].to_string();
    let target = slice[close + 1..]
        .strip_prefix('#')
        .map(|name| name.to_string());
    LinkParts { caption, target }
}

impl Lexeme {
    /// Classify a whole piece. Returns `None` for literal text.
    pub fn classify(piece: &str) -> Option<Lexeme> {
        let mut lexer = Lexeme::lexer(piece);
        match lexer.next() {
            Some(Ok(lexeme)) if lexer.span() == (0..piece.len()) => Some(lexeme),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_markers() {
        assert_eq!(
            Lexeme::classify(">"),
            Some(Lexeme::Paragraph(String::new()))
        );
        assert_eq!(
            Lexeme::classify(">intro "),
            Some(Lexeme::Paragraph("intro".to_string()))
        );
        assert_eq!(
            Lexeme::classify(">\n"),
            Some(Lexeme::Paragraph(String::new()))
        );
        assert_eq!(
            Lexeme::classify(">Élan'-_2"),
            Some(Lexeme::Paragraph("Élan'-_2".to_string()))
        );
    }

    #[test]
    fn test_fragment_markers() {
        assert_eq!(Lexeme::classify("{"), Some(Lexeme::FragmentOpen));
        assert_eq!(
            Lexeme::classify("{secret:"),
            Some(Lexeme::NamedFragmentOpen("secret".to_string()))
        );
        assert_eq!(
            Lexeme::classify("{3:"),
            Some(Lexeme::NamedFragmentOpen("3".to_string()))
        );
        assert_eq!(Lexeme::classify("}"), Some(Lexeme::FragmentClose));
    }

    #[test]
    fn test_reveal_links() {
        assert_eq!(
            Lexeme::classify("[more]"),
            Some(Lexeme::RevealLink(LinkParts {
                caption: "more".to_string(),
                target: None,
            }))
        );
        assert_eq!(
            Lexeme::classify("[tell me **why**]#why"),
            Some(Lexeme::RevealLink(LinkParts {
                caption: "tell me **why**".to_string(),
                target: Some("why".to_string()),
            }))
        );
        assert_eq!(
            Lexeme::classify("[]"),
            Some(Lexeme::RevealLink(LinkParts {
                caption: String::new(),
                target: None,
            }))
        );
    }

    #[test]
    fn test_text_is_not_a_lexeme() {
        assert_eq!(Lexeme::classify("hello"), None);
        assert_eq!(Lexeme::classify("[unclosed"), None);
        assert_eq!(Lexeme::classify("{ "), None);
        assert_eq!(Lexeme::classify("}}"), None);
    }
}
