//! Lexer for the Quill scripting language.

use crate::token::{lookup_identifier, Position, Token, TokenKind};
use thiserror::Error;

/// Errors reported by [`try_tokenize`].
///
/// The lexer itself never fails; illegal input is surfaced as
/// [`TokenKind::Illegal`] tokens and only turned into an error here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("Illegal character '{ch}' at line {line}, column {column}")]
    IllegalCharacter { ch: char, line: usize, column: usize },
}

/// Lexer tokenizes Quill source code.
pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    read_position: usize,
    ch: Option<char>,
    line: usize,
    column: usize,
    token_start: Position,
}

impl Lexer {
    /// Create a new lexer for the given input.
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            chars: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: None,
            line: 0,
            column: 0,
            token_start: Position::default(),
        };
        lexer.read_char();
        lexer
    }

    /// Get the current position.
    fn current_position(&self) -> Position {
        Position::new(self.position, self.line, self.column)
    }

    /// Read the next character.
    fn read_char(&mut self) {
        match self.ch {
            Some('\n') => {
                self.line += 1;
                self.column = 0;
            }
            Some(_) => self.column += 1,
            None => {}
        }
        self.ch = self.chars.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Peek at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.chars.get(self.read_position).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    /// Start tracking a new token.
    fn start_token(&mut self) {
        self.token_start = self.current_position();
    }

    fn make_token(&self, kind: TokenKind, literal: String) -> Token {
        Token::new(kind, literal, self.token_start)
    }

    /// Get the next token.
    ///
    /// Once the input is exhausted every call returns an `Eof` token with an
    /// empty literal.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.start_token();

        let Some(ch) = self.ch else {
            return self.make_token(TokenKind::Eof, String::new());
        };

        // Operators and punctuation
        if let Some(tok) = self.read_operator(ch) {
            return tok;
        }

        // Identifiers and keywords
        if is_letter(ch) {
            return self.read_identifier();
        }

        // Numbers
        if ch.is_ascii_digit() {
            return self.read_number();
        }

        // Unknown character
        log::debug!(
            "illegal character {:?} at line {}, column {}",
            ch,
            self.token_start.line_number(),
            self.token_start.column_number()
        );
        self.read_char();
        self.make_token(TokenKind::Illegal, ch.to_string())
    }

    /// Read an identifier or keyword.
    fn read_identifier(&mut self) -> Token {
        let start = self.position;
        while self.ch.is_some_and(|c| is_letter(c) || c.is_ascii_digit()) {
            self.read_char();
        }
        let literal: String = self.chars[start..self.position].iter().collect();
        let kind = lookup_identifier(&literal);
        self.make_token(kind, literal)
    }

    /// Read a run of decimal digits.
    fn read_number(&mut self) -> Token {
        let start = self.position;
        while self.ch.is_some_and(|c| c.is_ascii_digit()) {
            self.read_char();
        }
        let literal: String = self.chars[start..self.position].iter().collect();
        self.make_token(TokenKind::Int, literal)
    }

    /// Read an operator or punctuation token.
    fn read_operator(&mut self, ch: char) -> Option<Token> {
        // Two-character operators
        let two_char = match (ch, self.peek_char()) {
            ('=', Some('=')) => Some((TokenKind::Eq, "==")),
            ('!', Some('=')) => Some((TokenKind::NotEq, "!=")),
            _ => None,
        };

        if let Some((kind, literal)) = two_char {
            self.read_char();
            self.read_char();
            return Some(self.make_token(kind, literal.to_string()));
        }

        // Single-character operators
        let kind = match ch {
            '=' => TokenKind::Assign,
            '!' => TokenKind::Bang,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            _ => return None,
        };

        self.read_char();
        Some(self.make_token(kind, ch.to_string()))
    }
}

/// Check if a character can start an identifier.
fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Tokenize an input string into a vector of tokens, ending with `Eof`.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.next_token();
        let is_eof = tok.kind == TokenKind::Eof;
        tokens.push(tok);
        if is_eof {
            break;
        }
    }
    log::trace!("tokenized {} tokens", tokens.len());
    tokens
}

/// Like [`tokenize`], but fails on the first illegal character.
pub fn try_tokenize(input: &str) -> Result<Vec<Token>, LexerError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.next_token();
        match tok.kind {
            TokenKind::Illegal => {
                let ch = tok.literal.chars().next().unwrap_or_default();
                return Err(LexerError::IllegalCharacter {
                    ch,
                    line: tok.start.line_number(),
                    column: tok.start.column_number(),
                });
            }
            TokenKind::Eof => {
                tokens.push(tok);
                break;
            }
            _ => tokens.push(tok),
        }
    }
    log::trace!("tokenized {} tokens", tokens.len());
    Ok(tokens)
}
