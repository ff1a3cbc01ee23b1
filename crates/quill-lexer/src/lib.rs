//! Quill lexer - tokenization for the Quill scripting language.
//!
//! This crate provides the lexer for Quill, which converts source code into tokens
//! for parsing. The lexer never fails: characters outside the language come back
//! as [`TokenKind::Illegal`] tokens and the consumer decides what to do with them.
//!
//! # Example
//!
//! ```
//! use quill_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("let five = 5;");
//! let token = lexer.next_token();
//! assert_eq!(token.kind, TokenKind::Let);
//! assert_eq!(token.literal, "let");
//! ```

pub mod lexer;
pub mod token;

pub use lexer::{tokenize, try_tokenize, Lexer, LexerError};
pub use token::{lookup_identifier, Position, Token, TokenKind};
