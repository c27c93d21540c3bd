//! # russiandoll
//!
//! A compiler for the russiandoll format: progressively revealed text made of nested
//! fragments that open when their reveal links are activated.
//!
//! The Language
//!
//!     Four structural constructs plus inline text:
//!
//!     - `>name ` starts a new (optionally named) paragraph. Paragraphs never nest.
//!     - `{` or `{name:` opens a fragment, `}` closes it. Fragments nest freely.
//!     - `[caption]` or `[caption]#name` is a reveal link. Without a target it pairs with the
//!       next anonymous fragment of the same scope; with a target it opens the fragment (or
//!       paragraph) of that name. All-digit names are scoped: `{1:` means a different fragment
//!       at every nesting depth.
//!     - Everything else is text, with a small inline markup table applied (see [inlines]).
//!
//! File Layout
//!
//!     The compiler is a strictly forward pipeline, one module per stage:
//!
//!     source ─▶ lexing ─▶ parsing (resolver) ─▶ closure ─▶ formats
//!
//!     .
//!     ├── lexing.rs       # Tokenizer: three structural splits + logos classification
//!     ├── inlines.rs      # Escaping and inline markup substitutions
//!     ├── location.rs     # Byte offset / token index to line:column
//!     ├── ast.rs          # Identifiers, events and the finished Document
//!     ├── parsing.rs      # Scope/id resolver and AST builder, ParseError
//!     ├── closure.rs      # Descendant closure of reveal links
//!     ├── formats.rs      # Formatter trait, registry, html / json / yaml output
//!     └── pipeline.rs     # CompileOptions, profiles and the Compiler facade
//!
//!     Every stage is a pure function of its input: a parse owns all of its state, so
//!     concurrent compilations need no coordination.

pub mod ast;
pub mod closure;
pub mod formats;
pub mod inlines;
pub mod lexing;
pub mod location;
pub mod parsing;
pub mod pipeline;

pub use ast::{Document, Event, EventKind, Identifier};
pub use formats::{to_html, FormatError, FormatRegistry, Formatter};
pub use lexing::{detokenize, tokenize, Token, TokenKind};
pub use location::{Position, SourceLocation};
pub use parsing::{parse, parse_bytes, ParseError};
pub use pipeline::{compile_html, CompileError, CompileOptions, Compiler, ProfileRegistry};

/// Version marker written on the root element of every compiled document.
pub const FORMAT_VERSION: &str = "1.0.0";
