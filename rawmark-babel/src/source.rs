//! Sibling-linked view of the markdown tree.
//!
//! The conversion state machine needs to look at a token's parent and its
//! previous and next siblings. Tokens live in an append-only arena and refer
//! to each other by [`TokenId`], so the markdown tree is never mutated and
//! ownership stays with the arena.

use std::ops::Index;

/// Index of a token inside a [`TokenArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(usize);

/// Coarse classification of a markdown node, as seen by the predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Document,
    Paragraph,
    TableCell,
    /// Any other block container or leaf block.
    Block,
    /// Plain text.
    Text,
    /// Non-HTML inline content: code spans, emphasis, links, breaks.
    Inline,
    /// Raw HTML found inside a paragraph or table cell.
    HtmlInline,
    /// A raw HTML block.
    HtmlBlock,
}

impl TokenKind {
    pub fn is_html(self) -> bool {
        matches!(self, TokenKind::HtmlInline | TokenKind::HtmlBlock)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    kind: TokenKind,
    literal: String,
    parent: Option<TokenId>,
    prev: Option<TokenId>,
    next: Option<TokenId>,
    first_child: Option<TokenId>,
    last_child: Option<TokenId>,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Raw source text; empty for tokens that carry no literal.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn parent(&self) -> Option<TokenId> {
        self.parent
    }

    pub fn prev(&self) -> Option<TokenId> {
        self.prev
    }

    pub fn next(&self) -> Option<TokenId> {
        self.next
    }
}

/// Append-only storage for tokens. The root document token is created on
/// construction.
#[derive(Debug, Clone)]
pub struct TokenArena {
    tokens: Vec<Token>,
}

impl TokenArena {
    pub fn new() -> Self {
        let root = Token {
            kind: TokenKind::Document,
            literal: String::new(),
            parent: None,
            prev: None,
            next: None,
            first_child: None,
            last_child: None,
        };
        Self { tokens: vec![root] }
    }

    pub fn root(&self) -> TokenId {
        TokenId(0)
    }

    /// Appends a token as the last child of `parent`, linking it to its
    /// previous sibling.
    pub fn push(
        &mut self,
        parent: TokenId,
        kind: TokenKind,
        literal: impl Into<String>,
    ) -> TokenId {
        let id = TokenId(self.tokens.len());
        let prev = self.tokens[parent.0].last_child;
        self.tokens.push(Token {
            kind,
            literal: literal.into(),
            parent: Some(parent),
            prev,
            next: None,
            first_child: None,
            last_child: None,
        });

        match prev {
            Some(prev) => self.tokens[prev.0].next = Some(id),
            None => self.tokens[parent.0].first_child = Some(id),
        }
        self.tokens[parent.0].last_child = Some(id);
        id
    }

    pub fn get(&self, id: TokenId) -> &Token {
        &self.tokens[id.0]
    }

    /// Kind of the token's parent, if it has one.
    pub fn parent_kind(&self, id: TokenId) -> Option<TokenKind> {
        self.get(id).parent.map(|parent| self.get(parent).kind)
    }

    /// Iterates the children of `id` in order.
    pub fn children(&self, id: TokenId) -> Children<'_> {
        Children {
            arena: self,
            next: self.get(id).first_child,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        // The root is always present.
        false
    }
}

impl Default for TokenArena {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<TokenId> for TokenArena {
    type Output = Token;

    fn index(&self, id: TokenId) -> &Token {
        self.get(id)
    }
}

pub struct Children<'a> {
    arena: &'a TokenArena,
    next: Option<TokenId>,
}

impl Iterator for Children<'_> {
    type Item = TokenId;

    fn next(&mut self) -> Option<TokenId> {
        let current = self.next?;
        self.next = self.arena.get(current).next;
        Some(current)
    }
}
