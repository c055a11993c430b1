//! Structural questions about a token's neighbors.

use crate::html::grammar::match_tag_at_start;
use crate::source::{TokenArena, TokenId, TokenKind};

const LIST_TAGS: &[&str] = &["ul", "ol", "li"];

/// Task-list state carried by a list item's open tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskState {
    pub task: bool,
    pub checked: bool,
}

/// True for inline HTML tokens that open or close `ul`, `ol` or `li`.
pub fn is_list_token(arena: &TokenArena, id: TokenId) -> bool {
    let token = &arena[id];
    if token.kind() != TokenKind::HtmlInline {
        return false;
    }
    match_tag_at_start(token.literal())
        .is_some_and(|tag| LIST_TAGS.iter().any(|name| tag.name_is(name)))
}

/// True for plain inline markdown content (text, code spans, emphasis,
/// links, breaks). Raw HTML does not count.
pub fn is_plain_inline(arena: &TokenArena, id: TokenId) -> bool {
    matches!(arena[id].kind(), TokenKind::Text | TokenKind::Inline)
}

/// The previous sibling exists and is not list-structural.
pub fn prev_is_non_list(arena: &TokenArena, id: TokenId) -> bool {
    arena[id]
        .prev()
        .is_some_and(|prev| !is_list_token(arena, prev))
}

/// The next sibling exists and is not list-structural.
pub fn next_is_non_list(arena: &TokenArena, id: TokenId) -> bool {
    arena[id]
        .next()
        .is_some_and(|next| !is_list_token(arena, next))
}

pub fn prev_is_plain_inline(arena: &TokenArena, id: TokenId) -> bool {
    arena[id]
        .prev()
        .is_some_and(|prev| is_plain_inline(arena, prev))
}

pub fn next_is_plain_inline(arena: &TokenArena, id: TokenId) -> bool {
    arena[id]
        .next()
        .is_some_and(|next| is_plain_inline(arena, next))
}

pub fn in_table_cell(arena: &TokenArena, id: TokenId) -> bool {
    arena.parent_kind(id) == Some(TokenKind::TableCell)
}

/// Reads task-list markers off a list item literal.
pub fn task_state(literal: &str) -> TaskState {
    TaskState {
        task: literal.contains("data-task"),
        checked: literal.contains("data-task-checked"),
    }
}
