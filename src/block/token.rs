//! Block-level token types.

use smallvec::SmallVec;

/// Whitespace-separated words of a fence info string.
pub type InfoWords = SmallVec<[String; 2]>;

/// Tokens emitted by the block lexer, in document order.
///
/// Container tokens come in `*Open`/`*Close` pairs that nest properly.
/// Leaf tokens own their text, since nested list content is lexed from
/// a derived buffer rather than the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Token {
    /// A fenced code block.
    Fence {
        /// Info string split on whitespace runs.
        info_words: InfoWords,
        /// Raw content between the fences, with the opening indent removed.
        content: String,
    },

    /// An indented code block.
    CodeBlock {
        /// Content with the four-space indent removed.
        content: String,
    },

    /// An ATX heading.
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Trimmed heading text.
        content: String,
    },

    /// A thematic break (horizontal rule).
    ThematicBreak,

    /// Start of a paragraph.
    ParagraphOpen,
    /// Inline content handed to the inline lexer.
    Inline {
        /// Paragraph text, lines joined with `\n`.
        content: String,
    },
    /// End of a paragraph.
    ParagraphClose,

    /// Start of a bullet list.
    BulletListOpen {
        /// Whether the list is tight. Patched after emission.
        tight: bool,
    },
    /// End of a bullet list.
    BulletListClose,

    /// Start of an ordered list.
    OrderedListOpen {
        /// Number of the first item.
        start: u32,
        /// Whether the list is tight. Patched after emission.
        tight: bool,
    },
    /// End of an ordered list.
    OrderedListClose,

    /// Start of a list item.
    ListItemOpen,
    /// End of a list item.
    ListItemClose,
}

impl Token {
    /// Stable snake_case name of the token kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Fence { .. } => "fence",
            Self::CodeBlock { .. } => "code_block",
            Self::Heading { .. } => "heading",
            Self::ThematicBreak => "thematic_break",
            Self::ParagraphOpen => "paragraph_open",
            Self::Inline { .. } => "inline",
            Self::ParagraphClose => "paragraph_close",
            Self::BulletListOpen { .. } => "bullet_list_open",
            Self::BulletListClose => "bullet_list_close",
            Self::OrderedListOpen { .. } => "ordered_list_open",
            Self::OrderedListClose => "ordered_list_close",
            Self::ListItemOpen => "list_item_open",
            Self::ListItemClose => "list_item_close",
        }
    }

    /// Nesting change caused by this token: +1 for opens, -1 for closes.
    pub fn nesting(&self) -> i8 {
        match self {
            Self::ParagraphOpen
            | Self::BulletListOpen { .. }
            | Self::OrderedListOpen { .. }
            | Self::ListItemOpen => 1,
            Self::ParagraphClose
            | Self::BulletListClose
            | Self::OrderedListClose
            | Self::ListItemClose => -1,
            _ => 0,
        }
    }

    /// Tight flag of a list open token.
    pub fn list_tight(&self) -> Option<bool> {
        match self {
            Self::BulletListOpen { tight } | Self::OrderedListOpen { tight, .. } => Some(*tight),
            _ => None,
        }
    }
}

/// Type of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Bullet list (`-`, `*`, `+`).
    Bullet,
    /// Ordered list with starting number.
    Ordered {
        /// Starting number.
        start: u32,
    },
}

impl ListKind {
    /// Whether this is an ordered list.
    #[inline]
    pub fn is_ordered(self) -> bool {
        matches!(self, Self::Ordered { .. })
    }

    /// Open token for this list kind, initially tight.
    pub fn open_token(self) -> Token {
        match self {
            Self::Bullet => Token::BulletListOpen { tight: true },
            Self::Ordered { start } => Token::OrderedListOpen { start, tight: true },
        }
    }

    /// Close token for this list kind.
    pub fn close_token(self) -> Token {
        match self {
            Self::Bullet => Token::BulletListClose,
            Self::Ordered { .. } => Token::OrderedListClose,
        }
    }
}
