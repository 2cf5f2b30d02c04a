// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::OverlayColor;
use smallvec::SmallVec;

/// One display affecting instruction produced by the [`crate::ModeRouter`]. The router
/// never draws, it only decides what should be drawn. A [`super::RenderOpInterpreter`]
/// (or any other render surface) applies these in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    /// Print text at the cursor, advancing it.
    InsertText(String),
    EraseToEndOfLine,
    EraseDisplayAfterCursor,
    /// Delete this many columns at the cursor, shifting the rest of the line left.
    DeleteCharacters(u16),
    MoveCursorLeft(u16),
    MoveCursorRight(u16),
    MoveCursorUp(u16),
    MoveCursorDown(u16),
    SaveCursor,
    RestoreCursor,
    SetForegroundColor(OverlayColor),
    ResetForegroundColor,
    NewLine,
    /// Start a fresh line and print the prompt.
    Reprompt,
    /// The editable region of a command running inside the shell starts here.
    MarkPromptEnd,
}

/// Most keystrokes produce a handful of ops, so keep them inline.
pub type RenderOps = SmallVec<[RenderOp; 8]>;

/// Ops that print `text` at the cursor and redraw the text after the cursor without
/// moving the cursor past the insertion point.
pub fn push_insert_with_tail(ops: &mut RenderOps, text: &str, after: &str) {
    if !text.is_empty() {
        ops.push(RenderOp::InsertText(text.to_string()));
    }
    if !after.is_empty() {
        ops.push(RenderOp::SaveCursor);
        ops.push(RenderOp::InsertText(after.to_string()));
        ops.push(RenderOp::RestoreCursor);
    }
}

/// Ops that draw `candidate` as a colored overlay after the cursor, then the text after
/// the cursor, leaving the cursor where it was.
pub fn push_overlay(ops: &mut RenderOps, candidate: &str, after: &str, color: OverlayColor) {
    ops.extend([
        RenderOp::SaveCursor,
        RenderOp::EraseDisplayAfterCursor,
        RenderOp::EraseToEndOfLine,
        RenderOp::SetForegroundColor(color),
        RenderOp::InsertText(candidate.to_string()),
        RenderOp::ResetForegroundColor,
    ]);
    if !after.is_empty() {
        ops.push(RenderOp::InsertText(after.to_string()));
    }
    ops.push(RenderOp::RestoreCursor);
}

/// Ops that erase the overlay and redraw the text after the cursor.
pub fn push_overlay_erase(ops: &mut RenderOps, after: &str) {
    ops.extend([RenderOp::EraseDisplayAfterCursor, RenderOp::EraseToEndOfLine]);
    if !after.is_empty() {
        ops.extend([
            RenderOp::SaveCursor,
            RenderOp::InsertText(after.to_string()),
            RenderOp::RestoreCursor,
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_with_tail() {
        let mut ops = RenderOps::new();
        push_insert_with_tail(&mut ops, "a", "");
        assert_eq!(ops.to_vec(), vec![RenderOp::InsertText("a".into())]);

        let mut ops = RenderOps::new();
        push_insert_with_tail(&mut ops, "a", "bc");
        assert_eq!(
            ops.to_vec(),
            vec![
                RenderOp::InsertText("a".into()),
                RenderOp::SaveCursor,
                RenderOp::InsertText("bc".into()),
                RenderOp::RestoreCursor,
            ]
        );
    }

    #[test]
    fn test_overlay_erase_issues_one_erase() {
        let mut ops = RenderOps::new();
        push_overlay_erase(&mut ops, "");
        assert_eq!(
            ops.to_vec(),
            vec![RenderOp::EraseDisplayAfterCursor, RenderOp::EraseToEndOfLine]
        );
    }

    #[test]
    fn test_overlay_restores_cursor() {
        let mut ops = RenderOps::new();
        push_overlay(&mut ops, "t", " x", OverlayColor::Yellow);
        assert_eq!(ops.first(), Some(&RenderOp::SaveCursor));
        assert_eq!(ops.last(), Some(&RenderOp::RestoreCursor));
        assert!(ops.contains(&RenderOp::InsertText(" x".into())));
    }
}
