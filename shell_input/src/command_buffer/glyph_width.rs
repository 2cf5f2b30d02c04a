// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_width::UnicodeWidthStr;

/// Default for [`crate::EditorConfig::wide_glyph_threshold`].
pub const DEFAULT_WIDE_GLYPH_THRESHOLD: f64 = 1.4;

/// Display width lookup, supplied by the render surface. Widths are in whatever unit
/// the surface measures glyphs in (points, columns, ...), only the ratio to
/// [`GlyphMetrics::reference_width`] matters.
pub trait GlyphMetrics {
    /// Rendered width of one grapheme cluster.
    fn glyph_width(&self, grapheme: &str) -> f64;

    /// Width of a regular (narrow) reference character.
    fn reference_width(&self) -> f64;
}

/// [`GlyphMetrics`] for a plain terminal grid, based on [`unicode_width`]. CJK and most
/// emoji report 2 columns, everything else 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeWidthMetrics;

impl GlyphMetrics for UnicodeWidthMetrics {
    #[allow(clippy::cast_precision_loss)]
    fn glyph_width(&self, grapheme: &str) -> f64 { grapheme.width() as f64 }

    fn reference_width(&self) -> f64 { 1.0 }
}

/// Number of display columns a cursor move or erase has to cover for `grapheme`: 2 if
/// it is wider than `threshold` reference characters, otherwise 1.
#[must_use]
pub fn display_columns<M: GlyphMetrics + ?Sized>(
    metrics: &M,
    grapheme: &str,
    threshold: f64,
) -> u16 {
    if metrics.glyph_width(grapheme) > threshold * metrics.reference_width() {
        2
    } else {
        1
    }
}

/// Sum of [`display_columns`] over every grapheme in `text`.
#[must_use]
pub fn display_columns_of_str<M: GlyphMetrics + ?Sized>(
    metrics: &M,
    text: &str,
    threshold: f64,
) -> u16 {
    use unicode_segmentation::UnicodeSegmentation;
    text.graphemes(true)
        .map(|grapheme| display_columns(metrics, grapheme, threshold))
        .fold(0_u16, u16::saturating_add)
}
