//! Horizontal and vertical text layout.
//!
//! Layout is pure: it returns glyph placements and the advanced cursor, and painting is a
//! separate step. All gaps are fixed pixel amounts.

use image::RgbImage;

use crate::design::model::TextAlign;
use crate::foundation::core::Rgb8;
use crate::foundation::math::align_offset;
use crate::text::font::{Face, GlyphStyle};
use crate::text::zone::TextZone;

/// Subtracted from the zone width to get the wrap width.
pub const WRAP_PADDING: i64 = 20;
/// Indent of left-aligned horizontal lines.
pub const LEFT_PADDING: i64 = 10;
/// Gap added below each horizontal line and each vertical row.
pub const LINE_GAP: i64 = 8;
/// Gap that follows a vertical block.
pub const BLOCK_GAP: i64 = 20;
/// Characters per vertical column.
pub const MAX_CHARS_PER_COLUMN: usize = 10;
/// Vertical columns per block.
pub const MAX_COLUMNS: usize = 3;
/// Characters a vertical block can hold before truncation.
pub const MAX_VERTICAL_CHARS: usize = MAX_CHARS_PER_COLUMN * MAX_COLUMNS;
/// Lower bound on the horizontal distance between vertical columns.
pub const MIN_COLUMN_PITCH: i64 = 12;

/// One character at its text-box origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedGlyph {
    /// Character.
    pub ch: char,
    /// Left of the text box.
    pub x: i64,
    /// Top of the text box.
    pub y: i64,
}

/// Result of laying out one horizontal block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HorizontalLayout {
    /// Wrapped lines in order.
    pub lines: Vec<String>,
    /// Glyph placements.
    pub glyphs: Vec<PlacedGlyph>,
    /// Cursor below the last line.
    pub next_y: i64,
}

/// Result of laying out one vertical block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerticalLayout {
    /// Number of columns used.
    pub columns: usize,
    /// Glyph placements, column by column, top to bottom.
    pub glyphs: Vec<PlacedGlyph>,
    /// Characters cut by the column budget.
    pub dropped: usize,
    /// Cursor below the tallest column plus [`BLOCK_GAP`].
    pub next_y: i64,
}

/// Greedy character-granular wrap.
///
/// Characters are appended while the line stays within `max_width`; the first character that
/// overflows starts the next line. A newline always ends the current line.
pub fn wrap_lines(text: &str, face: &Face<'_>, max_width: i64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_w = 0i64;

    for ch in text.chars() {
        match ch {
            '\r' => continue,
            '\n' => {
                lines.push(std::mem::take(&mut current));
                current_w = 0;
                continue;
            }
            _ => {}
        }
        let adv = i64::from(face.advance(ch));
        if current_w + adv <= max_width {
            current.push(ch);
            current_w += adv;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push(ch);
            current_w = adv;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Lay out `text` as wrapped rows starting at `y`.
pub fn layout_horizontal(
    text: &str,
    zone: &TextZone,
    y: i64,
    face: &Face<'_>,
    align: TextAlign,
) -> HorizontalLayout {
    let lines = wrap_lines(text, face, zone.width - WRAP_PADDING);
    let pitch = i64::from(face.px()) + LINE_GAP;
    let mut glyphs = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let line_w = i64::from(face.measure(line));
        let mut x = match align {
            TextAlign::Left => zone.x_start + LEFT_PADDING,
            TextAlign::Center | TextAlign::Right => {
                zone.x_start + align_offset(zone.width, line_w, align)
            }
        };
        let line_y = y + i as i64 * pitch;
        for ch in line.chars() {
            glyphs.push(PlacedGlyph { ch, x, y: line_y });
            x += i64::from(face.advance(ch));
        }
    }

    HorizontalLayout {
        next_y: y + lines.len() as i64 * pitch,
        lines,
        glyphs,
    }
}

/// Lay out `text` as top-to-bottom columns placed left to right, starting at `y`.
///
/// Control characters are ignored. At most [`MAX_VERTICAL_CHARS`] characters are placed; the
/// rest are reported in [`VerticalLayout::dropped`].
pub fn layout_vertical(
    text: &str,
    zone: &TextZone,
    y: i64,
    face: &Face<'_>,
    align: TextAlign,
) -> VerticalLayout {
    let chars: Vec<char> = text.chars().filter(|c| !c.is_control()).collect();
    let total = chars.len();
    let kept = total.min(MAX_VERTICAL_CHARS);
    let dropped = total - kept;

    let columns = if kept == 0 {
        0
    } else {
        kept.div_ceil(MAX_CHARS_PER_COLUMN).clamp(1, MAX_COLUMNS)
    };
    let px = i64::from(face.px());
    let row_pitch = px + LINE_GAP;
    let col_pitch = px.max(MIN_COLUMN_PITCH);
    let block_w = columns as i64 * col_pitch;
    let x0 = zone.x_start + align_offset(zone.width, block_w, align);

    let glyphs = chars[..kept]
        .chunks(MAX_CHARS_PER_COLUMN)
        .enumerate()
        .flat_map(move |(col, column)| {
            column.iter().enumerate().map(move |(row, &ch)| PlacedGlyph {
                ch,
                x: x0 + col as i64 * col_pitch,
                y: y + row as i64 * row_pitch,
            })
        })
        .collect();

    let rows = kept.min(MAX_CHARS_PER_COLUMN) as i64;
    VerticalLayout {
        columns,
        glyphs,
        dropped,
        next_y: y + rows * row_pitch + BLOCK_GAP,
    }
}

/// Paint placed glyphs onto `surface`.
pub fn draw_glyphs(
    surface: &mut RgbImage,
    face: &Face<'_>,
    glyphs: &[PlacedGlyph],
    color: Rgb8,
    style: GlyphStyle,
) {
    for g in glyphs {
        face.draw(surface, g.ch, g.x, g.y, color, style);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
