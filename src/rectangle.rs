//! Box-drawing rectangle rendering.

use core::fmt::{self, Write};

use alloc::string::{String, ToString};

use crate::error::RectangleError;

/// Glyphs used to draw a rectangle outline.
///
/// ```
/// use strkit::{BoxGlyphs, Rectangle};
///
/// let rect = Rectangle::new(3, 2)?.with_glyphs(BoxGlyphs::ASCII);
/// assert_eq!(rect.render(), "+-+\n+-+\n");
/// # Ok::<(), strkit::RectangleError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxGlyphs {
    /// Top-left corner.
    pub top_left: char,
    /// Top-right corner.
    pub top_right: char,
    /// Bottom-left corner.
    pub bottom_left: char,
    /// Bottom-right corner.
    pub bottom_right: char,
    /// Top and bottom edges.
    pub horizontal: char,
    /// Left and right edges.
    pub vertical: char,
    /// Interior cells.
    pub fill: char,
}

impl BoxGlyphs {
    /// Light box-drawing lines.
    pub const LIGHT: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
        fill: ' ',
    };

    /// Heavy box-drawing lines.
    pub const HEAVY: Self = Self {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
        fill: ' ',
    };

    /// Double box-drawing lines.
    pub const DOUBLE: Self = Self {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
        fill: ' ',
    };

    /// Plain ASCII outline.
    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
        fill: ' ',
    };

    /// Sets the interior fill character.
    #[must_use]
    pub const fn with_fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }
}

impl Default for BoxGlyphs {
    fn default() -> Self {
        Self::LIGHT
    }
}

/// A rectangle outline of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    width: usize,
    height: usize,
    glyphs: BoxGlyphs,
}

impl Rectangle {
    /// Creates a rectangle drawn with the light glyph set.
    ///
    /// # Errors
    ///
    /// Returns [`RectangleError::InvalidDimension`] if `width` or `height`
    /// is less than 2.
    pub fn new(width: usize, height: usize) -> Result<Self, RectangleError> {
        if width < 2 || height < 2 {
            tracing::debug!(width, height, "rejected rectangle dimensions");
            return Err(RectangleError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            glyphs: BoxGlyphs::LIGHT,
        })
    }

    /// Sets the glyph set.
    #[must_use]
    pub const fn with_glyphs(mut self, glyphs: BoxGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Returns the width in characters.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in lines.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the glyph set.
    #[must_use]
    pub const fn glyphs(&self) -> BoxGlyphs {
        self.glyphs
    }

    /// Returns the glyph drawn at `row`, `col`.
    #[must_use]
    pub const fn char_at(&self, row: usize, col: usize) -> char {
        let g = &self.glyphs;
        let top = row == 0;
        let bottom = row >= self.height.saturating_sub(1);
        let left = col == 0;
        let right = col >= self.width.saturating_sub(1);

        match (top, bottom, left, right) {
            (true, _, true, _) => g.top_left,
            (true, _, _, true) => g.top_right,
            (_, true, true, _) => g.bottom_left,
            (_, true, _, true) => g.bottom_right,
            (true, _, _, _) | (_, true, _, _) => g.horizontal,
            (_, _, true, _) | (_, _, _, true) => g.vertical,
            _ => g.fill,
        }
    }

    /// Renders the rectangle, one newline-terminated line per row.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                f.write_char(self.char_at(row, col))?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// Returns the light-set glyph at `row`, `col` of a `width` x `height`
/// rectangle.
#[must_use]
pub const fn char_at(row: usize, col: usize, width: usize, height: usize) -> char {
    Rectangle {
        width,
        height,
        glyphs: BoxGlyphs::LIGHT,
    }
    .char_at(row, col)
}

/// Renders a `width` x `height` rectangle outline with light box-drawing
/// glyphs.
///
/// ```
/// assert_eq!(strkit::render_rectangle(2, 2)?, "┌┐\n└┘\n");
/// # Ok::<(), strkit::RectangleError>(())
/// ```
///
/// # Errors
///
/// Returns [`RectangleError::InvalidDimension`] if `width` or `height` is
/// less than 2.
pub fn render_rectangle(width: usize, height: usize) -> Result<String, RectangleError> {
    Rectangle::new(width, height).map(|rect| rect.render())
}
