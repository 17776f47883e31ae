//! Text layout
//!
//! Characters are rendered straight into display RAM: each one is the
//! 5-column glyph from [`crate::font`] followed by a blank spacer column, so a
//! character is 6 columns wide and one page (8 rows) tall.
//!
//! Strings are laid out by a small cursor automaton ([`Cursor::next_char`]):
//! after each character the column advances by 6; once it reaches the right
//! edge the cursor moves to column 0 of the next page, and past the last page
//! it starts over at page 0. There is no scrolling, older text is simply
//! overwritten.
//!
//! ## Example
//!
//! ```
//! use ssd1306_text::Cursor;
//!
//! let cursor = Cursor::new(120, 7);
//! assert_eq!(cursor.next_char(), Cursor::new(126, 7));
//! // 132 is past the edge: wrap to the next page, which wraps to the top
//! assert_eq!(cursor.next_char().next_char(), Cursor::new(0, 0));
//! ```

use crate::config::{PAGES, WIDTH};
use crate::display::{Display, DisplayResult};
use crate::font::{self, CHAR_ADVANCE};
use crate::interface::DisplayInterface;

/// A position in display RAM: column `x` (0..128) within page `page` (0..8)
///
/// Always in bounds; constructors wrap instead of failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    x: u8,
    page: u8,
}

impl Cursor {
    /// Top-left corner
    pub const ORIGIN: Self = Self { x: 0, page: 0 };

    /// Create a cursor, wrapping `x` modulo 128 and `page` modulo 8
    pub const fn new(x: u8, page: u8) -> Self {
        Self {
            x: x % WIDTH,
            page: page % PAGES,
        }
    }

    /// Column
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Page
    pub const fn page(self) -> u8 {
        self.page
    }

    /// Position after one data byte in horizontal addressing mode
    pub const fn next_column(self) -> Self {
        if self.x + 1 >= WIDTH {
            Self::new(0, self.page + 1)
        } else {
            Self::new(self.x + 1, self.page)
        }
    }

    /// Position after one rendered character
    ///
    /// A character that would start at or past column 128 starts the next
    /// page instead; a partial character is never split across pages.
    pub const fn next_char(self) -> Self {
        let x = self.x + CHAR_ADVANCE;
        if x >= WIDTH {
            Self::new(0, self.page + 1)
        } else {
            Self::new(x, self.page)
        }
    }
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Render `ch` with its top-left corner at column `x` of `page`
    ///
    /// Addresses the position, then writes the 5 glyph columns and one blank
    /// column. Characters outside `' '..='~'` render as a space.
    ///
    /// Bytes are sent whether or not [`initialize`](Self::initialize) has
    /// succeeded; check [`is_initialized`](Self::is_initialized) first when
    /// driving a bare `Display`.
    pub fn draw_char(&mut self, x: u8, page: u8, ch: char) -> DisplayResult<I> {
        self.set_cursor(x, page)?;
        for &column in font::lookup(ch) {
            self.write_data(column)?;
        }
        self.write_data(0x00)
    }

    /// Render `s` starting at column `x` of `page`, wrapping at the right edge
    ///
    /// The write pointer is re-addressed after every character, wrapped or
    /// not, and is left at the position following the last character. Since
    /// each character also addresses itself, every character after the first
    /// is preceded by two identical `set_cursor` sequences. Like
    /// [`draw_char`](Self::draw_char), this does not check
    /// [`is_initialized`](Self::is_initialized).
    pub fn draw_string(&mut self, x: u8, page: u8, s: &str) -> DisplayResult<I> {
        let mut cursor = Cursor::new(x, page);
        for ch in s.chars() {
            self.draw_char(cursor.x(), cursor.page(), ch)?;
            cursor = cursor.next_char();
            self.set_cursor(cursor.x(), cursor.page())?;
        }
        Ok(())
    }

    /// Render `s` at the current write pointer
    ///
    /// Consecutive calls continue where the previous string ended.
    pub fn print(&mut self, s: &str) -> DisplayResult<I> {
        let cursor = self.cursor();
        self.draw_string(cursor.x(), cursor.page(), s)
    }
}
