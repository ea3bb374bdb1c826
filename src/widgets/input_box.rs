use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Which characters an input box accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    /// ASCII digits only (phone numbers, minutes)
    Digits,
    /// Digits and a single decimal point (acreage)
    Decimal,
    /// Digits and `:` (time of day)
    Time,
}

impl InputKind {
    fn accepts(self, current: &str, c: char) -> bool {
        match self {
            InputKind::Text => !c.is_control(),
            InputKind::Digits => c.is_ascii_digit(),
            InputKind::Decimal => c.is_ascii_digit() || (c == '.' && !current.contains('.')),
            InputKind::Time => c.is_ascii_digit() || (c == ':' && !current.contains(':')),
        }
    }
}

/// A single-line text input with cursor handling and horizontal scrolling.
///
/// The cursor is a character index, so multi-byte scripts (Devanagari
/// names, village names) edit correctly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputBox {
    content: String,
    /// Cursor position as a character index
    cursor_position: usize,
    kind: InputKind,
    max_chars: Option<usize>,
}

impl InputBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_max_chars(mut self, max: usize) -> Self {
        self.max_chars = Some(max);
        self
    }

    /// Start with `content`, cursor at the end.
    pub fn with_content(mut self, content: &str) -> Self {
        self.set_content(content);
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor. Rejected characters are dropped.
    pub fn insert_char(&mut self, c: char) -> bool {
        if !self.kind.accepts(&self.content, c) {
            return false;
        }
        if self.max_chars.is_some_and(|max| self.char_count() >= max) {
            return false;
        }
        let at = self.byte_index(self.cursor_position);
        self.content.insert(at, c);
        self.cursor_position += 1;
        true
    }

    /// Delete the character under the cursor (Delete key)
    pub fn delete_char(&mut self) {
        if self.cursor_position < self.char_count() {
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    /// Delete the character before the cursor (Backspace key)
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.char_count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.char_count();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Replace the content and move the cursor to the end
    pub fn set_content(&mut self, content: &str) {
        self.content.clear();
        self.cursor_position = 0;
        for c in content.chars() {
            self.insert_char(c);
        }
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_position = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// True when the content has something other than whitespace.
    pub fn is_filled(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// Apply an editing key. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete_char();
                true
            }
            KeyCode::Left => {
                self.move_cursor_left();
                true
            }
            KeyCode::Right => {
                self.move_cursor_right();
                true
            }
            KeyCode::Home => {
                self.move_cursor_home();
                true
            }
            KeyCode::End => {
                self.move_cursor_end();
                true
            }
            _ => false,
        }
    }

    /// Render inside a bordered block titled `title`.
    pub fn render_with_title(
        &self,
        area: Rect,
        buf: &mut Buffer,
        title: &str,
        focused: bool,
        styles: InputStyles,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if focused { styles.focused_border } else { styles.border })
            .title(title.to_string());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let width = inner.width as usize;

        // Scroll so the cursor column stays visible
        let chars: Vec<char> = self.content.chars().collect();
        let mut start = 0;
        while display_width(&chars[start..self.cursor_position]) >= width && start < self.cursor_position {
            start += 1;
        }

        let mut x = inner.x;
        let right = inner.x + inner.width;
        for (i, c) in chars.iter().enumerate().skip(start) {
            let w = c.width().unwrap_or(0) as u16;
            if x + w.max(1) > right {
                break;
            }
            let style = if focused && i == self.cursor_position {
                styles.cursor
            } else {
                styles.text
            };
            buf.set_string(x, inner.y, c.to_string(), style);
            x += w;
        }

        if focused && self.cursor_position == chars.len() && x < right {
            buf.set_string(x, inner.y, " ", styles.cursor);
        }
    }
}

fn display_width(chars: &[char]) -> usize {
    chars.iter().map(|c| c.width().unwrap_or(0)).sum()
}

/// Colors for an input box, taken from the active palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputStyles {
    pub border: Style,
    pub focused_border: Style,
    pub text: Style,
    pub cursor: Style,
}

/// A renderable wrapper for InputBox that implements the Widget trait
pub struct InputBoxWidget<'a> {
    input_box: &'a InputBox,
    title: &'a str,
    focused: bool,
    styles: InputStyles,
}

impl<'a> InputBoxWidget<'a> {
    pub fn new(input_box: &'a InputBox, title: &'a str, focused: bool, styles: InputStyles) -> Self {
        Self {
            input_box,
            title,
            focused,
            styles,
        }
    }
}

impl Widget for InputBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.input_box
            .render_with_title(area, buf, self.title, self.focused, self.styles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_input_box() {
        let input = InputBox::new();
        assert!(input.is_empty());
        assert_eq!(input.cursor_position(), 0);
        assert_eq!(input.content(), "");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = InputBox::new().with_content("राम");
        assert_eq!(input.cursor_position(), 3);
        input.move_cursor_left();
        input.insert_char('x');
        assert_eq!(input.content(), "राxम");
        input.backspace();
        input.backspace();
        assert_eq!(input.content(), "रम");
    }

    #[test]
    fn test_digits_only() {
        let mut input = InputBox::new().with_kind(InputKind::Digits).with_max_chars(10);
        for c in "98a76-54321099".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.content(), "9876543210");
    }

    #[test]
    fn test_decimal_and_time_kinds() {
        let mut area = InputBox::new().with_kind(InputKind::Decimal);
        area.set_content("2.5.1");
        assert_eq!(area.content(), "2.51");

        let mut time = InputBox::new().with_kind(InputKind::Time);
        time.set_content("06:30:00");
        assert_eq!(time.content(), "06:3000");
    }

    #[test]
    fn test_handle_key_ignores_control_chords() {
        let mut input = InputBox::new();
        assert!(input.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)));
        assert!(!input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!input.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert_eq!(input.content(), "a");
    }

    #[test]
    fn test_render_shows_tail_when_scrolled() {
        let input = InputBox::new().with_content("abcdefghij");
        let area = Rect::new(0, 0, 7, 3);
        let mut buf = Buffer::empty(area);
        input.render_with_title(area, &mut buf, "t", true, InputStyles::default());
        // 5 columns inside the border, cursor cell at the end
        assert_eq!(buf[(1, 1)].symbol(), "g");
        assert_eq!(buf[(4, 1)].symbol(), "j");
    }
}
