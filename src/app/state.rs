use crate::config::AppConfig;
use crate::contact::form::{FormField, FormStatus};
use crate::contact::store::ContactStore;

/// Where keyboard input goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Name,
    Email,
    Message,
    Send,
}

impl Focus {
    pub fn field(self) -> Option<FormField> {
        match self {
            Focus::Name => Some(FormField::Name),
            Focus::Email => Some(FormField::Email),
            Focus::Message => Some(FormField::Message),
            Focus::Send => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Focus::Name => Focus::Email,
            Focus::Email => Focus::Message,
            Focus::Message => Focus::Send,
            Focus::Send => Focus::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Name => Focus::Send,
            Focus::Email => Focus::Name,
            Focus::Message => Focus::Email,
            Focus::Send => Focus::Message,
        }
    }
}

impl From<FormField> for Focus {
    fn from(field: FormField) -> Self {
        match field {
            FormField::Name => Focus::Name,
            FormField::Email => Focus::Email,
            FormField::Message => Focus::Message,
        }
    }
}

/// Cursor-aware editing over a borrowed field value.
///
/// `cursor` is a byte offset that always sits on a char boundary.
pub struct EditBuffer<'a> {
    pub text: &'a mut String,
    pub cursor: &'a mut usize,
}

impl EditBuffer<'_> {
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(*self.cursor, c);
        *self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if *self.cursor > 0 {
            let prev = self.text[..*self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..*self.cursor);
            *self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if *self.cursor < self.text.len() {
            let next = self.next_boundary();
            self.text.drain(*self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if *self.cursor > 0 {
            *self.cursor = self.text[..*self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if *self.cursor < self.text.len() {
            *self.cursor = self.next_boundary();
        }
    }

    /// Start of the current line.
    pub fn move_home(&mut self) {
        *self.cursor = self.line_start(*self.cursor);
    }

    /// End of the current line.
    pub fn move_end(&mut self) {
        *self.cursor = self.text[*self.cursor..]
            .find('\n')
            .map(|i| *self.cursor + i)
            .unwrap_or(self.text.len());
    }

    /// Move to the previous line, keeping the column where possible.
    /// Returns `false` when already on the first line.
    pub fn move_up(&mut self) -> bool {
        let start = self.line_start(*self.cursor);
        if start == 0 {
            return false;
        }
        let column = self.text[start..*self.cursor].chars().count();
        let prev_start = self.line_start(start - 1);
        *self.cursor = self.offset_in_line(prev_start, column);
        true
    }

    /// Move to the next line, keeping the column where possible.
    /// Returns `false` when already on the last line.
    pub fn move_down(&mut self) -> bool {
        let start = self.line_start(*self.cursor);
        let Some(nl) = self.text[*self.cursor..].find('\n') else {
            return false;
        };
        let column = self.text[start..*self.cursor].chars().count();
        let next_start = *self.cursor + nl + 1;
        *self.cursor = self.offset_in_line(next_start, column);
        true
    }

    pub fn delete_word_back(&mut self) {
        if *self.cursor == 0 {
            return;
        }
        let bytes = self.text.as_bytes();
        let mut pos = *self.cursor;
        // Skip trailing whitespace
        while pos > 0 && bytes[pos - 1].is_ascii_whitespace() {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && !bytes[pos - 1].is_ascii_whitespace() {
            pos -= 1;
        }
        self.text.drain(pos..*self.cursor);
        *self.cursor = pos;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        *self.cursor = 0;
    }

    fn next_boundary(&self) -> usize {
        self.text[*self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| *self.cursor + i)
            .unwrap_or(self.text.len())
    }

    fn line_start(&self, pos: usize) -> usize {
        self.text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn offset_in_line(&self, line_start: usize, column: usize) -> usize {
        let line_end = self.text[line_start..]
            .find('\n')
            .map(|i| line_start + i)
            .unwrap_or(self.text.len());
        self.text[line_start..line_end]
            .char_indices()
            .nth(column)
            .map(|(i, _)| line_start + i)
            .unwrap_or(line_end)
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub store: ContactStore,
    pub focus: Focus,
    /// Byte offsets of the cursor in each field. View-local, never sent.
    cursors: [usize; 3],
    pub should_quit: bool,
    pub dirty: bool,
    /// One-shot hint shown in the status bar (validation failures).
    pub status_message: Option<String>,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            store: ContactStore::new(),
            focus: Focus::Name,
            cursors: [0; 3],
            should_quit: false,
            dirty: true,
            status_message: None,
            tick_count: 0,
        }
    }

    /// Cursor of `field`, clamped to the store's current value.
    pub fn cursor(&self, field: FormField) -> usize {
        let text = self.store.form_data().field(field);
        let mut pos = self.cursors[cursor_index(field)].min(text.len());
        while !text.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    /// Apply one edit to `field`: copy the whole record, change that field,
    /// and write the record back to the store.
    pub fn edit_field<R>(&mut self, field: FormField, edit: impl FnOnce(&mut EditBuffer<'_>) -> R) -> R {
        let mut data = self.store.form_data().clone();
        let mut cursor = self.cursor(field);
        let result = {
            let mut buffer = EditBuffer {
                text: data.field_mut(field),
                cursor: &mut cursor,
            };
            edit(&mut buffer)
        };
        self.cursors[cursor_index(field)] = cursor;
        self.store.set_form_data(data);
        self.dirty = true;
        result
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            self.focus = focus;
            self.dirty = true;
        }
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        match self.store.form_status() {
            FormStatus::Loading => "Sending message...".to_string(),
            FormStatus::Success => "Message sent".to_string(),
            FormStatus::Error => "Sending failed".to_string(),
            FormStatus::None => "Ready".to_string(),
        }
    }
}

fn cursor_index(field: FormField) -> usize {
    match field {
        FormField::Name => 0,
        FormField::Email => 1,
        FormField::Message => 2,
    }
}
