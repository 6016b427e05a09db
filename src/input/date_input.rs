use crate::input::{Input, InputBase, KeyResult};
use crate::span::Span;
use crate::terminal::{KeyCode, KeyModifiers};
use crate::theme::Theme;

const SEPARATOR: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentType {
    Year,
    Month,
    Day,
}

impl SegmentType {
    fn min_value(&self) -> u32 {
        match self {
            SegmentType::Year => 1900,
            SegmentType::Month | SegmentType::Day => 1,
        }
    }

    fn max_value(&self) -> u32 {
        match self {
            SegmentType::Year => 2100,
            SegmentType::Month => 12,
            SegmentType::Day => 31,
        }
    }

    fn length(&self) -> usize {
        match self {
            SegmentType::Year => 4,
            _ => 2,
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            SegmentType::Year => "yyyy",
            SegmentType::Month => "mm",
            SegmentType::Day => "dd",
        }
    }
}

#[derive(Debug, Clone)]
struct DateSegment {
    segment_type: SegmentType,
    value: String,
}

impl DateSegment {
    fn new(segment_type: SegmentType) -> Self {
        Self {
            segment_type,
            value: String::new(),
        }
    }

    fn is_complete(&self) -> bool {
        self.value.len() == self.segment_type.length()
    }

    fn numeric_value(&self) -> u32 {
        self.value.parse().unwrap_or(0)
    }

    fn set_numeric(&mut self, value: u32) {
        self.value = format!("{:0width$}", value, width = self.segment_type.length());
    }

    fn increment(&mut self) {
        let current = self.numeric_value();
        let (min, max) = (self.segment_type.min_value(), self.segment_type.max_value());
        let next = if current >= max || current < min {
            min
        } else {
            current + 1
        };
        self.set_numeric(next);
    }

    fn decrement(&mut self) {
        let current = self.numeric_value();
        let (min, max) = (self.segment_type.min_value(), self.segment_type.max_value());
        let prev = if current <= min || current > max {
            max
        } else {
            current - 1
        };
        self.set_numeric(prev);
    }

    /// Returns true once the segment is full.
    fn insert_digit(&mut self, digit: char) -> bool {
        if self.value.len() >= self.segment_type.length() {
            self.value.clear();
        }
        self.value.push(digit);
        if self.segment_type == SegmentType::Year {
            return self.is_complete();
        }
        let max = self.segment_type.max_value();
        if self.numeric_value() > max {
            self.value = digit.to_string();
        }
        // "00" is never a month or day; keep waiting for a non-zero digit.
        if self.is_complete() && self.numeric_value() < self.segment_type.min_value() {
            self.value = digit.to_string();
        }
        // A leading digit that cannot take a second one is zero-padded.
        if !self.is_complete() && self.numeric_value() * 10 > max {
            self.set_numeric(self.numeric_value());
        }
        self.is_complete()
    }

    fn display_string(&self) -> (String, String) {
        let placeholder = self.segment_type.placeholder();
        let filled = self.value.clone();
        let rest = placeholder[self.value.len().min(placeholder.len())..].to_string();
        (filled, rest)
    }
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Segmented `YYYY-MM-DD` editor. Its value stays empty until every segment
/// is complete and the date exists.
pub struct DateInput {
    base: InputBase,
    segments: Vec<DateSegment>,
    focused_segment: usize,
}

impl DateInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id).with_min_width(10),
            segments: vec![
                DateSegment::new(SegmentType::Year),
                DateSegment::new(SegmentType::Month),
                DateSegment::new(SegmentType::Day),
            ],
            focused_segment: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.segments.iter().all(DateSegment::is_complete)
    }

    /// Calendar check on the filled segments, leap years included.
    fn is_existing_date(&self) -> bool {
        let [year, month, day] = [0, 1, 2].map(|idx| self.segments[idx].numeric_value());
        year > 0 && (1..=12).contains(&month) && day >= 1 && day <= days_in_month(year, month)
    }

    pub fn focused_segment(&self) -> usize {
        self.focused_segment
    }

    fn clear(&mut self) {
        for segment in &mut self.segments {
            segment.value.clear();
        }
        self.focused_segment = 0;
    }

    fn move_left(&mut self) {
        self.focused_segment = self.focused_segment.saturating_sub(1);
    }

    fn move_right(&mut self) {
        if self.focused_segment + 1 < self.segments.len() {
            self.focused_segment += 1;
        }
    }

    fn handle_digit(&mut self, digit: char) {
        let full = self.segments[self.focused_segment].insert_digit(digit);
        if full {
            self.move_right();
        }
    }

    fn handle_backspace(&mut self) {
        if self.segments[self.focused_segment].value.is_empty() {
            self.move_left();
        }
        self.segments[self.focused_segment].value.pop();
    }
}

impl Input for DateInput {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn value(&self) -> String {
        if !self.is_complete() || !self.is_existing_date() {
            return String::new();
        }
        self.segments
            .iter()
            .map(|s| s.value.as_str())
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }

    fn set_value(&mut self, value: String) {
        self.clear();
        let parts: Vec<&str> = value.trim().split(SEPARATOR).collect();
        if parts.len() != self.segments.len() {
            return;
        }
        let valid = parts.iter().zip(&self.segments).all(|(part, segment)| {
            part.len() == segment.segment_type.length() && part.chars().all(|c| c.is_ascii_digit())
        });
        if !valid {
            return;
        }
        for (part, segment) in parts.iter().zip(self.segments.iter_mut()) {
            segment.value = (*part).to_string();
        }
        self.focused_segment = self.segments.len() - 1;
    }

    fn placeholder(&self) -> Option<&str> {
        None
    }

    fn min_width(&self) -> usize {
        self.base.min_width
    }

    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                self.handle_digit(ch);
                KeyResult::Handled
            }
            KeyCode::Char('-') | KeyCode::Char('/') | KeyCode::Right => {
                self.move_right();
                KeyResult::Handled
            }
            KeyCode::Left => {
                self.move_left();
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.focused_segment = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.focused_segment = self.segments.len() - 1;
                KeyResult::Handled
            }
            KeyCode::Up => {
                self.segments[self.focused_segment].increment();
                KeyResult::Handled
            }
            KeyCode::Down => {
                self.segments[self.focused_segment].decrement();
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                self.handle_backspace();
                KeyResult::Handled
            }
            KeyCode::Delete => {
                self.segments[self.focused_segment].value.clear();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            KeyCode::Char(_) => KeyResult::Handled,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self, theme: &Theme) -> Vec<Span> {
        let mut spans = Vec::new();
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::new(SEPARATOR));
            }
            let (filled, rest) = segment.display_string();
            spans.push(Span::new(filled));
            spans.push(Span::styled(rest, theme.placeholder));
        }
        spans
    }

    fn cursor_offset_in_content(&self) -> usize {
        let before: usize = self.segments[..self.focused_segment]
            .iter()
            .map(|s| s.segment_type.length() + SEPARATOR.len())
            .sum();
        let current = &self.segments[self.focused_segment];
        before + current.value.len().min(current.segment_type.length() - 1)
    }

    fn delete_word(&mut self) {
        self.segments[self.focused_segment].value.clear();
        self.move_left();
    }
}
