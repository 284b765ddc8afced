use super::Paginator;
use crate::canvas::Canvas;
use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::units::Pt;

/// Greedy line builder for [wrap_text]
struct LineBreaker<'a, M: Fn(&str) -> Pt> {
    measure: &'a M,
    available: Pt,
    lines: Vec<String>,
    current: String,
    /// the current line holds the tail of a character-split word
    sealed: bool,
}

impl<M: Fn(&str) -> Pt> LineBreaker<'_, M> {
    fn close_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
        self.sealed = false;
    }

    fn push_word(&mut self, word: &str) {
        if self.sealed {
            self.close_line();
        }

        let candidate = if self.current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", self.current, word)
        };

        if (self.measure)(&candidate) <= self.available {
            self.current = candidate;
        } else if !self.current.is_empty() {
            // try again on a line of its own
            self.close_line();
            self.push_word(word);
        } else {
            self.push_chars(word);
        }
    }

    /// Packs a word that is too wide for a whole line one character at a time.
    /// The line holding the last fragment is sealed so the next word starts fresh.
    fn push_chars(&mut self, word: &str) {
        let mut buf = [0u8; 4];
        for ch in word.chars() {
            let single: &str = ch.encode_utf8(&mut buf);
            if (self.measure)(single) > self.available {
                log::debug!("skipping {ch:?}: wider than the whole line");
                continue;
            }

            let candidate = format!("{}{}", self.current, ch);
            if (self.measure)(&candidate) <= self.available {
                self.current = candidate;
            } else {
                self.close_line();
                self.current.push(ch);
            }
        }

        self.sealed = !self.current.is_empty();
    }
}

/// Breaks `text` into lines no wider than `available`, as measured by `measure`.
///
/// Words are separated by spaces and tabs and packed greedily, one space apart.
/// A newline always ends the current line; a newline with nothing pending
/// produces an empty line, so `"a\n\nb"` becomes `["a", "", "b"]`.
///
/// A word that doesn't fit even on an empty line is split between characters
/// instead, and its pieces never share a line with another word. Characters
/// wider than the whole line are dropped.
pub fn wrap_text<M: Fn(&str) -> Pt>(text: &str, available: Pt, measure: M) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    // normalize newlines
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut breaker = LineBreaker {
        measure: &measure,
        available,
        lines: Vec::new(),
        current: String::new(),
        sealed: false,
    };

    for (i, segment) in text.split('\n').enumerate() {
        if i > 0 {
            // the newline that ended the previous segment
            breaker.close_line();
        }
        for word in segment.split([' ', '\t']).filter(|w| !w.is_empty()) {
            breaker.push_word(word);
        }
    }

    if !breaker.current.is_empty() {
        breaker.close_line();
    }

    breaker.lines
}

/// Flows `text` down the page in the body font, left-aligned at the left
/// margin, starting new pages as the cursor reaches the bottom margin.
pub fn flow_text<C: Canvas>(
    paginator: &mut Paginator,
    canvas: &mut C,
    config: &LayoutConfig,
    text: &str,
) -> Result<(), LayoutError> {
    if text.is_empty() {
        return Ok(());
    }

    let size = config.font_size;
    paginator.set_font_size(canvas, size);

    let lines = wrap_text(text, paginator.available_width(), |s| {
        canvas.text_width(s, size)
    });

    for line in lines.iter() {
        paginator.ensure_room(canvas, Pt(0.0))?;

        let cursor = paginator.cursor();
        canvas.begin_text();
        canvas.draw_text_at(paginator.margins().left, cursor.y, line);
        canvas.end_text();

        paginator.advance(config.line_advance());
    }

    Ok(())
}
