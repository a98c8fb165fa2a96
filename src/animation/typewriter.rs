/// Reveals a string a fixed number of characters per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter<'a> {
    text: &'a str,
    chars_per_frame: f64,
    len: usize,
}

impl<'a> Typewriter<'a> {
    /// `chars_per_frame` must be > 0; non-positive rates never reveal anything.
    pub fn new(text: &'a str, chars_per_frame: f64) -> Self {
        Self {
            text,
            chars_per_frame,
            len: text.chars().count(),
        }
    }

    /// Full target text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Target length in characters.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for an empty target.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Characters visible at `frame`: `min(len, floor(frame * chars_per_frame))`.
    pub fn revealed_chars(&self, frame: f64) -> usize {
        let raw = (frame.max(0.0) * self.chars_per_frame).floor();
        if !(raw.is_finite() && raw > 0.0) {
            return 0;
        }
        if raw >= self.len as f64 {
            self.len
        } else {
            raw as usize
        }
    }

    /// Visible prefix at `frame`.
    pub fn visible(&self, frame: f64) -> &'a str {
        let n = self.revealed_chars(frame);
        match self.text.char_indices().nth(n) {
            Some((byte, _)) => &self.text[..byte],
            None => self.text,
        }
    }

    /// True once every character is visible.
    pub fn is_complete(&self, frame: f64) -> bool {
        self.revealed_chars(frame) >= self.len
    }

    /// Frame at which typing finishes, `len / chars_per_frame`. May be fractional.
    pub fn completion_frame(&self) -> f64 {
        if self.chars_per_frame <= 0.0 {
            return f64::INFINITY;
        }
        self.len as f64 / self.chars_per_frame
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/typewriter.rs"]
mod tests;
