//! Flow-layout primitives for the brochure exporter: deterministic text
//! wrapping and a page cursor that handles overflow onto new pages.

/// A4 geometry in PDF points.
pub const PAGE_WIDTH: f64 = 595.28;
pub const PAGE_HEIGHT: f64 = 841.89;
pub const MARGIN: f64 = 40.0;

/// Height of the branded band at the top of the first page.
pub const MASTHEAD_HEIGHT: f64 = 80.0;
/// Body cursor start on the first page, just below the masthead.
const FIRST_PAGE_TOP: f64 = 100.0;
/// Body cursor start on continuation pages.
const CONTINUATION_TOP: f64 = 60.0;
/// A section heading needs this much clearance so its first body lines are
/// never orphaned on the next page.
const HEADING_CLEARANCE: f64 = 140.0;
/// A single wrapped line needs this much clearance above the footer area.
const LINE_CLEARANCE: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// One positioned run of text. `y` measures down from the top of the page.
#[derive(Debug, Clone)]
pub struct TextSpan {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub weight: FontWeight,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub spans: Vec<TextSpan>,
}

/// Approximate advance width of Helvetica text at the given size. The table
/// only needs to be stable and roughly right; wrapping correctness depends on
/// determinism, not exact glyph metrics.
pub fn text_width(text: &str, font_size: f64) -> f64 {
    text.chars().map(char_width_factor).sum::<f64>() * font_size
}

fn char_width_factor(c: char) -> f64 {
    match c {
        'i' | 'j' | 'l' | '.' | ',' | '\'' | '!' | '|' | ':' | ';' => 0.30,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | '-' | '/' => 0.40,
        'm' | 'w' | 'M' | 'W' | '@' | '%' => 0.85,
        ' ' => 0.28,
        c if c.is_ascii_uppercase() => 0.70,
        c if c.is_ascii() => 0.52,
        // Devanagari and other non-Latin glyphs
        _ => 0.60,
    }
}

/// Greedy word wrap against `max_width`. Breaks only on whitespace; a word
/// wider than the limit gets a line of its own rather than being split.
/// Whitespace-only input yields no lines.
pub fn wrap_text(text: &str, max_width: f64, font_size: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate_width = text_width(&current, font_size)
            + text_width(" ", font_size)
            + text_width(word, font_size);
        if candidate_width <= max_width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Mutable layout cursor threaded through the block-rendering sequence: the
/// current page plus a top-down `y` offset. Overflow checks happen before a
/// heading and again before every wrapped line, so no line is ever cut in
/// half across a page boundary.
#[derive(Debug)]
pub struct PageBuilder {
    pages: Vec<Page>,
    y: f64,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            y: FIRST_PAGE_TOP,
        }
    }

    pub fn content_width() -> f64 {
        PAGE_WIDTH - 2.0 * MARGIN
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn current(&mut self) -> &mut Page {
        self.pages.last_mut().expect("builder always holds a page")
    }

    pub fn page_break(&mut self) {
        self.pages.push(Page::default());
        self.y = CONTINUATION_TOP;
    }

    fn ensure_heading_room(&mut self) {
        if self.y > PAGE_HEIGHT - HEADING_CLEARANCE {
            self.page_break();
        }
    }

    fn ensure_line_room(&mut self) {
        if self.y > PAGE_HEIGHT - LINE_CLEARANCE {
            self.page_break();
        }
    }

    /// Places text on the current page at an explicit position without
    /// touching the cursor. Used for the masthead and footer bands.
    pub fn place_absolute(&mut self, x: f64, y: f64, size: f64, weight: FontWeight, text: &str) {
        self.current().spans.push(TextSpan {
            x,
            y,
            size,
            weight,
            text: text.to_string(),
        });
    }

    pub fn advance(&mut self, dy: f64) {
        self.y += dy;
    }

    /// Draws one line at the cursor and advances by `leading`, breaking the
    /// page first when the cursor sits too close to the bottom.
    pub fn line(&mut self, x: f64, size: f64, weight: FontWeight, text: &str, leading: f64) {
        self.ensure_line_room();
        let y = self.y;
        self.place_absolute(x, y, size, weight, text);
        self.advance(leading);
    }

    /// Section heading in bold, with enough look-ahead clearance that the
    /// heading is never the last line on its page.
    pub fn heading(&mut self, text: &str) {
        self.ensure_heading_room();
        let y = self.y;
        self.place_absolute(MARGIN, y, 12.0, FontWeight::Bold, text);
        self.advance(18.0);
    }

    /// Wraps `text` to the remaining width at `x` and draws each line with
    /// its own overflow check.
    pub fn wrapped(&mut self, x: f64, size: f64, weight: FontWeight, text: &str, leading: f64) {
        let max_width = PAGE_WIDTH - MARGIN - x;
        for line in wrap_text(text, max_width, size) {
            self.line(x, size, weight, &line, leading);
        }
    }

    pub fn finish(self) -> Vec<Page> {
        self.pages
    }
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
