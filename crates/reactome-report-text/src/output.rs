//! Styled text fragments handed to the layout engine.
//!
//! Formatting code never talks to the layout engine directly. It produces an
//! immutable, ordered [`Fragments`] list, and only at the very end is that
//! list appended to a [`StyledTextSink`] (a paragraph in the document being
//! assembled). This keeps every formatting rule testable as plain data.

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Italic,
}

/// Vertical alignment.
///
/// `Superscript` is raised, smaller text (affiliation indices).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Superscript,
}

/// Style markers carried by a fragment. `None` means the surrounding style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatting {
    pub font_style: Option<FontStyle>,
    pub vertical_align: Option<VerticalAlign>,
}

impl Formatting {
    pub fn italic() -> Self {
        Self {
            font_style: Some(FontStyle::Italic),
            ..Default::default()
        }
    }

    pub fn superscript() -> Self {
        Self {
            vertical_align: Some(VerticalAlign::Superscript),
            ..Default::default()
        }
    }

    /// True when no marker changes how the text looks.
    pub fn is_plain(&self) -> bool {
        self.font_style.is_none() && self.vertical_align.is_none()
    }
}

/// A piece of formatted output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// The text content.
    pub text: String,
    /// Applied formatting.
    pub formatting: Formatting,
}

impl Fragment {
    /// Create a fragment with default formatting.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            formatting: Formatting::default(),
        }
    }

    /// Create a fragment with specific formatting.
    pub fn with_formatting(text: impl Into<String>, formatting: Formatting) -> Self {
        Self {
            text: text.into(),
            formatting,
        }
    }
}

/// The external styled-text sink (a paragraph-like container).
///
/// Implementations receive fragments in order and own whatever layout object
/// they build from them.
pub trait StyledTextSink {
    /// Append unstyled text.
    fn push_text(&mut self, text: &str);

    /// Append text carrying style markers.
    fn push_styled(&mut self, text: &str, formatting: &Formatting);
}

/// Plain-text sink: styles are dropped.
impl StyledTextSink for String {
    fn push_text(&mut self, text: &str) {
        self.push_str(text);
    }

    fn push_styled(&mut self, text: &str, _formatting: &Formatting) {
        self.push_str(text);
    }
}

/// An ordered, immutable list of fragments. Never contains empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    pieces: Vec<Fragment>,
}

impl Fragments {
    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.pieces.iter()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Append every fragment to `sink`, in order.
    pub fn write_to<S: StyledTextSink + ?Sized>(&self, sink: &mut S) {
        for piece in &self.pieces {
            if piece.formatting.is_plain() {
                sink.push_text(&piece.text);
            } else {
                sink.push_styled(&piece.text, &piece.formatting);
            }
        }
    }

    /// Concatenated text with styles dropped.
    pub fn to_plain_text(&self) -> String {
        let mut text = String::new();
        self.write_to(&mut text);
        text
    }

    /// Concatenated text with markdown-style markers (`*italic*`, `^sup^`).
    pub fn to_markdown(&self) -> String {
        self.pieces
            .iter()
            .map(|piece| apply_formatting(&piece.text, &piece.formatting))
            .collect()
    }
}

impl FromIterator<Fragment> for Fragments {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Self {
            pieces: iter.into_iter().filter(|f| !f.text.is_empty()).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Fragments {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.iter()
    }
}

/// Local accumulator used while formatting one item; yields [`Fragments`].
#[derive(Debug, Default)]
pub(crate) struct FragmentsBuilder {
    pieces: Vec<Fragment>,
}

impl FragmentsBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add plain text.
    pub(crate) fn push(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.pieces.push(Fragment::new(text));
        }
    }

    /// Add formatted text.
    pub(crate) fn push_formatted(&mut self, text: impl Into<String>, formatting: Formatting) {
        let text = text.into();
        if !text.is_empty() {
            self.pieces.push(Fragment::with_formatting(text, formatting));
        }
    }

    pub(crate) fn build(self) -> Fragments {
        Fragments {
            pieces: self.pieces,
        }
    }
}

fn apply_formatting(text: &str, formatting: &Formatting) -> String {
    let mut result = text.to_string();

    if let Some(FontStyle::Italic) = formatting.font_style {
        result = format!("*{}*", result);
    }

    if let Some(VerticalAlign::Superscript) = formatting.vertical_align {
        result = format!("^{}^", result);
    }

    result
}
