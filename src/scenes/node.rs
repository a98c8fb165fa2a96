use crate::foundation::{
    color::Rgba8,
    core::{Transform2D, Vec2},
};

/// Evaluated visual element: what a render host draws for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Node {
    /// Stable identifier, unique among siblings.
    pub key: String,
    /// Opacity in `[0, 1]`, multiplied into children by the host.
    pub opacity: f64,
    /// Local transform relative to the node's layout slot.
    #[serde(skip_serializing_if = "Transform2D::is_identity")]
    pub transform: Transform2D,
    /// What the node draws.
    pub content: Content,
    /// Child nodes in paint order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// Drawable payload of a [`Node`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Content {
    /// Container that lays out its children.
    Group {
        /// Main axis.
        direction: Direction,
        /// Space between children in pixels.
        gap_px: f64,
    },
    /// Single run of styled text.
    Text {
        /// Characters to draw.
        text: String,
        /// Font, size and color.
        style: TextStyle,
    },
    /// Rounded box behind its children.
    Panel {
        /// Fill color.
        fill: Rgba8,
        /// Border color.
        border: Rgba8,
        /// Corner radius in pixels.
        radius_px: f64,
    },
    /// Terminal window chrome (title bar with traffic lights); children form the body.
    Terminal {
        /// Title bar text.
        title: String,
    },
    /// Orchestra logo mark.
    Logo {
        /// Glow strength in `[0, 1]`.
        glow: f64,
    },
    /// Block text cursor.
    Cursor {
        /// Block color.
        color: Rgba8,
    },
    /// Selection checkbox.
    Checkbox {
        /// Whether the box is ticked.
        checked: bool,
        /// Tick and border color.
        color: Rgba8,
    },
    /// Horizontal progress bar.
    ProgressBar {
        /// Filled fraction in `[0, 1]`.
        progress: f64,
        /// Unfilled track color.
        track: Rgba8,
        /// Filled portion color.
        fill: Rgba8,
    },
}

/// Layout axis for groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Top to bottom.
    Column,
    /// Left to right.
    Row,
    /// Children stacked on top of each other.
    Overlay,
}

/// Font family used by a text run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Font {
    /// JetBrains Mono.
    Mono,
    /// Inter.
    Sans,
}

/// Text appearance.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TextStyle {
    /// Font family.
    pub font: Font,
    /// Font size in pixels.
    pub size_px: f64,
    /// CSS-style weight (400 regular, 700 bold).
    pub weight: u16,
    /// Text color.
    pub color: Rgba8,
    /// Extra spacing between glyphs in pixels.
    pub letter_spacing_px: f64,
    /// Render in upper case.
    pub uppercase: bool,
}

impl TextStyle {
    /// Regular monospace text.
    pub fn mono(size_px: f64, color: Rgba8) -> Self {
        Self {
            font: Font::Mono,
            size_px,
            weight: 400,
            color,
            letter_spacing_px: 0.0,
            uppercase: false,
        }
    }

    /// Sans-serif text at the given weight.
    pub fn sans(size_px: f64, weight: u16, color: Rgba8) -> Self {
        Self {
            font: Font::Sans,
            size_px,
            weight,
            color,
            letter_spacing_px: 0.0,
            uppercase: false,
        }
    }

    /// Same style in a different color.
    pub fn color(self, color: Rgba8) -> Self {
        Self { color, ..self }
    }

    /// Upper-cased with letter spacing.
    pub fn caps(self, letter_spacing_px: f64) -> Self {
        Self {
            uppercase: true,
            letter_spacing_px,
            ..self
        }
    }
}

impl Node {
    /// Fully opaque, untransformed node.
    pub fn new(key: impl Into<String>, content: Content) -> Self {
        Self {
            key: key.into(),
            opacity: 1.0,
            transform: Transform2D::default(),
            content,
            children: Vec::new(),
        }
    }

    /// Group laid out along `direction`.
    pub fn group(key: impl Into<String>, direction: Direction, gap_px: f64) -> Self {
        Self::new(key, Content::Group { direction, gap_px })
    }

    /// Text run.
    pub fn text(key: impl Into<String>, text: impl Into<String>, style: TextStyle) -> Self {
        Self::new(
            key,
            Content::Text {
                text: text.into(),
                style,
            },
        )
    }

    /// Set opacity. Values are clamped to `[0, 1]`; non-finite values hide the node.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = if opacity.is_finite() {
            opacity.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }

    /// Offset the node by `(x, y)` pixels.
    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.transform.translate = Vec2::new(x, y);
        self
    }

    /// Uniform scale around the node's center.
    pub fn scale(mut self, s: f64) -> Self {
        self.transform.scale = Vec2::new(s, s);
        self
    }

    /// Append one child.
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first search for a descendant (or self) with `key`.
    pub fn find(&self, key: &str) -> Option<&Node> {
        if self.key == key {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(key))
    }

    /// Text of a text node.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Concatenated text of this node and all descendants, in paint order.
    pub fn collect_text(&self) -> String {
        let mut out = String::new();
        self.visit(&mut |n| {
            if let Some(t) = n.text_content() {
                out.push_str(t);
            }
        });
        out
    }

    /// Visit this node and every descendant depth-first.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        for c in &self.children {
            c.visit(f);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/node.rs"]
mod tests;
