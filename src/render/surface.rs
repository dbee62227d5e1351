use super::palette::Color;

/// A single primitive emitted by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: [f64; 2],
        to: [f64; 2],
        color: Color,
        width: f64,
    },
    Disc {
        center: [f64; 2],
        radius: f64,
        fill: Color,
    },
    /// Text centered both horizontally and vertically on `center`.
    Text {
        center: [f64; 2],
        text: String,
        color: Color,
        font_size: f64,
    },
}

/// A fixed-size 2D drawing target.
///
/// Coordinates are in surface units with the origin at the top-left corner
/// and y growing downward.
pub trait Surface {
    /// Returns `[width, height]`.
    fn size(&self) -> [f64; 2];

    /// Discards everything drawn so far and fills with `background`.
    fn clear(&mut self, background: Color);

    fn draw(&mut self, command: DrawCommand);
}

/// A [`Surface`] that records commands in order, for serialization or inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub width: f64,
    pub height: f64,
    pub background: Option<Color>,
    pub commands: Vec<DrawCommand>,
}

impl Drawing {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: None,
            commands: Vec::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn discs(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Disc { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
    }
}

impl Surface for Drawing {
    fn size(&self) -> [f64; 2] {
        [self.width, self.height]
    }

    fn clear(&mut self, background: Color) {
        self.commands.clear();
        self.background = Some(background);
    }

    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}
