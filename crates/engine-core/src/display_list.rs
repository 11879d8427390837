use crate::scene::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    DrawText { run: TextRun, z: i32, transform: Transform2D },
    /// Stroked open path (solid color only).
    StrokePath {
        path: Path,
        stroke: Stroke,
        color: ColorLinPremul,
        z: i32,
        transform: Transform2D,
    },
    PushTransform(Transform2D),
    PopTransform,
}

#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    pub viewport: Viewport,
    pub commands: Vec<Command>,
}

impl DisplayList {
    /// Text runs in record order.
    pub fn text_runs(&self) -> impl Iterator<Item = (&TextRun, &Transform2D)> {
        self.commands.iter().filter_map(|c| match c {
            Command::DrawText { run, transform, .. } => Some((run, transform)),
            _ => None,
        })
    }

    /// Stroked paths in record order.
    pub fn strokes(&self) -> impl Iterator<Item = (&Path, &Stroke, &ColorLinPremul, &Transform2D)> {
        self.commands.iter().filter_map(|c| match c {
            Command::StrokePath { path, stroke, color, transform, .. } => {
                Some((path, stroke, color, transform))
            }
            _ => None,
        })
    }
}
