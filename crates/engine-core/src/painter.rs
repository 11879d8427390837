use crate::display_list::{Command, DisplayList, Viewport};
use crate::scene::*;

/// Records draw commands for one frame.
pub struct Painter {
    list: DisplayList,
    transform_stack: Vec<Transform2D>,
}

impl Painter {
    pub fn begin_frame(viewport: Viewport) -> Self {
        Self {
            list: DisplayList {
                viewport,
                commands: Vec::new(),
            },
            transform_stack: vec![Transform2D::identity()],
        }
    }

    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or_else(Transform2D::identity)
    }

    pub fn push_transform(&mut self, t: Transform2D) {
        // Compose with current transform so nested pushes multiply.
        let composed = self.current_transform().concat(t);
        self.list.commands.push(Command::PushTransform(composed));
        self.transform_stack.push(composed);
    }

    pub fn pop_transform(&mut self) {
        // The root identity is never popped.
        if self.transform_stack.len() > 1 {
            self.transform_stack.pop();
            self.list.commands.push(Command::PopTransform);
        }
    }

    pub fn text(&mut self, run: TextRun, z: i32) {
        let t = self.current_transform();
        self.list.commands.push(Command::DrawText {
            run,
            z,
            transform: t,
        });
    }

    /// Stroke a path with uniform width and a solid color.
    pub fn stroke_path(&mut self, path: Path, stroke: Stroke, color: ColorLinPremul, z: i32) {
        let t = self.current_transform();
        self.list.commands.push(Command::StrokePath {
            path,
            stroke,
            color,
            z,
            transform: t,
        });
    }

    pub fn line(
        &mut self,
        from: [f32; 2],
        to: [f32; 2],
        stroke: Stroke,
        color: ColorLinPremul,
        z: i32,
    ) {
        self.stroke_path(Path::segment(from, to), stroke, color, z);
    }

    pub fn finish(self) -> DisplayList {
        self.list
    }
}
