//! Drawing surface abstraction
//!
//! The scene only ever talks to a `Surface`: a 2D immediate-mode context with
//! a save/restore transform stack, alpha blending and drop shadows. The
//! browser canvas implements it for real; `CommandBuffer` records the calls
//! for headless runs and tests.

use glam::Vec2;

use super::paint::{Paint, Rgba};

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Font and alignment for `fill_text`
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// CSS font shorthand
    pub font: String,
    pub align: TextAlign,
}

/// 2D immediate-mode drawing target
pub trait Surface {
    /// Push transform, fill and shadow state
    fn save(&mut self);
    /// Pop back to the last `save`
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, angle: f32);

    fn set_fill(&mut self, paint: &Paint);
    /// Shadow applied to subsequent fills (blur 0 disables it)
    fn set_shadow(&mut self, color: Rgba, blur: f32);

    fn fill_rect(&mut self, origin: Vec2, size: Vec2);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32);
    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);
}

/// One recorded `Surface` call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    SetFill(Paint),
    SetShadow { color: Rgba, blur: f32 },
    FillRect { origin: Vec2, size: Vec2 },
    FillCircle { center: Vec2, radius: f32 },
    FillEllipse { center: Vec2, radii: Vec2, rotation: f32 },
    FillText { text: String, pos: Vec2, style: TextStyle },
}

/// Surface that records every call
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Take the recorded frame, leaving the buffer empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of shapes (rects, circles, ellipses, text) drawn
    pub fn shape_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    DrawCommand::FillRect { .. }
                        | DrawCommand::FillCircle { .. }
                        | DrawCommand::FillEllipse { .. }
                        | DrawCommand::FillText { .. }
                )
            })
            .count()
    }

    /// Whether save/restore calls are balanced and never underflow
    pub fn is_balanced(&self) -> bool {
        let mut depth: i32 = 0;
        for command in &self.commands {
            match command {
                DrawCommand::Save => depth += 1,
                DrawCommand::Restore => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                _ => {}
            }
        }
        depth == 0
    }
}

impl Surface for CommandBuffer {
    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate(angle));
    }

    fn set_fill(&mut self, paint: &Paint) {
        self.commands.push(DrawCommand::SetFill(paint.clone()));
    }

    fn set_shadow(&mut self, color: Rgba, blur: f32) {
        self.commands.push(DrawCommand::SetShadow { color, blur });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::FillRect { origin, size });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::FillCircle { center, radius });
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32) {
        self.commands.push(DrawCommand::FillEllipse {
            center,
            radii,
            rotation,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            pos,
            style: style.clone(),
        });
    }
}
