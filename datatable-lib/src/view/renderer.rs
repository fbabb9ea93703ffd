//! The display surface a table draws into.

use super::RenderDescriptor;

/// A display surface that draws render descriptors.
///
/// The table holds its renderer for its whole life and hands it a fresh
/// descriptor after every state change. Implementations must treat each
/// descriptor as a full replacement of what is on screen.
///
/// Any `FnMut(&RenderDescriptor)` closure is a renderer:
///
/// ```
/// use datatable_lib::view::{RenderDescriptor, Renderer};
///
/// let mut frames = 0;
/// let mut renderer = |_view: &RenderDescriptor| frames += 1;
/// ```
pub trait Renderer {
    /// Draws one frame.
    fn render(&mut self, view: &RenderDescriptor);
}

impl<F> Renderer for F
where
    F: FnMut(&RenderDescriptor),
{
    fn render(&mut self, view: &RenderDescriptor) {
        self(view)
    }
}
