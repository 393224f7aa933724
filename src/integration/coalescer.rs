/// Frame work gathered during one loop iteration.
///
/// Any number of render requests collapse into one draw, and only the last
/// resize is applied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest {
    render: bool,
    resize: Option<(u16, u16)>,
}

impl FrameRequest {
    pub fn request_render(&mut self) {
        self.render = true;
    }

    pub fn resize_to(&mut self, width: u16, height: u16) {
        self.resize = Some((width, height));
    }

    /// A resize always implies a redraw
    pub fn should_render(&self) -> bool {
        self.render || self.resize.is_some()
    }

    pub fn resize(&self) -> Option<(u16, u16)> {
        self.resize
    }

    /// Hand out the collected work and start the next iteration empty
    pub fn take(&mut self) -> FrameRequest {
        std::mem::take(self)
    }
}
