#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_hints: bool,
    pub mask_summary_password: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_hints: true,
            mask_summary_password: false,
        }
    }
}
