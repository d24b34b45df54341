/// Where a click inside the open dialog landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogClick {
    /// The dimmed overlay itself
    Backdrop,
    /// Anything inside the dialog panel
    Content,
}

/// Download dialog toggled by the call-to-action button.
#[derive(Debug, Clone, Default)]
pub struct DownloadDialog {
    open: bool,
}

impl DownloadDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// CTA pressed.
    pub fn open(&mut self) {
        if !self.open {
            log::debug!("download dialog opened");
        }
        self.open = true;
    }

    /// Close button pressed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Click while open: only a click on the backdrop itself dismisses.
    pub fn click(&mut self, target: DialogClick) {
        if target == DialogClick::Backdrop {
            self.close();
        }
    }
}
