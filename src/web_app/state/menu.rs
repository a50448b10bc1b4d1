// web_app/state/menu.rs - Mobile navigation drawer visibility

/// Open/closed flag for the mobile navigation drawer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuVisibility {
    open: bool,
}

impl MenuVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}
