/// Display settings for the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Joins keys in the preorder and postorder listings.
    pub separator: String,
    /// Column width the name is padded to in the alphabetical listing.
    pub key_width: usize,
    /// Print the welcome lines before the first menu.
    pub show_banner: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            separator: " -> ".to_string(),
            key_width: 20,
            show_banner: true,
        }
    }
}

impl Options {
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_key_width(mut self, key_width: usize) -> Self {
        self.key_width = key_width;
        self
    }

    pub fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }
}
