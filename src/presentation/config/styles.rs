use ratatui::style::Color;
use serde::Deserialize;

/// Semantic colors the clock face is drawn with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Theme {
    /// Fill of both discs
    #[serde(default = "default_background")]
    pub background: Color,
    /// Second hand
    #[serde(default = "default_primary")]
    pub primary: Color,
    /// Hour and minute hands, numerals
    #[serde(default = "default_foreground")]
    pub foreground: Color,
    #[serde(default = "default_shadow")]
    pub shadow: Color,
}

fn default_background() -> Color {
    Color::Black
}

fn default_primary() -> Color {
    Color::LightMagenta
}

fn default_foreground() -> Color {
    Color::White
}

fn default_shadow() -> Color {
    Color::DarkGray
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: default_background(),
            primary: default_primary(),
            foreground: default_foreground(),
            shadow: default_shadow(),
        }
    }
}
