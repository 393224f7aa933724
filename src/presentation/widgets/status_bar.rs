use ratatui::{prelude::*, widgets::Paragraph};

/// Single line under the face: status message, or key hints when idle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusBarWidget {
    message: Option<String>,
}

pub const KEY_HINTS: &str = "q: quit  r: reset  ctrl-z: suspend";

impl StatusBarWidget {
    pub fn new(message: Option<String>) -> Self {
        Self { message }
    }
}

impl Widget for StatusBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let line = match self.message {
            Some(message) => Line::from(message),
            None => Line::from(KEY_HINTS.dim()),
        };
        Paragraph::new(line).centered().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_text(widget: StatusBarWidget) -> String {
        let area = Rect::new(0, 0, 60, 1);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_render_hints_when_idle() {
        assert!(render_text(StatusBarWidget::new(None)).contains("q: quit"));
    }

    #[test]
    fn test_render_message() {
        let content = render_text(StatusBarWidget::new(Some("Clock reset".to_string())));
        assert!(content.contains("Clock reset"));
        assert!(!content.contains("q: quit"));
    }
}
