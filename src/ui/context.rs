use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(json, cli_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            color: color && !json,
            unicode: caps.supports_unicode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            supports_color: true,
            supports_unicode: true,
            is_ci: false,
        }
    }

    #[test]
    fn auto_color_follows_terminal() {
        let ui = UiContext::from_caps(false, None, tty_caps());
        assert!(ui.color);
    }

    #[test]
    fn never_disables_color() {
        let ui = UiContext::from_caps(false, Some(ColorWhen::Never), tty_caps());
        assert!(!ui.color);
    }

    #[test]
    fn always_forces_color_when_piped() {
        let caps = TerminalCapabilities {
            supports_color: false,
            ..tty_caps()
        };
        let ui = UiContext::from_caps(false, Some(ColorWhen::Always), caps);
        assert!(ui.color);
    }

    #[test]
    fn ci_disables_auto_color() {
        let caps = TerminalCapabilities {
            is_ci: true,
            ..tty_caps()
        };
        let ui = UiContext::from_caps(false, Some(ColorWhen::Auto), caps);
        assert!(!ui.color);
    }

    #[test]
    fn json_never_colors() {
        let ui = UiContext::from_caps(true, Some(ColorWhen::Always), tty_caps());
        assert!(!ui.color);
    }
}
