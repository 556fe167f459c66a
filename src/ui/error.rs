use stitch::StitchError;

use crate::ui::primitives::icon::Icon;
use crate::ui::theme;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Error.colored(supports_color, supports_unicode);
    let mut out = format!("{} {}\n", icon, err);

    if let Some(hint) = err
        .downcast_ref::<StitchError>()
        .and_then(|e| render_hint(e, supports_unicode))
    {
        out.push_str(&hint);
    }
    out
}

/// Indented fix suggestion for errors the user can act on
pub fn render_hint(err: &StitchError, supports_unicode: bool) -> Option<String> {
    let arrow = if supports_unicode {
        theme::icons::ARROW
    } else {
        theme::icons_ascii::ARROW
    };
    fix_hint(err).map(|hint| format!("  {} {}\n", arrow, hint))
}

fn fix_hint(err: &StitchError) -> Option<&'static str> {
    match err {
        StitchError::MissingSource { .. } => {
            Some("Create the file, or fix the path in its <!-- include:... --> marker (paths are relative to src/).")
        }
        StitchError::DestinationWrite { .. } => {
            Some("Check that dist/ is a writable directory.")
        }
        StitchError::Config { .. } => Some("Fix or remove stitch.toml and try again."),
        StitchError::Io(_) => None,
    }
}
