use std::path::Path;

use stitch::{BuildReport, ConfigWarning};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub fn render_build_header(entry: &Path, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Build, "Stitch Build");
    header.add("Entry", entry.display().to_string());
    header.render(supports_color, supports_unicode)
}

pub fn render_build_success(
    report: &BuildReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} Built {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        report.output.display()
    );
    out.push_str(&format!("  Size: {:.1} KB\n", report.size_kb()));
    out.push_str(&format!("  Includes: {}\n", report.includes));
    for asset in &report.assets {
        let name = asset
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| asset.display().to_string());
        out.push_str(&format!("  Copied: {}\n", name));
    }
    out
}

pub fn render_build_failure(message: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Build failed: {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        message
    )
}

pub fn render_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    format!(
        "{} Unknown config key '{}' in {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        warning.key,
        location
    )
}
