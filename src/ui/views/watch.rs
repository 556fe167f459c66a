use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use stitch::WatchEvent;

pub fn render_watch_header(
    source: &str,
    interval_ms: u128,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "Stitch Watch");
    header.add("Source", source);
    header.add("Interval", format!("{}ms", interval_ms));
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);

    match event {
        WatchEvent::WatchStarted { source } => format!(
            "{} {} Watching for changes in {}\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode),
            source
        ),
        WatchEvent::ChangeDetected {
            added,
            removed,
            modified,
        } => {
            let mut parts = Vec::new();
            parts.extend(modified.iter().map(|p| format!("~{}", p)));
            parts.extend(added.iter().map(|p| format!("+{}", p)));
            parts.extend(removed.iter().map(|p| format!("-{}", p)));
            format!(
                "\n{} {} Change detected, rebuilding... ({})\n",
                prefix,
                Icon::Arrow.colored(supports_color, supports_unicode),
                parts.join(" ")
            )
        }
        WatchEvent::BuildStarted => format!(
            "{} {} Building...\n",
            prefix,
            Icon::Progress.colored(supports_color, supports_unicode)
        ),
        WatchEvent::BuildComplete {
            output,
            bytes,
            includes,
        } => format!(
            "{} {} Built {} ({:.1} KB, {} includes)\n",
            prefix,
            Icon::Success.colored(supports_color, supports_unicode),
            output,
            *bytes as f64 / 1024.0,
            includes
        ),
        WatchEvent::Error { message } => format!(
            "{} {} Build failed: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            message
        ),
        WatchEvent::Shutdown => format!(
            "\n{} {} Stopped watching.\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    }
}
