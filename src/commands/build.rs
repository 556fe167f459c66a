use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use stitch::{build, BuildConfig, BuildReport, WatchEvent};

use crate::ui::context::UiContext;
use crate::ui::error::render_hint;
use crate::ui::views::build::{render_build_failure, render_build_header, render_build_success};

/// Run one build and report it.
///
/// Returns whether the build succeeded; failures are already printed.
pub fn cmd_build(ui: &UiContext, config: &BuildConfig) -> bool {
    if ui.json {
        println!("{}", WatchEvent::BuildStarted.to_json());
    } else {
        print!(
            "{}",
            render_build_header(&display_path(config, &config.entry), ui.color, ui.unicode)
        );
    }

    match build(config) {
        Ok(report) => {
            if ui.json {
                println!("{}", WatchEvent::from(&report).to_json());
            } else {
                let shown = BuildReport {
                    output: display_path(config, &report.output),
                    ..report
                };
                print!("{}", render_build_success(&shown, ui.color, ui.unicode));
            }
            true
        }
        Err(err) => {
            if ui.json {
                let event = WatchEvent::Error {
                    message: err.to_string(),
                };
                println!("{}", event.to_json());
            } else {
                let message = display_message(config, &err.to_string());
                eprint!("{}", render_build_failure(&message, ui.color, ui.unicode));
                if let Some(hint) = render_hint(&err, ui.unicode) {
                    eprint!("{}", hint);
                }
            }
            false
        }
    }
}

/// Show paths relative to the project root when possible.
pub fn display_path(config: &BuildConfig, path: &Path) -> PathBuf {
    path.strip_prefix(&config.project_root)
        .unwrap_or(path)
        .to_path_buf()
}

/// Strip the project root from every path quoted in an error message.
pub fn display_message(config: &BuildConfig, message: &str) -> String {
    let mut root = config.project_root.display().to_string();
    if !root.ends_with(MAIN_SEPARATOR) {
        root.push(MAIN_SEPARATOR);
    }
    message.replace(&root, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_path_strips_project_root() {
        let config = BuildConfig::new("/site");

        assert_eq!(
            display_path(&config, &config.output),
            PathBuf::from("dist/index.html")
        );
        assert_eq!(
            display_path(&config, Path::new("/elsewhere/a.html")),
            PathBuf::from("/elsewhere/a.html")
        );
    }

    #[cfg(unix)]
    #[test]
    fn display_message_relativizes_quoted_paths() {
        let config = BuildConfig::new("/site");

        assert_eq!(
            display_message(
                &config,
                "cannot read source /site/src/nav.html: No such file or directory"
            ),
            "cannot read source src/nav.html: No such file or directory"
        );
        assert_eq!(
            display_message(&config, "cannot write /other/dist: denied"),
            "cannot write /other/dist: denied"
        );
    }
}
