use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use stitch::{watch, BuildConfig, WatchEvent};

use super::build::{display_message, display_path};
use crate::ui::context::UiContext;
use crate::ui::views::watch::{render_watch_event, render_watch_header};

pub fn cmd_watch(ui: &UiContext, config: &BuildConfig) -> Result<()> {
    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("could not install Ctrl+C handler")?;

    let source = display_path(config, &config.source_root)
        .display()
        .to_string();

    if !ui.json {
        print!(
            "\n{}",
            render_watch_header(
                &source,
                config.poll_interval.as_millis(),
                ui.color,
                ui.unicode
            )
        );
    }

    watch(config, running, |event| {
        if ui.json {
            println!("{}", event.to_json());
            return;
        }

        let event = relativize(config, event);
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let rendered = render_watch_event(&timestamp, &event, ui.color, ui.unicode);

        match event {
            WatchEvent::Error { .. } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    });

    Ok(())
}

fn relativize(config: &BuildConfig, event: WatchEvent) -> WatchEvent {
    let rel = |p: String| {
        display_path(config, std::path::Path::new(&p))
            .display()
            .to_string()
    };
    match event {
        WatchEvent::WatchStarted { source } => WatchEvent::WatchStarted {
            source: rel(source),
        },
        WatchEvent::BuildComplete {
            output,
            bytes,
            includes,
        } => WatchEvent::BuildComplete {
            output: rel(output),
            bytes,
            includes,
        },
        WatchEvent::Error { message } => WatchEvent::Error {
            message: display_message(config, &message),
        },
        other => other,
    }
}
