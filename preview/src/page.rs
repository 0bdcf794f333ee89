//! `page` command: animate every stat in an HTML file.

use std::fs;

use moonshot_core::config::resolve_config;
use moonshot_core::{
    AnimatedStats, HtmlDocument, ManualScheduler, RealtimeScheduler, Scheduler, StatHost,
};
use moonshot_types::NumberLocale;
use serde::Serialize;

use crate::PageArgs;
use crate::error::PreviewError;

#[derive(Debug, Serialize)]
struct PageReport {
    frames: usize,
    elapsed_ms: f64,
    locale: NumberLocale,
    stats: Vec<StatReport>,
}

#[derive(Debug, Serialize)]
struct StatReport {
    source: String,
    prefix: String,
    suffix: String,
    target: f64,
    text: String,
}

pub fn run(args: &PageArgs) -> Result<(), PreviewError> {
    let source = fs::read_to_string(&args.file).map_err(|e| PreviewError::Read {
        path: args.file.clone(),
        source: e,
    })?;

    let mut config = resolve_config(args.config.as_deref())?;
    if let Some(locale) = args.locale {
        config.number_locale = Some(locale.into());
    }

    // No layout: every stat starts on the first frame
    let mut doc = HtmlDocument::parse(&source);
    let mut stats = AnimatedStats::new(&doc, doc.root(), config)?;
    if stats.entries().is_empty() {
        tracing::warn!(file = %args.file.display(), "No stats found");
    }

    let mut scheduler: Box<dyn Scheduler> = if args.realtime {
        Box::new(RealtimeScheduler::sixty_hz())
    } else {
        Box::new(ManualScheduler::new(args.frame_ms))
    };

    let started = scheduler.now();
    let mut frames = 0;
    loop {
        let now = scheduler.next_frame();
        let rendered = stats.advance(now, &mut doc);
        frames += 1;

        if args.timeline && rendered > 0 {
            let texts: Vec<String> = stats
                .entries()
                .iter()
                .map(|entry| doc.text(entry.element()))
                .collect();
            println!("{:>8.1}ms  {}", now - started, texts.join("  "));
        }
        if !stats.is_animating() {
            break;
        }
    }
    let elapsed_ms = scheduler.now() - started;
    tracing::info!(frames, elapsed_ms, "Animation finished");

    if args.json {
        let report = PageReport {
            frames,
            elapsed_ms,
            locale: stats.locale(),
            stats: stats
                .entries()
                .iter()
                .map(|entry| StatReport {
                    source: entry.source_text().to_string(),
                    prefix: entry.prefix().to_string(),
                    suffix: entry.suffix_override().to_string(),
                    target: entry.target_value(),
                    text: doc.text(entry.element()),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !args.timeline {
        for entry in stats.entries() {
            println!("{}\t{}", entry.source_text(), doc.text(entry.element()));
        }
    }

    Ok(())
}
