//! mdtoggle - apply a markdown notation toggle to a file at a cursor position

use anyhow::{Context, Result};
use clap::Parser;
use mdtoggle_core::{Command, Config, MarkdownEditor, MemorySurface, NotationKind, Selection};
use std::path::PathBuf;

/// Toggle markdown notation at a cursor position
#[derive(Parser, Debug)]
#[command(name = "mdtoggle")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to markdown file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Cursor offset in chars
    #[arg(long, conflicts_with = "select")]
    cursor: Option<usize>,

    /// Selection as START:END char offsets
    #[arg(long, value_parser = parse_selection)]
    select: Option<Selection>,

    /// Notation to toggle (bold, italic, underline, strikethrough, blockquote,
    /// ordered-list, unordered-list, header, link, image)
    #[arg(long)]
    command: Option<NotationKind>,

    /// Image URL, used with `--command image`
    #[arg(long)]
    url: Option<String>,

    /// Replace the selection with this text
    #[arg(long, conflicts_with_all = ["command", "wrap"])]
    insert: Option<String>,

    /// Wrap the selection with this delimiter on both sides
    #[arg(long, conflicts_with = "command")]
    wrap: Option<String>,

    /// Print the HTML preview instead of the markdown
    #[arg(long)]
    html: bool,

    /// Write the result back to FILE
    #[arg(long)]
    write: bool,

    /// Use this config file instead of the platform default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn parse_selection(value: &str) -> Result<Selection, String> {
    let (start, end) = value
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got {value:?}"))?;
    let start: usize = start.trim().parse().map_err(|e| format!("bad start: {e}"))?;
    let end: usize = end.trim().parse().map_err(|e| format!("bad end: {e}"))?;
    if start > end {
        return Err(format!("start {start} is after end {end}"));
    }
    Ok(Selection::new(start, end))
}

fn command_from(args: &Args) -> Option<Command> {
    if let Some(text) = &args.insert {
        return Some(Command::InsertText(text.clone()));
    }
    if let Some(delimiter) = &args.wrap {
        return Some(Command::Wrap {
            open: delimiter.clone(),
            close: delimiter.clone(),
        });
    }
    match args.command? {
        NotationKind::Image => Some(Command::Image {
            url: args.url.clone().unwrap_or_default(),
        }),
        kind => Some(Command::Toggle(kind)),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read file: {}", args.file.display()))?;

    let selection = args
        .select
        .or(args.cursor.map(Selection::cursor))
        .unwrap_or_else(|| Selection::cursor(content.chars().count()));

    let mut editor = MarkdownEditor::with_buffer(config, content.as_str());
    editor.attach(MemorySurface::new(content.as_str()).with_selection(selection));

    if let Some(command) = command_from(&args) {
        log::info!("Running {:?} at {}..{}", command, selection.start, selection.end);
        let changed = editor
            .execute(command)
            .context("Failed to apply command")?;
        if !changed {
            log::info!("Buffer unchanged");
        }
    }

    let restored = editor.tick();

    if args.write {
        std::fs::write(&args.file, editor.buffer())
            .with_context(|| format!("Failed to write file: {}", args.file.display()))?;
    }

    if args.html {
        print!("{}", editor.html());
    } else {
        print!("{}", editor.buffer());
        if !editor.buffer().ends_with('\n') {
            println!();
        }
    }

    if let Some(selection) = restored {
        eprintln!("selection: {}..{}", selection.start, selection.end);
    }

    Ok(())
}
