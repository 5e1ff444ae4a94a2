use clap::ValueEnum;
use comfy_table::{Attribute, Cell, Color, Table};
use owo_colors::OwoColorize;
use reelshelf_models::MediaItem;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        self.message("success", "✓".green().to_string(), msg.as_ref());
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.message("warning", "⚠".yellow().to_string(), msg.as_ref());
    }

    pub fn println(&self, msg: impl AsRef<str>) {
        // Blank spacer lines only make sense for humans
        if self.quiet || (msg.as_ref().is_empty() && !self.is_human()) {
            return;
        }

        match self.format {
            OutputFormat::Human => println!("{}", msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "info", "message": msg.as_ref() }));
            }
        }
    }

    fn message(&self, kind: &str, marker: String, msg: &str) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => println!("{} {}", marker, msg),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": kind, "message": msg }));
            }
        }
    }

    /// A titled list of items: a table for humans, an array for JSON.
    pub fn items(&self, heading: &str, items: &[&MediaItem]) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                println!("\n{}", heading.bold());
                if items.is_empty() {
                    println!("  (none)");
                } else {
                    println!("{}", items_table(items));
                }
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                let items = serde_json::to_value(items).unwrap_or_default();
                self.print_json(&json!({ "type": "items", "heading": heading, "items": items }));
            }
        }
    }

    pub fn json(&self, data: &serde_json::Value) {
        if self.quiet {
            return;
        }

        self.print_json(data);
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(data).unwrap_or_default());
            }
            OutputFormat::JsonPretty => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            OutputFormat::Human => {
                println!("{}", data);
            }
        }
    }
}

fn items_table(items: &[&MediaItem]) -> Table {
    let mut table = Table::new();
    table.set_header(
        ["Title", "Kind", "Genre", "Views"]
            .into_iter()
            .map(|h| Cell::new(h).fg(Color::Cyan).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    for item in items {
        table.add_row(vec![
            Cell::new(item.to_string()),
            Cell::new(if item.is_episode() { "episode" } else { "movie" }),
            Cell::new(item.genre()),
            Cell::new(item.views()),
        ]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}
