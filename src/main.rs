use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use multiverse::{Field, Page, PageConfig, Viewport};

#[derive(Parser)]
#[command(name = "multiverse", version, about = "Multiverse landing page core")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a background field and print it
    Field {
        /// Seed for a reproducible layout
        #[arg(long)]
        seed: Option<u64>,
        /// Print the field as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Render the page as HTML at a scroll position
    Render {
        #[arg(long)]
        seed: Option<u64>,
        /// Scroll offset in px
        #[arg(long, default_value_t = 0.0)]
        scroll: f64,
        #[arg(long, default_value_t = 1280)]
        width: u32,
        #[arg(long, default_value_t = 720)]
        height: u32,
        /// Write to a file instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Replay scroll offsets and print one JSON snapshot per step
    Scroll {
        /// Offsets in px, applied in order
        #[arg(required = true, allow_negative_numbers = true)]
        offsets: Vec<f64>,
        /// Reveal threshold
        #[arg(long, default_value_t = 0.1)]
        threshold: f64,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn print_field(field: &Field) {
    println!("{:>3}  {:>7} {:>7} {:>5} {:>6} {:>5} {:>6}", "id", "x%", "y%", "size", "speed", "alpha", "hue");
    for p in field.particles() {
        println!(
            "{:>3}  {:>7.2} {:>7.2} {:>5.2} {:>6.2} {:>5.2} {:>6.1}",
            p.id, p.x, p.y, p.size, p.speed, p.opacity, p.hue
        );
    }
    println!();
    println!("{:>3}  {:>7} {:>7} {:>6} {:>5}  color", "id", "x%", "y%", "size", "delay");
    for u in field.universes() {
        println!(
            "{:>3}  {:>7.2} {:>7.2} {:>6.1} {:>5.2}  {}",
            u.id, u.x, u.y, u.size, u.delay, u.color
        );
    }
    println!();
    println!("digest: {}", field.digest());
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Field { seed, json } => {
            let field = match seed {
                Some(s) => Field::generate_seeded(s),
                None => Field::generate(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&field)?);
            } else {
                print_field(&field);
            }
        }
        Command::Render { seed, scroll, width, height, out } => {
            let config = PageConfig {
                viewport: Viewport { width, height },
                seed,
                ..Default::default()
            };
            let page = Page::mount(config).context("failed to mount page")?;
            page.scroll_to(scroll);
            let html = page.render_html();
            match out {
                Some(path) => {
                    fs::write(&path, html).with_context(|| format!("failed to write {}", path.display()))?;
                    info!("wrote {}", path.display());
                }
                None => print!("{}", html),
            }
            page.unmount();
        }
        Command::Scroll { offsets, threshold, seed } => {
            let config = PageConfig {
                reveal_threshold: threshold,
                seed,
                ..Default::default()
            };
            let page = Page::mount(config).context("failed to mount page")?;
            for y in offsets {
                page.scroll_to(y);
                println!("{}", page.snapshot().without_field().to_json()?);
            }
            page.unmount();
        }
    }
    Ok(())
}
