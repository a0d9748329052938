use anyhow::{Context, Result};
use clap::Parser;
use moser_core::{ColorBehavior, Ruleset};
use moser_io::DuplicateResolution;
use moser_life_lib::app::App;
use moser_tui::Tui;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "terminal")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Start with a named ruleset (e.g. "HighLife")
    #[arg(long, conflicts_with = "rule")]
    ruleset: Option<String>,

    /// Start with ad-hoc rules in B/S notation (e.g. "B36/S23")
    #[arg(long)]
    rule: Option<String>,

    /// Save the rules given by --rule under this name
    #[arg(long, requires = "rule")]
    save_as: Option<String>,

    /// What to do when --save-as finds the same rules under another name
    #[arg(long, value_enum, default_value = "use-existing")]
    on_duplicate: OnDuplicate,

    /// Newborn color behavior (default, average, majority)
    #[arg(long)]
    color: Option<ColorBehavior>,

    /// Seed for the initial grid
    #[arg(long)]
    seed: Option<u64>,

    /// Generations to run in headless mode
    #[arg(short, long, default_value_t = 1000)]
    generations: u64,

    /// Log file for terminal mode
    #[arg(long, default_value = "moser_life.log")]
    log_file: PathBuf,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Terminal,
    Headless,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum OnDuplicate {
    UseExisting,
    CreateDuplicate,
    Cancel,
}

impl From<OnDuplicate> for DuplicateResolution {
    fn from(value: OnDuplicate) -> Self {
        match value {
            OnDuplicate::UseExisting => DuplicateResolution::UseExisting,
            OnDuplicate::CreateDuplicate => DuplicateResolution::CreateDuplicate,
            OnDuplicate::Cancel => DuplicateResolution::Cancel,
        }
    }
}

fn build_app(args: &Args) -> Result<App> {
    let mut config = App::load_config(&args.config);
    if let Some(seed) = args.seed {
        config.grid.seed = Some(seed);
    }
    if let Some(color) = args.color {
        config.simulation.color_behavior = color;
    }

    let mut app = App::new(config, &args.config)?;
    if let Some(name) = &args.ruleset {
        app.use_ruleset(name)?;
    }

    if let Some(notation) = &args.rule {
        let name = args.save_as.as_deref().unwrap_or("Custom");
        let ruleset = Ruleset::from_notation(name, notation, "")
            .with_context(|| format!("parsing --rule {notation}"))?;
        app.apply_rules(&ruleset);
        if let Some(save_as) = &args.save_as {
            app.save_current_ruleset(save_as, "", args.on_duplicate.into())?;
        }
    }
    Ok(app)
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.mode {
        Mode::Headless => {
            moser_core::init_logging();
            let mut app = build_app(&args)?;
            let report = app.run_headless(args.generations);
            println!(
                "Generation {}: {} alive ({} births, {} deaths)",
                report.generations, report.population, report.births, report.deaths
            );
        }
        Mode::Terminal => {
            moser_core::init_file_logging(&args.log_file)
                .with_context(|| format!("opening log file {}", args.log_file.display()))?;
            let mut app = build_app(&args)?;

            let mut tui = Tui::new()?;
            tui.init()?;
            let res = app.run(&mut tui);
            tui.exit()?;

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            }
        }
    }

    Ok(())
}
