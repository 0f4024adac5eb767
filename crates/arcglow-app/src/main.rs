mod app_state;
mod cli;
mod controls;

use std::path::{Path, PathBuf};
use std::time::Instant;

use arcglow_common::ArcglowError;
use arcglow_config::{toml_loader, ArcglowConfig, ReloadManager};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter};

use app_state::{AnimateOptions, ArcglowApp, Overrides, PickRequest};
use cli::{Args, Command};

const DEFAULT_DIRECTIVE: &str = "arcglow=info";

fn env_filter(directive: &str) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match directive.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(e) => {
            eprintln!("invalid log level {directive:?} ({e}), using info");
            filter.add_directive(LevelFilter::INFO.into())
        }
    }
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            width: self.width,
            height: self.height,
            speed: self.speed.clone(),
            colors: self.colors.clone(),
            hue: self.hue.clone(),
            saturation: self.saturation.clone(),
            lightness: self.lightness.clone(),
            pick: self.pick_image.clone().map(|image| PickRequest {
                image,
                x: self.pick_at.0,
                y: self.pick_at.1,
                slot: self.pick_slot,
            }),
        }
    }

    /// Explicit `--config`, else the platform default location.
    fn config_path(&self) -> Option<PathBuf> {
        match self.config {
            Some(ref path) => Some(path.clone()),
            None => toml_loader::default_config_path()
                .map_err(|e| tracing::warn!("no default config location: {e}"))
                .ok(),
        }
    }
}

fn load_config(path: Option<&Path>, explicit: bool) -> ArcglowConfig {
    let result = match path {
        Some(path) if explicit => toml_loader::load_from_path(path),
        Some(path) => toml_loader::load_or_create(path),
        None => Ok(ArcglowConfig::default()),
    };
    result.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ArcglowConfig::default()
    })
}

/// `arcglow init`: write the default config file unless one exists.
fn init_config(path: Option<PathBuf>) -> Result<(), ArcglowError> {
    let path = path.ok_or_else(|| ArcglowError::Other("could not determine config path".into()))?;
    if path.exists() {
        tracing::info!("Config already exists at {}", path.display());
    } else {
        toml_loader::create_default_config(&path)?;
    }
    println!("{}", path.display());
    Ok(())
}

fn run(
    args: Args,
    config: ArcglowConfig,
    config_path: Option<PathBuf>,
) -> Result<(), ArcglowError> {
    let mut app = ArcglowApp::new(config, Instant::now());
    app.apply_overrides(&args.overrides(), Instant::now())?;
    tracing::info!(
        speed = app.speed().label(),
        hue = %app.adjust().hue_label(),
        saturation = %app.adjust().saturation_label(),
        lightness = %app.adjust().lightness_label(),
        "palette: {}",
        app.palette().text()
    );

    match args.command {
        Command::Render { progress, out } => {
            app.write_frame(progress, &out)?;
        }
        Command::Stops { progress } => {
            println!("{}", app.stops_json(progress)?);
        }
        Command::Animate {
            frames,
            fps,
            out_dir,
        } => {
            let options = AnimateOptions {
                frames,
                fps: fps.unwrap_or(app.config().output.fps),
                out_dir: out_dir.unwrap_or_else(|| PathBuf::from(&app.config().output.directory)),
            };
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(async {
                let reload = config_path.map(|path| {
                    tracing::info!("Watching {} for changes", path.display());
                    ReloadManager::start(path).1
                });
                app.animate(options, reload).await
            })?;
        }
        Command::Init => init_config(config_path)?,
    }
    Ok(())
}

fn main() {
    let args = cli::parse();

    // Initialize logging; the config's level applies unless --log-level is given
    let directive = args.log_level.as_deref().unwrap_or(DEFAULT_DIRECTIVE);
    let (filter, filter_handle) = reload::Layer::new(env_filter(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    tracing::info!("arcglow v{} starting...", env!("CARGO_PKG_VERSION"));

    let config_path = args.config_path();
    let result = if matches!(args.command, Command::Init) {
        init_config(config_path)
    } else {
        let config = load_config(config_path.as_deref(), args.config.is_some());
        if args.log_level.is_none() {
            let directive = config.logging.level.directive();
            if let Err(e) = filter_handle.modify(|f| *f = env_filter(directive)) {
                tracing::warn!("Failed to apply config log level: {e}");
            }
        }
        run(args, config, config_path)
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
