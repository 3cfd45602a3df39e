use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;

use hero_carousel::HeroCarousel;
use hero_carousel::constants::{RENDER_HEIGHT, RENDER_WIDTH};
use hero_carousel::manifest::{Manifest, slides_from_directory};

/// Show a hero carousel from a slide manifest or a directory of images.
#[derive(Parser, Debug)]
#[command(name = "hero-carousel", version)]
struct Args {
    /// Slide manifest (TOML or JSON), or a directory of images
    source: PathBuf,

    /// Print the rendered markup instead of opening a window
    #[arg(long)]
    markup: bool,

    /// Autoplay interval for slides that do not set their own
    #[arg(long, value_name = "MS")]
    interval_ms: Option<u64>,

    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    height: i32,
}

fn init_logger() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        Builder::new()
            .target(Target::Stderr)
            .filter_level(LevelFilter::Warn)
            .filter_module("hero_carousel", LevelFilter::Info)
            .init();
    }
}

fn main() {
    init_logger();
    let args = Args::parse();

    if let Err(e) = run(args) {
        log::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let manifest = if args.source.is_dir() {
        Manifest::default()
    } else {
        Manifest::load_from_file(&args.source)?
    };
    let default_interval = args
        .interval_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| manifest.default_interval());
    let config = manifest.carousel.clone();

    let slides = if args.source.is_dir() {
        slides_from_directory(&args.source)?
    } else {
        manifest.into_slides()
    };
    log::info!("loaded {} slides from {}", slides.len(), args.source.display());

    let carousel = HeroCarousel::new(config);
    let Some(view) = carousel.render(&slides) else {
        log::warn!("no slides to show");
        return Ok(());
    };

    if args.markup {
        println!("{}", view.to_node().to_markup());
        return Ok(());
    }

    show(view, default_interval, args.width, args.height)
}

#[cfg(not(feature = "gui"))]
fn show(view: hero_carousel::CarouselView<'_>, _default_interval: Duration, _width: i32, _height: i32) -> anyhow::Result<()> {
    log::warn!("built without the `gui` feature, printing markup instead");
    println!("{}", view.to_node().to_markup());
    Ok(())
}

#[cfg(feature = "gui")]
fn show(view: hero_carousel::CarouselView<'_>, default_interval: Duration, width: i32, height: i32) -> anyhow::Result<()> {
    use hero_carousel::constants::FPS;
    use hero_carousel::engine::Engine;
    use hero_carousel::sliding::SlidingEngine;
    use raylib::prelude::*;

    let (mut rl, thread) = raylib::init()
        .size(width, height)
        .title("Hero Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut engine = SlidingEngine::new(default_interval);
    if !engine.initialize(&mut rl, &thread, view) {
        anyhow::bail!("no panels to display");
    }

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        if !engine.render_frame(dt, &mut rl, &thread) {
            anyhow::bail!("engine stopped drawing");
        }
    }
    Ok(())
}
