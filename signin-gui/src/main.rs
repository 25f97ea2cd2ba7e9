use std::{error::Error, process};

use iced::{Pixels, Settings, Size};
use signin_gui::{
    app::App,
    args::{parse_args, Arg},
    config::Config,
    html, logger,
    props::Props,
    VERSION,
};
use signin_ui::theme::Theme;
use tracing::error;

fn main() {
    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect(), VERSION)?;

    let config_path = args.iter().find_map(|a| match a {
        Arg::ConfigPath(path) => Some(path.as_path()),
        _ => None,
    });
    let config = Config::load(config_path)?;

    let log_level = match logger::parse_log_level()? {
        Some(level) => level,
        None => config.level_filter()?,
    };
    logger::setup_logger(log_level, config.log_file.as_deref())?;

    let props = match args.iter().find_map(|a| match a {
        Arg::PropsPath(path) => Some(path),
        _ => None,
    }) {
        Some(path) => Props::from_file(path)?,
        None => Props::default(),
    };

    if args.contains(&Arg::Html) {
        println!("{}", html::page(&props).into_string());
        return Ok(());
    }

    let settings = Settings {
        default_font: signin_ui::font::REGULAR,
        default_text_size: Pixels(16.0),
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        size: Size::new(config.window.width, config.window.height),
        ..Default::default()
    };

    iced::application(App::title, App::update, App::view)
        .theme(|_| Theme::default())
        .settings(settings)
        .window(window_settings)
        .run_with(move || App::new(&config, props))?;

    Ok(())
}
