// std imports
use std::{
    io::{IsTerminal, stderr, stdin, stdout},
    process,
};

// third-party imports
use clap::{CommandFactory, Parser};
use env_logger::{self as logger};
use wildcard::Strategy;

// local imports
use wmatch::{
    App, Options, Settings,
    cli::{self, ColorOption},
    error::*,
    report::Reporter,
};

const WMATCH_DEBUG_LOG: &str = "WMATCH_DEBUG_LOG";
const WMATCH_DEBUG_LOG_STYLE: &str = "WMATCH_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(WMATCH_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(WMATCH_DEBUG_LOG)
                .write_style(WMATCH_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run(opt: cli::Opt, use_colors: bool) -> Result<()> {
    if let Some(shell) = opt.shell_completions {
        let mut cmd = cli::Opt::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut stdout());
        return Ok(());
    }

    if opt.list_solvers {
        return Reporter::new(stdout().lock(), use_colors).solvers().map_err(Error::Io);
    }

    let settings = Settings::load(opt.config.as_deref())?;
    log::debug!("settings: {:?}", settings);

    let strategies = if opt.all {
        Strategy::all().collect()
    } else {
        vec![opt.solver.unwrap_or(settings.solver)]
    };

    let app = App::new(Options {
        strategies,
        text: opt.text,
        pattern: opt.pattern,
        max_input_length: settings.max_input_length,
        max_recursive_input_length: settings.max_recursive_input_length,
        show_warnings: settings.show_warnings && !opt.hide_warnings,
        colors: use_colors,
    });

    log::debug!("run the app");
    app.run(&mut stdin().lock(), stdout().lock())
}

fn main() {
    bootstrap();

    let opt = cli::Opt::parse();
    let use_colors = |is_terminal: bool| match opt.color {
        ColorOption::Auto => is_terminal,
        ColorOption::Always => true,
        ColorOption::Never => false,
    };
    let out_colors = use_colors(stdout().is_terminal());
    let err_colors = use_colors(stderr().is_terminal());

    if let Err(err) = run(opt, out_colors) {
        err.log(err_colors);
        process::exit(1);
    }
}
