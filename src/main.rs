use berlin_clock::utils::{logger, validation::Validate};
use berlin_clock::{
    BerlinClock, CliConfig, ClockError, OutputFormat, TimeConverter, TimeOfDay, TomlConfig,
};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    let file_config = match &config.config {
        Some(path) => TomlConfig::from_file(path),
        None => Ok(TomlConfig::default()),
    };

    // 初始化日誌
    let (verbose, json_logs) = match &file_config {
        Ok(file) => (
            config.verbose || file.verbose(),
            config.log_json || file.json_logs(),
        ),
        Err(_) => (config.verbose, config.log_json),
    };
    logger::init_logger(verbose, json_logs);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config, file_config) {
        tracing::error!(
            "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(
    config: &CliConfig,
    file_config: Result<TomlConfig, ClockError>,
) -> Result<(), ClockError> {
    config.validate()?;
    let file_config = file_config?;

    let options = config.render_options(file_config.render);
    let clock = BerlinClock::new(options);

    if config.now {
        let now = TimeOfDay::from_chrono(&chrono::Local::now());
        tracing::info!("Using local time {}", now);
        println!("{}", clock.render_time(now)?);
        return Ok(());
    }

    if config.times.is_empty() {
        return Err(ClockError::MissingInput);
    }

    for (i, time) in config.times.iter().enumerate() {
        let rendered = clock.convert(Some(time))?;
        if i > 0 && options.format == OutputFormat::Text {
            println!();
        }
        println!("{}", rendered);
    }

    Ok(())
}
