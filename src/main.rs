use color_eyre::Result;
use menu_aim::cli::{parse_args, run_cli_command, DemoOptions, USAGE};
use menu_aim::config::MenuAimConfig;
use menu_aim::error::MenuAimResult;
use menu_aim::logging::{default_log_path, init_logging};
use menu_aim::terminal::setup_panic_hook;

fn load_config(options: &DemoOptions) -> MenuAimResult<MenuAimConfig> {
    Ok(options.resolve_config()?)
}

fn main() -> Result<()> {
    // Parse before any initialization so --version and --help stay fast
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("menu-aim: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };
    let Some(options) = run_cli_command(command) else {
        return Ok(());
    };

    let config = match load_config(&options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    };

    // Logging is best effort; the demo runs without it
    let log_path = default_log_path();
    if let Err(e) = init_logging(&log_path) {
        eprintln!("Warning: logging disabled ({}): {}", log_path.display(), e);
    }

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(menu_aim::demo::run(config));
    if let Err(ref e) = result {
        tracing::error!(error = %e, "demo exited with error");
    }
    result
}
