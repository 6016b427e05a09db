use clap::Parser;
use form_wizard::app::App;
use form_wizard::config::WizardConfig;
use form_wizard::error::Result;
use form_wizard::logging;
use form_wizard::terminal::Terminal;
use form_wizard::terminal_event::TerminalEvent;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "form-wizard", version, about = "Four-step sign-up form in the terminal")]
struct Cli {
    /// YAML config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Mask the password in the success summary.
    #[arg(long)]
    mask_summary: bool,

    /// Print the submitted values as JSON on stdout.
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => WizardConfig::load(path)?,
        None => WizardConfig::default(),
    };
    if cli.log_file.is_some() {
        config.logging.file = cli.log_file.clone();
    }
    if cli.mask_summary {
        config.display.mask_summary_password = true;
    }

    logging::init(&config.logging)?;
    info!(config = ?cli.config, "starting form wizard");

    let mut app = App::new(&config);
    let mut terminal = Terminal::new();
    terminal.enter_raw_mode()?;
    event_loop(&mut terminal, &mut app)?;
    terminal.restore()?;

    if cli.json {
        if let Some(data) = app.submitted_data() {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
    }

    Ok(())
}

fn event_loop(terminal: &mut Terminal, app: &mut App) -> Result<()> {
    let mut render_requested = true;

    loop {
        if render_requested {
            app.render(terminal)?;
            render_requested = false;
        }

        if app.should_exit() {
            break;
        }

        if terminal.poll(Duration::from_millis(100))? {
            match terminal.read_event()? {
                TerminalEvent::Key(key_event) => {
                    app.handle_key(key_event);
                    render_requested = true;
                }
                TerminalEvent::Resize => {
                    render_requested = true;
                }
            }
        }
    }

    app.renderer.move_to_end(terminal)?;
    Ok(())
}
