// Inherit lint configuration from lib.rs for consistency
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::needless_pass_by_value
)]

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use codeshield::cli::commands::{parse_session_line, Cli, Command, SessionCommand, SESSION_HELP};
use codeshield::cli::output::{self, OutputFormat, QueueView};
use codeshield::config::Config;
use codeshield::operations;
use codeshield::session::Session;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays machine readable.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> CmdResult {
    let config = Config::from_cwd().map_err(map_err)?;
    let format = OutputFormat::parse(
        cli.format
            .as_deref()
            .unwrap_or(&config.settings.output.format),
    );

    match cli.command {
        Command::Supported => cmd_supported(format),
        Command::Check { paths } => block_on(cmd_check(config, format, paths)),
        Command::Scan { paths } => block_on(cmd_scan(config, format, paths)),
        Command::Session => block_on(cmd_session(config, format)),
    }
}

type CmdResult = Result<(), Box<dyn std::fmt::Display>>;

fn map_err(e: impl std::fmt::Display + 'static) -> Box<dyn std::fmt::Display> {
    Box::new(e.to_string())
}

fn block_on(fut: impl std::future::Future<Output = CmdResult>) -> CmdResult {
    let rt = tokio::runtime::Runtime::new().map_err(map_err)?;
    rt.block_on(fut)
}

fn emit<T: serde::Serialize>(format: OutputFormat, value: &T, text: impl FnOnce() -> String) {
    match format {
        OutputFormat::Minified => println!("{}", output::format_json(value)),
        OutputFormat::Pretty => println!("{}", output::format_pretty(value)),
        OutputFormat::Text => println!("{}", text()),
    }
}

fn flush_notifications(session: &mut Session) {
    for n in session.take_notifications() {
        eprintln!("{n}");
    }
}

fn print_queue(session: &Session, format: OutputFormat) {
    let view = QueueView {
        files: session.queue().records(),
        summary: session.summary(),
    };
    emit(format, &view, || output::render_queue(&view));
}

fn cmd_supported(format: OutputFormat) -> CmdResult {
    let result = operations::list_supported();
    emit(format, &result, || output::render_supported(&result));
    Ok(())
}

async fn cmd_check(config: Config, format: OutputFormat, paths: Vec<String>) -> CmdResult {
    let mut session = Session::new(config);
    session.add_paths(&paths).await.map_err(map_err)?;
    flush_notifications(&mut session);
    print_queue(&session, format);
    Ok(())
}

async fn cmd_scan(config: Config, format: OutputFormat, paths: Vec<String>) -> CmdResult {
    let mut session = Session::new(config);
    session.add_paths(&paths).await.map_err(map_err)?;
    let result = session.submit();
    flush_notifications(&mut session);
    let request = result.map_err(map_err)?;
    emit(format, &request, || output::render_scan(&request));
    Ok(())
}

async fn cmd_session(config: Config, format: OutputFormat) -> CmdResult {
    let mut session = Session::new(config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.map_err(map_err)? {
        let cmd = match parse_session_line(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(msg) => {
                eprintln!("{}", output::format_error(&msg));
                continue;
            }
        };

        let result = match cmd {
            SessionCommand::Add(paths) => session.add_paths(&paths).await.map(|_| ()),
            SessionCommand::Dir(path) => {
                let dir = session.config().resolve(&path);
                session.add_directory(dir).await.map(|_| ())
            }
            SessionCommand::Remove(id) => session.remove_str(&id),
            SessionCommand::Clear => {
                session.clear();
                Ok(())
            }
            SessionCommand::List => {
                print_queue(&session, format);
                Ok(())
            }
            SessionCommand::Summary => {
                let summary = session.summary();
                emit(format, &summary, || {
                    format!("{}\n{}", summary.headline, summary.detail)
                });
                Ok(())
            }
            SessionCommand::Scan => session.submit().map(|request| {
                emit(format, &request, || output::render_scan(&request));
            }),
            SessionCommand::Help => {
                println!("{SESSION_HELP}");
                Ok(())
            }
            SessionCommand::Quit => break,
        };

        flush_notifications(&mut session);
        if let Err(e) = result {
            eprintln!("{}", output::format_error(&e));
        }
    }
    Ok(())
}
