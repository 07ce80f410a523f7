use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use newsrec_client::{
    app::{App, Command, Event, Panel, Settings},
    cli::{parse_input, Cli, CliCommand, Input, INTERACTIVE_HELP},
    config::Config,
    models::ArticleId,
    render,
    services::{ArticleBackend, HttpBackend},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("newsrec_client=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.api_base_url = base_url;
    }
    tracing::info!(base_url = %config.api_base_url, "Using recommendation server");

    let backend = HttpBackend::new(&config)?;
    let mut app = App::new(backend, Settings::from(&config));

    // Every command works on a loaded collection
    app.dispatch(Command::Refresh)?;
    app.settle().await;

    match cli.command.unwrap_or(CliCommand::Interactive) {
        CliCommand::List => print_articles(&mut app),
        CliCommand::Similar { id } => {
            run_once(&mut app, Command::Similar(ArticleId(id))).await;
            print_recommendations(&mut app);
        }
        CliCommand::Like { id } => run_once(&mut app, Command::Like(ArticleId(id))).await,
        CliCommand::Search { query } => {
            run_once(&mut app, Command::Search(query)).await;
            print_articles(&mut app);
        }
        CliCommand::Interactive => interactive(&mut app).await?,
    }

    Ok(())
}

async fn run_once<B: ArticleBackend + 'static>(app: &mut App<B>, command: Command) {
    // Failures are already logged and queued as notices
    if app.dispatch(command).is_ok() {
        app.settle().await;
    }
    print_notices(app);
}

fn print_articles<B: ArticleBackend + 'static>(app: &mut App<B>) {
    println!("{}", render::render_articles(app.state()));
    print_notices(app);
}

fn print_recommendations<B: ArticleBackend + 'static>(app: &mut App<B>) {
    if let Some(text) = render::render_recommendations(app.state().recommendations()) {
        println!("{}", text);
    }
}

fn print_notices<B: ArticleBackend + 'static>(app: &mut App<B>) {
    for notice in app.take_notices() {
        println!("{}", render::render_notice(&notice));
    }
}

enum Step {
    Line(Option<String>),
    Event(Event),
}

async fn interactive<B: ArticleBackend + 'static>(app: &mut App<B>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print_articles(app);
    println!("{}", INTERACTIVE_HELP);

    loop {
        let step = tokio::select! {
            line = lines.next_line() => Step::Line(line?),
            Some(event) = app.next_event() => Step::Event(event),
        };

        match step {
            Step::Line(None) => break,
            Step::Line(Some(line)) => match parse_input(&line) {
                Ok(None) => {}
                Ok(Some(Input::Quit)) => break,
                Ok(Some(Input::Help)) => println!("{}", INTERACTIVE_HELP),
                Ok(Some(Input::Command(command))) => {
                    let filtered = matches!(command, Command::Search(ref q) if !q.trim().is_empty());
                    if app.dispatch(command).is_ok() && filtered {
                        print_articles(app);
                    }
                }
                Err(message) => eprintln!("{}", message),
            },
            Step::Event(event) => match app.apply(event) {
                Some(Panel::Articles) => print_articles(app),
                Some(Panel::Recommendations) => print_recommendations(app),
                _ => {}
            },
        }
        print_notices(app);
    }

    Ok(())
}
