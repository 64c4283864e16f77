use crate::cli::{Cli, Command, RenderArgs, ServeArgs};
use crate::domain::LoadPhase;
use crate::gallery::Gallery;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use clap::Parser;

mod cli;
mod dataset;
mod domain;
mod errors;
mod gallery;
mod responses;
mod router;
mod templates;
mod theme;


fn main() {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let result = match cli.command.unwrap_or_else(|| Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => serve(args),
        Command::Render(args) => render(args),
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    // 1️⃣ Kick off the one-shot dataset load; pages show a loading state until it settles
    let gallery = Gallery::new();
    gallery.spawn_load(args.dataset.data.clone(), args.dataset.limit);

    // 2️⃣ Start the server
    tracing::info!(addr = %args.addr, workers = args.workers, "starting server");
    let server = Server::bind(&args.addr).max_workers(args.workers);

    // 3️⃣ Serve requests, passing the gallery handle into the closure
    server.serve(move |req, _info| match handle(req, &gallery) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(error = %err, "request failed");
            error_to_response(err)
        }
    })?;

    tracing::info!("server shut down cleanly");
    Ok(())
}

fn render(args: RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let gallery = Gallery::new();
    gallery.load_blocking(&args.dataset.data, args.dataset.limit);

    let view = gallery.view(&args.query, args.sort);
    let page = templates::static_gallery_page(&view);
    std::fs::write(&args.out, page.into_string())?;

    tracing::info!(
        out = %args.out.display(),
        shown = view.display.displayed().len(),
        total = view.display.all().len(),
        "page written"
    );

    match gallery.phase() {
        LoadPhase::Error(message) => Err(message.into()),
        _ => Ok(()),
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("listings_gallery=debug,info")
        } else {
            EnvFilter::new("listings_gallery=info,warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
