//! folio - render a portfolio page from its content document.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;
    use folio::cli::{run, Cli};

    let cli = Cli::parse();
    folio::logging::init(cli.verbose);

    let stdout = std::io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::ExitCode::from(1)
        }
    }
}

// The browser entry point is `folio::web::start`.
#[cfg(target_arch = "wasm32")]
fn main() {}
