mod adapters;
mod cli;
mod core;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    let keyring = args.keyring.as_deref();
    let passphrase = args.passphrase.as_deref();

    let result = match &args.command {
        Commands::Init { store } => cli::commands::init::execute(store),
        Commands::Add {
            store,
            name,
            value,
            shadow,
        } => cli::commands::add::execute(
            store,
            name,
            value,
            *shadow,
            keyring,
            passphrase,
            args.verbose,
        ),
        Commands::Change { store, name, value } => cli::commands::change::execute(
            store,
            name,
            value,
            keyring,
            passphrase,
            args.verbose,
        ),
        Commands::Delete { store, name } => cli::commands::delete::execute(store, name),
        Commands::List { store } => cli::commands::list::execute(store),
        Commands::Render {
            template,
            store,
            output,
            allow_missing,
        } => cli::commands::render::execute(
            template,
            store.as_deref(),
            output.as_deref(),
            *allow_missing,
            keyring,
            passphrase,
            args.verbose,
        ),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
