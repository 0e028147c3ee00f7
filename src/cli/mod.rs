pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Keep encrypted configuration values in version control, render real
/// config files at deploy time.
#[derive(Parser, Debug)]
#[command(name = "jaeger", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Keyring file in armored format (default: platform keyring location)
    #[arg(short, long, global = true)]
    pub keyring: Option<PathBuf>,

    /// Passphrase for a protected keyring
    #[arg(
        short,
        long,
        global = true,
        env = "JAEGER_PASSPHRASE",
        hide_env_values = true
    )]
    pub passphrase: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty store
    Init {
        /// Store file to create, e.g. app.conf.jgrdb
        store: PathBuf,
    },

    /// Encrypt a value and append it to the store
    Add {
        /// Store file
        store: PathBuf,
        /// Property name (also the template placeholder)
        name: String,
        /// Plaintext value to encrypt
        value: String,
        /// Allow a duplicate name; the new entry stays shadowed behind
        /// the existing one
        #[arg(long)]
        shadow: bool,
    },

    /// Encrypt a value and replace an existing property
    Change {
        /// Store file
        store: PathBuf,
        /// Property name
        name: String,
        /// New plaintext value to encrypt
        value: String,
    },

    /// Remove a property from the store
    Delete {
        /// Store file
        store: PathBuf,
        /// Property name
        name: String,
    },

    /// List property names (never values)
    List {
        /// Store file
        store: PathBuf,
    },

    /// Decrypt every property and substitute into a template
    Render {
        /// Template file, e.g. app.conf.jgrt
        template: PathBuf,
        /// Store file (default: template base name + .jgrdb)
        store: Option<PathBuf>,
        /// Output file (default: template base name)
        output: Option<PathBuf>,
        /// Render placeholders missing from the store as empty strings
        /// instead of failing
        #[arg(long)]
        allow_missing: bool,
    },
}
