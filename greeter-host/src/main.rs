// Command-line runner for the greeter component
use std::path::PathBuf;

use clap::Parser;

mod runtime;

use runtime::GreeterRuntime;

#[derive(Parser, Debug)]
#[command(name = "tinyblink-host")]
#[command(about = "Load the tinyblink greeter component and call one of its exports")]
#[command(version)]
struct Cli {
    /// Path to the greeter component (.wasm)
    component: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Print the wrapping sum of two 32-bit integers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i32,

        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Print "Hello, <NAME>!"
    Greet {
        /// Inserted verbatim, may be empty
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut greeter = GreeterRuntime::load(&cli.component)?;
    log::debug!("guest logged {} line(s) during init", greeter.guest_log().len());

    match cli.command {
        Commands::Add { a, b } => println!("{}", greeter.add(a, b)?),
        Commands::Greet { name } => println!("{}", greeter.greet(&name)?),
    }

    Ok(())
}
