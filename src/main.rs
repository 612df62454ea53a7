use byteconverter_gen::cmds;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "byteconverter-gen")]
#[command(about = "ByteConverter source generation tool", long_about = None)]
struct Cli {
    /* Running without a subcommand emits the library to stdout */
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /* Emit the ByteConverter source library */
    Codegen {
        /* Output file for the generated source (stdout when omitted) */
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,

        /* Skip the ReadOnlySpan<byte> receiver overloads */
        #[arg(long = "no-span-overloads")]
        no_span_overloads: bool,

        /* Enable verbose output */
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },

    /* Print the conversion IR for the type catalog as JSON */
    Analyze {
        /* Restrict output to a single catalog type */
        #[arg(long = "type", value_name = "NAME")]
        type_filter: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Codegen {
            output,
            no_span_overloads,
            verbose,
        }) => {
            cmds::codegen::run(output, !no_span_overloads, verbose)?;
        }

        Some(Commands::Analyze { type_filter }) => {
            cmds::analyze::run(type_filter)?;
        }

        None => {
            cmds::codegen::run(None, true, false)?;
        }
    }

    Ok(())
}
