use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "rlib")]
#[command(about = "rlib: integer arithmetic through the librlib_ffi C ABI", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two integers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },

    /// Multiply two integers
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },

    /// Raise BASE to the power EXP
    Exponent {
        #[arg(allow_negative_numbers = true)]
        base: i32,
        /// Non-negative exponent
        exp: u32,
    },

    /// Divide two integers (fails on a zero divisor)
    Divide {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },

    /// Run the example walk-through
    Demo,

    /// Show version and build information
    Info,
}

/// One operation and its outcome, as printed.
#[derive(Debug, Serialize)]
struct Report {
    op: &'static str,
    args: [i64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<rlib::Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Report {
    fn ok(op: &'static str, args: [i64; 2], value: i32) -> Self {
        Report {
            op,
            args,
            value: Some(value),
            status: None,
            error: None,
        }
    }

    fn divide(a: i32, b: i32) -> Self {
        let args = [a.into(), b.into()];
        match rlib::divide(a, b) {
            Ok(q) => Report::ok("divide", args, q),
            Err(err) => Report {
                op: "divide",
                args,
                value: None,
                status: Some(err.status()),
                error: Some(err.to_string()),
            },
        }
    }

    fn symbol(&self) -> &'static str {
        match self.op {
            "add" => "+",
            "multiply" => "*",
            "exponent" => "^",
            _ => "/",
        }
    }

    fn print(&self, format: Format) -> anyhow::Result<()> {
        match format {
            Format::Json => println!("{}", serde_json::to_string(self)?),
            Format::Text => {
                let [a, b] = self.args;
                match (&self.value, &self.error) {
                    (Some(v), _) => println!("{} {} {} = {}", a, self.symbol(), b, v),
                    (None, Some(e)) => println!("{} {} {} error: {}", a, self.symbol(), b, e),
                    (None, None) => {}
                }
            }
        }
        Ok(())
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Add { a, b } => {
            Report::ok("add", [a.into(), b.into()], rlib::add(a, b))
                .print(cli.format)?;
        }

        Commands::Multiply { a, b } => {
            Report::ok("multiply", [a.into(), b.into()], rlib::multiply(a, b))
                .print(cli.format)?;
        }

        Commands::Exponent { base, exp } => {
            Report::ok("exponent", [base.into(), exp.into()], rlib::exponent(base, exp))
                .print(cli.format)?;
        }

        Commands::Divide { a, b } => {
            let report = Report::divide(a, b);
            report.print(cli.format)?;
            if let Some(err) = report.error {
                anyhow::bail!(err);
            }
        }

        Commands::Demo => {
            if cli.format == Format::Text {
                println!("rlib Rust Example");
                println!("=================");
                println!();
            }

            let reports = [
                Report::ok("add", [10, 5], rlib::add(10, 5)),
                Report::ok("multiply", [10, 5], rlib::multiply(10, 5)),
                Report::ok("exponent", [2, 8], rlib::exponent(2, 8)),
                Report::divide(10, 5),
                Report::divide(10, 0),
            ];
            for report in &reports {
                report.print(cli.format)?;
            }
            debug!(count = reports.len(), "demo complete");
        }

        Commands::Info => {
            println!("rlib v{}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Architecture: C ABI core (librlib_ffi) + safe Rust binding");
            println!("Operations: add, multiply, exponent, divide");
            println!("Arithmetic: 32-bit signed, wrapping on overflow");
            println!("Errors: status code + message lookup, divide only");
            println!();
            println!("License: {}", env!("CARGO_PKG_LICENSE"));
        }
    }

    Ok(())
}
