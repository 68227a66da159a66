//! Tool rental command line.
//!
//! Prices a single checkout, runs an interactive checkout counter, lists the
//! inventory, or serves the HTTP API.

use std::io::{self, BufRead, Write};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tool_rental::api::{AppState, create_router};
use tool_rental::checkout::{CheckoutRequest, process_checkout};
use tool_rental::config::{ConfigLoader, ToolInventory};
use tool_rental::error::RentalResult;

#[derive(Debug, Parser)]
#[command(name = "tool-rental", version, about = "Tool rental checkout")]
struct Cli {
    /// Directory containing inventory.yaml; the built-in catalog is used when omitted
    #[arg(long, env = "TOOL_RENTAL_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Price one checkout and print the rental agreement
    Checkout(CheckoutArgs),
    /// Prompt for checkouts until end of input
    Interactive,
    /// List the tools available for rent
    Tools,
    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[derive(Debug, Args)]
struct CheckoutArgs {
    /// Tool code
    #[arg(short = 'c', long = "code")]
    code: String,

    /// Number of rental days
    #[arg(short = 'r', long = "rental-days", allow_negative_numbers = true)]
    rental_days: i64,

    /// Discount percent
    #[arg(short = 'd', long = "discount-percent", allow_negative_numbers = true)]
    discount_percent: i64,

    /// Checkout date (yyyy-MM-dd)
    #[arg(short = 'o', long = "checkout-date")]
    checkout_date: String,

    /// Print the agreement as JSON
    #[arg(long)]
    json: bool,
}

impl From<CheckoutArgs> for CheckoutRequest {
    fn from(args: CheckoutArgs) -> Self {
        CheckoutRequest {
            tool_code: args.code,
            rental_days: args.rental_days,
            discount_percent: args.discount_percent,
            checkout_date: args.checkout_date,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let inventory = match load_inventory(cli.config.as_ref()) {
        Ok(inventory) => inventory,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Checkout(args) => run_checkout(&inventory, args),
        Command::Interactive => run_interactive(&inventory),
        Command::Tools => {
            print_tools(&inventory);
            ExitCode::SUCCESS
        }
        Command::Serve { addr } => run_server(inventory, addr),
    }
}

fn load_inventory(config: Option<&PathBuf>) -> RentalResult<ToolInventory> {
    match config {
        Some(dir) => Ok(ConfigLoader::load(dir)?.into_inventory()),
        None => Ok(ToolInventory::standard()),
    }
}

fn run_checkout(inventory: &ToolInventory, args: CheckoutArgs) -> ExitCode {
    let json = args.json;
    let request: CheckoutRequest = args.into();

    match process_checkout(inventory, &request) {
        Ok(agreement) if json => match serde_json::to_string_pretty(&agreement) {
            Ok(text) => {
                println!("{}", text);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                ExitCode::FAILURE
            }
        },
        Ok(agreement) => {
            println!("{}", agreement);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run_interactive(inventory: &ToolInventory) -> ExitCode {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout();

    loop {
        let Some(tool_code) = prompt(&mut lines, &mut out, "Enter tool code:") else {
            return ExitCode::SUCCESS;
        };
        if tool_code.eq_ignore_ascii_case("quit") {
            return ExitCode::SUCCESS;
        }
        let Some(rental_days) = prompt(&mut lines, &mut out, "Enter rental days:") else {
            return ExitCode::SUCCESS;
        };
        let Some(discount_percent) = prompt(&mut lines, &mut out, "Enter discount percent:") else {
            return ExitCode::SUCCESS;
        };
        let Some(checkout_date) = prompt(&mut lines, &mut out, "Enter checkout date (yyyy-MM-dd):") else {
            return ExitCode::SUCCESS;
        };

        let (Ok(rental_days), Ok(discount_percent)) =
            (rental_days.parse::<i64>(), discount_percent.parse::<i64>())
        else {
            eprintln!("Error: rental days and discount percent must be whole numbers");
            continue;
        };

        let request = CheckoutRequest {
            tool_code,
            rental_days,
            discount_percent,
            checkout_date,
        };

        match process_checkout(inventory, &request) {
            Ok(agreement) => println!("{}\n", agreement),
            Err(err) => eprintln!("Error: {}", err),
        }
    }
}

/// Writes `message` and reads one trimmed line; `None` at end of input or
/// when the prompt cannot be written.
fn prompt<B: BufRead, W: Write>(
    lines: &mut io::Lines<B>,
    out: &mut W,
    message: &str,
) -> Option<String> {
    if let Err(err) = writeln!(out, "{}", message).and_then(|()| out.flush()) {
        error!(error = %err, "Failed to write prompt");
        return None;
    }
    match lines.next() {
        Some(Ok(line)) => Some(line.trim().to_string()),
        Some(Err(err)) => {
            error!(error = %err, "Failed to read input");
            None
        }
        None => None,
    }
}

fn print_tools(inventory: &ToolInventory) {
    println!(
        "{:<6} {:<12} {:<8} {:>7}  {:<7} {:<7} {:<7}",
        "Code", "Type", "Brand", "Daily", "Weekday", "Weekend", "Holiday"
    );
    for tool in inventory.tools() {
        println!(
            "{:<6} {:<12} {:<8} {:>7}  {:<7} {:<7} {:<7}",
            tool.code,
            tool.tool_type.to_string(),
            tool.brand,
            format!("${:.2}", tool.daily_charge),
            yes_no(tool.weekday_charge),
            yes_no(tool.weekend_charge),
            yes_no(tool.holiday_charge),
        );
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn run_server(inventory: ToolInventory, addr: SocketAddr) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Error: failed to start runtime: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let result: io::Result<()> = runtime.block_on(async move {
        let app = create_router(AppState::new(inventory));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("Listening on {}", addr);
        axum::serve(listener, app).await
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Server stopped");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_checkout_arguments_parse() {
        let cli = Cli::try_parse_from([
            "tool-rental",
            "checkout",
            "-c",
            "LADW",
            "-r",
            "3",
            "-d",
            "10",
            "-o",
            "2020-07-02",
        ])
        .unwrap();

        match cli.command {
            Command::Checkout(args) => {
                let request: CheckoutRequest = args.into();
                assert_eq!(request.tool_code, "LADW");
                assert_eq!(request.rental_days, 3);
                assert_eq!(request.discount_percent, 10);
                assert_eq!(request.checkout_date, "2020-07-02");
            }
            other => panic!("Expected checkout command, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_discount_reaches_validation() {
        let cli = Cli::try_parse_from([
            "tool-rental",
            "checkout",
            "--code",
            "LADW",
            "--rental-days",
            "3",
            "--discount-percent",
            "-1",
            "--checkout-date",
            "2020-07-02",
        ])
        .unwrap();

        match cli.command {
            Command::Checkout(args) => assert_eq!(args.discount_percent, -1),
            other => panic!("Expected checkout command, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_config_falls_back_to_standard() {
        assert_eq!(load_inventory(None).unwrap(), ToolInventory::standard());
    }

    #[test]
    fn test_prompt_reads_trimmed_line_and_stops_at_eof() {
        let input = io::Cursor::new("  LADW  \n");
        let mut lines = input.lines();
        let mut out = Vec::new();

        assert_eq!(
            prompt(&mut lines, &mut out, "Enter tool code:"),
            Some("LADW".to_string())
        );
        assert_eq!(prompt(&mut lines, &mut out, "Enter rental days:"), None);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Enter tool code:\nEnter rental days:\n"
        );
    }

    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_prompt_stops_when_output_closed() {
        let input = io::Cursor::new("LADW\n");
        let mut lines = input.lines();

        assert_eq!(prompt(&mut lines, &mut ClosedOutput, "Enter tool code:"), None);
        // The pending line is left unread
        assert_eq!(lines.next().unwrap().unwrap(), "LADW");
    }
}
