use clap::Parser;

use track_test::cli_parser::{lossy_args, split_known_args};
use track_test::{ApiClient, Config, TrackArgs, TrackError, report};

/// Standard process exit codes
const EXIT_FAILURE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "track-test")]
#[command(about = "Report a test run to the analytics ingestion endpoint", long_about = None)]
struct Cli {
    /// Unique user id
    #[arg(long = "user_id")]
    user_id: String,

    /// Event name
    #[arg(long = "event_name")]
    event_name: String,

    /// Elapsed event time
    #[arg(long = "elapsed_time")]
    elapsed_time: String,

    /// Command line result
    #[arg(long = "cmd_result")]
    cmd_result: Option<String>,

    /// Exit result
    #[arg(long = "exit_result")]
    exit_result: Option<String>,

    /// Input file
    #[arg(long = "input_file")]
    input_file: Option<String>,

    /// Output file
    #[arg(long = "output_file")]
    output_file: Option<String>,
}

impl Cli {
    fn into_track_args(self, full_command: Vec<String>) -> TrackArgs {
        TrackArgs {
            user_id: self.user_id,
            event_name: self.event_name,
            elapsed_time: self.elapsed_time,
            cmd_result: self.cmd_result,
            exit_result: self.exit_result,
            input_file: self.input_file,
            output_file: self.output_file,
            full_command,
        }
    }
}

fn main() {
    let mut argv = lossy_args(std::env::args_os()).into_iter();
    let program = argv.next().unwrap_or_else(|| "track-test".to_string());
    let split = split_known_args(argv);

    // Usage errors exit with clap's own status and message.
    let cli = Cli::parse_from(std::iter::once(program).chain(split.recognized));
    let args = cli.into_track_args(split.unrecognized);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(TrackError::MissingToken) => {
            eprintln!("{}", TrackError::MissingToken);
            std::process::exit(EXIT_FAILURE);
        }
        Err(e) => fatal(e),
    };

    let client = ApiClient::from_config(&config);
    if let Err(e) = report(&args, &config, &client) {
        fatal(e);
    }
}

fn fatal(error: TrackError) -> ! {
    eprintln!("track-test: {}", error);
    std::process::exit(EXIT_FAILURE);
}
