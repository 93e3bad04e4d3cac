use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use splitsheet::bot::render_error;
use splitsheet::cli::{
    handle_balance_command, handle_chat_command, handle_months_command, handle_upload_command,
};
use splitsheet::config::{Settings, SettingsOverrides, SplitPaths, StoreKind};
use splitsheet::services::NonNumericPolicy;
use splitsheet::SplitError;

#[derive(Parser)]
#[command(
    name = "splitsheet",
    author = "Kaylee Beyene",
    version,
    about = "Settle shared expenses from a monthly spreadsheet",
    long_about = "splitsheet reads two people's expense sheets from a shared \
                  workbook, sums their expenses from a given month up to the \
                  last recorded month, and reports who owes whom."
)]
struct Cli {
    #[command(flatten)]
    overrides: OverrideArgs,

    /// Show debug logging (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Settings that can be overridden per invocation
#[derive(Args)]
struct OverrideArgs {
    /// Spreadsheet identifier (a path for the local store, a file ID for Drive)
    #[arg(long, global = true, env = "SPLITSHEET_FILE_ID")]
    file_id: Option<String>,

    /// Where the spreadsheet lives: local or drive
    #[arg(long, global = true, env = "SPLITSHEET_STORE", value_parser = parse_store)]
    store: Option<StoreKind>,

    /// Access token used when uploading to Drive
    #[arg(long, global = true, env = "SPLITSHEET_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Name of the first participant
    #[arg(long, global = true, env = "SPLITSHEET_NAME_A")]
    name_a: Option<String>,

    /// Sheet holding the first participant's expenses
    #[arg(long, global = true, env = "SPLITSHEET_SHEET_A")]
    sheet_a: Option<String>,

    /// Name of the second participant
    #[arg(long, global = true, env = "SPLITSHEET_NAME_B")]
    name_b: Option<String>,

    /// Sheet holding the second participant's expenses
    #[arg(long, global = true, env = "SPLITSHEET_SHEET_B")]
    sheet_b: Option<String>,

    /// Fail instead of skipping text found in expense cells
    #[arg(long, global = true)]
    strict: bool,
}

fn parse_store(value: &str) -> Result<StoreKind, String> {
    value.parse().map_err(|e: SplitError| e.to_string())
}

impl OverrideArgs {
    fn into_overrides(self) -> SettingsOverrides {
        SettingsOverrides {
            file_id: self.file_id,
            store: self.store,
            access_token: self.access_token,
            name_a: self.name_a,
            sheet_a: self.sheet_a,
            name_b: self.name_b,
            sheet_b: self.sheet_b,
            non_numeric_policy: self.strict.then_some(NonNumericPolicy::Reject),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show who owes whom from a month up to the last recorded month
    #[command(alias = "saldo")]
    Balance {
        /// Month abbreviation (e.g. "mar", "fev", "feb"); defaults to this month
        month: Option<String>,

        /// Show per-month totals
        #[arg(short, long)]
        detailed: bool,
    },

    /// List accepted month names and their columns
    Months,

    /// Answer chat commands (/balance, /months, ...) read from stdin
    Chat {
        /// Name used when greeting
        #[arg(long = "as", default_value = "friend")]
        author: String,
    },

    /// Replace the shared spreadsheet with a local file
    Upload {
        /// Path to the edited workbook
        file: PathBuf,
    },

    /// Write the current settings to the config file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let paths = SplitPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    settings.apply_overrides(&cli.overrides.into_overrides());

    if let Err(err) = run(cli.command, &settings, &paths) {
        eprintln!("{}", render_error(&err));
        std::process::exit(1);
    }

    Ok(())
}

fn run(command: Option<Commands>, settings: &Settings, paths: &SplitPaths) -> Result<(), SplitError> {
    match command {
        Some(Commands::Balance { month, detailed }) => {
            handle_balance_command(settings, paths, month, detailed)?;
        }
        Some(Commands::Months) => handle_months_command(settings),
        Some(Commands::Chat { author }) => handle_chat_command(settings, paths, &author)?,
        Some(Commands::Upload { file }) => handle_upload_command(settings, paths, &file)?,
        Some(Commands::Init) => {
            settings.save(paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
            println!();
            println!("Edit the file to set the participants and the spreadsheet to read.");
        }
        Some(Commands::Config) => {
            println!("splitsheet Configuration");
            println!("========================");
            println!("Config file:      {}", paths.settings_file().display());
            println!("Downloads:        {}", paths.downloads_dir().display());
            println!();
            println!("Settings:");
            println!("  Store:          {:?}", settings.remote.kind);
            println!("  Spreadsheet:    {}", settings.remote.file_id);
            println!(
                "  Participant A:  {} (sheet '{}')",
                settings.participants.a.name, settings.participants.a.sheet
            );
            println!(
                "  Participant B:  {} (sheet '{}')",
                settings.participants.b.name, settings.participants.b.sheet
            );
            println!("  Header row:     {}", settings.layout.header_row);
            println!("  Expense rows:   {:?}", settings.layout.expense_rows);
            println!("  Text in cells:  {:?}", settings.non_numeric_policy);
        }
        None => {
            println!("splitsheet - settle shared expenses");
            println!();
            println!("Run 'splitsheet --help' for usage information.");
            println!("Run 'splitsheet balance <month>' to see who owes whom.");
        }
    }

    Ok(())
}
