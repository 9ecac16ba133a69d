use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shift_roster::api::{AppState, create_router};
use shift_roster::config::{Settings, SettingsLoader};
use shift_roster::console::{Menu, format_employee_table, format_schedule, format_shift_list};
use shift_roster::error::{EngineError, EngineResult};
use shift_roster::models::NewEmployee;
use shift_roster::roster::Roster;
use shift_roster::store::JsonFileStore;

#[derive(Parser, Debug)]
#[command(name = "shift-roster")]
#[command(version)]
#[command(about = "Assign employees to shifts within a daily hours cap")]
struct Args {
    /// YAML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the JSON data files (overrides settings)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show all employees
    Employees,

    /// Add a new employee
    AddEmployee {
        /// Employee name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,
    },

    /// Assign an employee to a shift
    Assign {
        /// Employee ID (e.g. E001)
        #[arg(long)]
        employee: String,

        /// Shift ID
        #[arg(long)]
        shift: String,
    },

    /// View an employee's schedule as CSV
    Schedule {
        /// Employee ID
        #[arg(long)]
        employee: String,
    },

    /// List all shifts as CSV
    Shifts,

    /// Run the interactive menu
    Menu,

    /// Create the data directory and empty data files
    Init,

    /// Serve the HTTP API
    Serve {
        /// Address to bind (overrides settings)
        #[arg(long)]
        listen: Option<String>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let settings = match SettingsLoader::load_or_default(args.config.as_ref()) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    // Logs go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .init();

    match run(args, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, settings: Settings) -> EngineResult<()> {
    let data_dir = args.data_dir.unwrap_or(settings.data_dir);

    if let Commands::Init = args.command {
        let store = JsonFileStore::init(&data_dir)?;
        println!("Initialised {}", store.root().display());
        return Ok(());
    }

    let roster = Roster::new(Arc::new(JsonFileStore::open(&data_dir)));

    match args.command {
        Commands::Employees => {
            print!("{}", format_employee_table(&roster.list_employees()?));
        }
        Commands::AddEmployee { name, phone } => {
            let employee = roster.create_employee(NewEmployee::new(name, phone))?;
            println!("Employee added... ({})", employee.employee_id);
        }
        Commands::Assign { employee, shift } => {
            println!("{}", roster.assign_shift(&employee, &shift)?);
        }
        Commands::Schedule { employee } => {
            print!("{}", format_schedule(&roster.schedule(&employee)?));
        }
        Commands::Shifts => {
            print!("{}", format_shift_list(&roster.list_shifts()?));
        }
        Commands::Menu => {
            let stdin = io::stdin();
            Menu::new(&roster, stdin.lock(), io::stdout()).run()?;
        }
        Commands::Serve { listen } => {
            let listen_addr = listen.unwrap_or(settings.listen_addr);
            serve(roster, &listen_addr)?;
        }
        Commands::Init => {}
    }

    Ok(())
}

fn serve(roster: Roster, listen_addr: &str) -> EngineResult<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(listen_addr).await?;
        info!(listen_addr, "Serving shift roster API");

        let router = create_router(AppState::new(roster));
        axum::serve(listener, router).await?;
        Ok::<(), EngineError>(())
    })
}
