use clap::Parser;
use directories::ProjectDirs;
use notesync::commands::{execute, CmdResult, Command};
use notesync::config::{Backend, NotesConfig};
use notesync::controller::{ReconcilePolicy, SyncController};
use notesync::error::{NotesError, Result};
use notesync::index::NoteRef;
use notesync::model::{ClientId, FormField};
use notesync::remote::graphql::GraphQlService;
use notesync::remote::memory::InMemoryService;
use notesync::remote::RemoteDataService;
use std::process::ExitCode;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::args::{Cli, Commands};
use cli::print::{print_error, print_result};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "notesync=info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Returns whether every remote call of the run succeeded.
async fn run(cli: Cli) -> Result<bool> {
    let config = load_config(&cli)?;

    // one identity per process, shared by every note this session creates
    let client_id = ClientId::generate();
    tracing::info!(%client_id, backend = %config.backend, "starting session");

    match config.backend {
        Backend::Memory => {
            let controller = SyncController::new(InMemoryService::new(), client_id)
                .with_policy(config.reconcile);
            run_command(cli.command, &controller).await
        }
        Backend::Graphql => {
            let endpoint = config
                .endpoint
                .clone()
                .ok_or_else(|| NotesError::Config("missing endpoint".to_string()))?;
            let mut service = GraphQlService::new(endpoint);
            if let Some(key) = config.api_key.clone() {
                service = service.with_api_key(key);
            }
            let controller =
                SyncController::new(service, client_id).with_policy(config.reconcile);
            run_command(cli.command, &controller).await
        }
    }
}

fn load_config(cli: &Cli) -> Result<NotesConfig> {
    let config = match &cli.config {
        Some(path) => NotesConfig::load_file(path)?,
        None => match ProjectDirs::from("dev", "notesync", "notesync") {
            Some(dirs) => NotesConfig::load(dirs.config_dir())?,
            None => NotesConfig::default(),
        },
    };

    let mut config = config.apply_env();
    if let Some(backend) = cli.backend {
        config.backend = backend;
    }
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = Some(endpoint.clone());
    }
    if let Some(key) = &cli.api_key {
        config.api_key = Some(key.clone());
    }
    if cli.rollback {
        config.reconcile = ReconcilePolicy::Rollback;
    }

    config.validate()?;
    Ok(config)
}

async fn run_command<R: RemoteDataService>(
    command: Option<Commands>,
    controller: &SyncController<R>,
) -> Result<bool> {
    let steps = match command {
        None | Some(Commands::Shell) => {
            let stdin = BufReader::new(tokio::io::stdin());
            cli::session::run(controller, stdin).await?;
            return Ok(true);
        }
        Some(Commands::List) => vec![],
        Some(Commands::Add { name, description }) => vec![Command::Add { name, description }],
        Some(Commands::Edit {
            note,
            name,
            description,
        }) => vec![
            Command::Edit(note.parse::<NoteRef>()?),
            Command::Input(FormField::Name, name),
            Command::Input(FormField::Description, description),
            Command::Submit,
        ],
        Some(Commands::Delete { note }) => vec![Command::Delete(note.parse::<NoteRef>()?)],
    };

    // one-shot commands see the server state first
    let refreshed = execute(controller, Command::Refresh).await?;
    let mut ok = !refreshed.has_errors();
    if steps.is_empty() || !ok {
        print_result(&refreshed);
        return Ok(ok);
    }

    let mut last = CmdResult::default();
    for step in steps {
        last = execute(controller, step).await?;
        ok &= !last.has_errors();
    }
    // only the final step's outcome is shown; edit hints make no sense outside a session
    print_result(&last);
    Ok(ok)
}
