//! Interactive line session: one command per line, state re-rendered after each.

use super::print::{print_error, print_messages, print_result, prompt};
use notesync::commands::{execute, CmdMessage, Command};
use notesync::controller::SyncController;
use notesync::error::Result;
use notesync::remote::RemoteDataService;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const QUIT: &[&str] = &["quit", "exit", "q"];

pub async fn run<R, I>(controller: &SyncController<R>, input: I) -> Result<()>
where
    R: RemoteDataService,
    I: AsyncBufRead + Unpin,
{
    print_messages(&[CmdMessage::info("Type 'help' for commands, 'quit' to leave.")]);
    print_result(&execute(controller, Command::Refresh).await?);

    let mut lines = input.lines();
    loop {
        print!("{}", prompt(&controller.state()));
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if QUIT.contains(&line) {
            break;
        }

        let outcome = match line.parse::<Command>() {
            Ok(command) => execute(controller, command).await,
            Err(err) => Err(err),
        };
        match outcome {
            Ok(result) => print_result(&result),
            Err(err) => print_error(&err),
        }
    }

    tracing::debug!("session ended");
    Ok(())
}
