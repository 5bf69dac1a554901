use crate::commands::{CmdMessage, CmdResult, HELP};
use crate::controller::SyncController;
use crate::remote::RemoteDataService;

pub fn run<R: RemoteDataService>(controller: &SyncController<R>) -> CmdResult {
    let state = controller.state();
    let mut result = CmdResult::default();

    if state.loading {
        result.add_message(CmdMessage::info("Loading: notes not fetched yet"));
    }
    if state.error {
        result.add_message(CmdMessage::warning(
            "A sync error occurred; refresh to reload the server state",
        ));
    }
    match state.editing() {
        Some(note) => result.add_message(CmdMessage::info(format!("Editing: {}", note.name))),
        None => result.add_message(CmdMessage::info("Mode: new note")),
    }
    result.add_message(CmdMessage::info(format!(
        "Form: name={:?} description={:?}",
        state.form.name, state.form.description
    )));
    result.add_message(CmdMessage::info(format!(
        "Session: {}",
        controller.client_id()
    )));

    result.with_state(state)
}

pub fn help() -> CmdResult {
    let mut result = CmdResult::default();
    for (usage, summary) in HELP {
        result.add_message(CmdMessage::info(format!("{:<28} {}", usage, summary)));
    }
    result
}
