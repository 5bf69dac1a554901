use crate::commands::{CmdMessage, CmdResult};
use crate::controller::SyncController;
use crate::error::Result;
use crate::index::index_notes;
use crate::remote::RemoteDataService;

pub async fn refresh<R: RemoteDataService>(controller: &SyncController<R>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match controller.fetch_all().await {
        Ok(()) => {}
        Err(err) if err.is_remote() => result.add_message(CmdMessage::error(format!(
            "{} (showing last known notes)",
            err
        ))),
        Err(err) => return Err(err),
    }
    Ok(result.with_listed_notes(index_notes(&controller.state())))
}

pub fn list<R: RemoteDataService>(controller: &SyncController<R>) -> CmdResult {
    let state = controller.state();
    let mut result = CmdResult::default().with_listed_notes(index_notes(&state));
    if state.loading {
        result.add_message(CmdMessage::info("Notes have not been fetched yet."));
    }
    result
}
