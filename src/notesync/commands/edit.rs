use crate::commands::{CmdMessage, CmdResult};
use crate::controller::SyncController;
use crate::error::Result;
use crate::index::{resolve, NoteRef};
use crate::remote::RemoteDataService;

pub fn toggle<R: RemoteDataService>(
    controller: &SyncController<R>,
    note_ref: &NoteRef,
) -> Result<CmdResult> {
    let target = resolve(&controller.state(), note_ref)?;
    controller.toggle_edit(&target.note);

    let mut result = CmdResult::default();
    if controller.state().edit_note {
        result.add_message(CmdMessage::info(format!(
            "Editing ({}): {}. Change name/desc, then submit.",
            target.position, target.note.name
        )));
    } else {
        result.add_message(CmdMessage::info("Edit cancelled."));
    }
    Ok(result)
}
