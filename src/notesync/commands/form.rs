use crate::commands::{report_remote, CmdMessage, CmdResult};
use crate::controller::SyncController;
use crate::error::{NotesError, Result};
use crate::index::index_notes;
use crate::model::FormField;
use crate::remote::RemoteDataService;

pub fn input<R: RemoteDataService>(
    controller: &SyncController<R>,
    field: FormField,
    value: String,
) -> CmdResult {
    controller.set_input(field, value);
    CmdResult::default()
}

pub async fn submit<R: RemoteDataService>(controller: &SyncController<R>) -> Result<CmdResult> {
    let editing = controller.state().edit_note;
    let outcome = controller.submit().await;

    let mut result = CmdResult::default();
    if let Some(note) = report_remote(&mut result, controller.policy(), outcome)? {
        let verb = if editing { "updated" } else { "created" };
        result.add_message(CmdMessage::success(format!("Note {}: {}", verb, note.name)));
    }
    Ok(result.with_listed_notes(index_notes(&controller.state())))
}

/// Fill the form and create in one step. Refused while editing, since the form holds
/// the pending edit.
pub async fn add<R: RemoteDataService>(
    controller: &SyncController<R>,
    name: String,
    description: String,
) -> Result<CmdResult> {
    if controller.state().edit_note {
        return Err(NotesError::Validation(
            "finish or cancel the current edit first".to_string(),
        ));
    }
    controller.set_input(FormField::Name, name);
    controller.set_input(FormField::Description, description);
    submit(controller).await
}
