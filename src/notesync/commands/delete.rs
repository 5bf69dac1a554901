use crate::commands::{report_remote, CmdMessage, CmdResult};
use crate::controller::SyncController;
use crate::error::Result;
use crate::index::{index_notes, resolve, NoteRef};
use crate::remote::RemoteDataService;

pub async fn run<R: RemoteDataService>(
    controller: &SyncController<R>,
    note_ref: &NoteRef,
) -> Result<CmdResult> {
    let target = resolve(&controller.state(), note_ref)?;
    let outcome = controller.delete(&target.note).await;

    let mut result = CmdResult::default();
    if report_remote(&mut result, controller.policy(), outcome)?.is_some() {
        result.add_message(CmdMessage::success(format!(
            "Note deleted ({}): {}",
            target.position, target.note.name
        )));
    }
    Ok(result.with_listed_notes(index_notes(&controller.state())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ReconcilePolicy;
    use crate::error::NotesError;
    use crate::model::ClientId;
    use crate::remote::memory::fixtures::notes;
    use crate::remote::memory::InMemoryService;

    async fn loaded(
        service: &InMemoryService,
        policy: ReconcilePolicy,
    ) -> SyncController<InMemoryService> {
        let controller =
            SyncController::new(service.clone(), ClientId::from("t")).with_policy(policy);
        controller.fetch_all().await.unwrap();
        controller
    }

    #[tokio::test]
    async fn deletes_by_position() {
        let service = InMemoryService::with_notes(notes(2));
        let controller = loaded(&service, ReconcilePolicy::default()).await;

        let result = run(&controller, &NoteRef::Position(1)).await.unwrap();
        assert_eq!(result.messages[0].content, "Note deleted (1): Note 1");
        let listed = result.listed_notes.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].note.id, "2");
        assert_eq!(listed[0].position, 1);
        assert_eq!(service.notes().len(), 1);
    }

    #[tokio::test]
    async fn failed_delete_under_rollback_lists_the_note_again() {
        let service = InMemoryService::with_notes(notes(2));
        let controller = loaded(&service, ReconcilePolicy::Rollback).await;
        service.fail_next();

        let result = run(&controller, &NoteRef::Id("1".into())).await.unwrap();
        assert!(result.has_errors());
        assert_eq!(result.listed_notes.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_note_is_an_error() {
        let service = InMemoryService::with_notes(notes(1));
        let controller = loaded(&service, ReconcilePolicy::default()).await;
        assert!(matches!(
            run(&controller, &NoteRef::Position(5)).await,
            Err(NotesError::NoteNotFound(_))
        ));
    }
}
