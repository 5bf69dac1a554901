//! End-to-end flows through the public API, mirroring what a UI session does.

use notesync::commands::{execute, Command};
use notesync::controller::{ReconcilePolicy, SyncController};
use notesync::error::Result;
use notesync::index::NoteRef;
use notesync::model::{ClientId, DeleteNoteInput, FormField, Note, NoteForm, UpdateNoteInput};
use notesync::remote::memory::InMemoryService;
use notesync::remote::RemoteDataService;
use std::sync::Arc;
use tokio::sync::Semaphore;

fn note(id: &str, name: &str, description: &str) -> Note {
    Note {
        id: id.to_string(),
        client_id: "other-client".to_string(),
        name: name.to_string(),
        description: description.to_string(),
        completed: false,
    }
}

/// Lets list through, holds mutations until the test releases a permit.
#[derive(Clone)]
struct SlowService {
    inner: InMemoryService,
    gate: Arc<Semaphore>,
}

impl SlowService {
    fn new(inner: InMemoryService) -> Self {
        Self {
            inner,
            gate: Arc::new(Semaphore::new(0)),
        }
    }

    fn release(&self) {
        self.gate.add_permits(1);
    }
}

impl RemoteDataService for SlowService {
    async fn list(&self) -> Result<Vec<Note>> {
        self.inner.list().await
    }

    async fn create(&self, input: Note) -> Result<Note> {
        let _permit = self.gate.acquire().await.unwrap();
        self.inner.create(input).await
    }

    async fn update(&self, input: UpdateNoteInput) -> Result<Note> {
        let _permit = self.gate.acquire().await.unwrap();
        self.inner.update(input).await
    }

    async fn delete(&self, input: DeleteNoteInput) -> Result<Note> {
        let _permit = self.gate.acquire().await.unwrap();
        self.inner.delete(input).await
    }
}

#[tokio::test]
async fn fetch_then_create_is_optimistic() {
    let backend = InMemoryService::with_notes(vec![note("1", "A", "d1")]);
    let slow = SlowService::new(backend.clone());
    let controller = SyncController::new(slow.clone(), ClientId::from("session"));

    controller.fetch_all().await.unwrap();
    let state = controller.state();
    assert_eq!(state.notes.len(), 1);
    assert!(!state.loading);

    let pending = async {
        tokio::task::yield_now().await;
        let state = controller.state();
        assert_eq!(state.notes.len(), 2);
        assert_eq!(state.form, NoteForm::default());
        assert_eq!(backend.notes().len(), 1, "remote has not answered yet");
        slow.release();
    };
    let (created, ()) = tokio::join!(controller.create(NoteForm::new("B", "d2")), pending);

    let created = created.unwrap();
    assert_eq!(created.client_id, "session");
    assert_eq!(backend.notes().len(), 2);
}

#[tokio::test]
async fn delete_is_immediate_whether_or_not_remote_succeeds() {
    for remote_fails in [false, true] {
        let backend =
            InMemoryService::with_notes(vec![note("1", "A", "d1"), note("2", "B", "d2")]);
        let slow = SlowService::new(backend.clone());
        let controller = SyncController::new(slow.clone(), ClientId::from("session"));
        controller.fetch_all().await.unwrap();
        if remote_fails {
            backend.fail_next();
        }

        let pending = async {
            tokio::task::yield_now().await;
            let ids: Vec<_> = controller.state().notes.into_iter().map(|n| n.id).collect();
            assert_eq!(ids, vec!["2".to_string()]);
            slow.release();
        };
        let target = note("1", "A", "d1");
        let (deleted, ()) = tokio::join!(controller.delete(&target), pending);

        assert_eq!(deleted.is_err(), remote_fails);
        let ids: Vec<_> = controller.state().notes.into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["2".to_string()]);
        assert_eq!(controller.state().error, remote_fails);
    }
}

#[tokio::test]
async fn refresh_after_failure_reconciles_with_backend() {
    let backend = InMemoryService::with_notes(vec![note("1", "A", "d1")]);
    let controller = SyncController::new(backend.clone(), ClientId::from("session"));
    controller.fetch_all().await.unwrap();

    backend.fail_next();
    controller
        .create(NoteForm::new("B", "d2"))
        .await
        .unwrap_err();
    assert_eq!(controller.state().notes.len(), 2, "diverged until refresh");

    controller.fetch_all().await.unwrap();
    assert_eq!(controller.state().notes.len(), 1);
}

#[tokio::test]
async fn command_session_edits_and_deletes() {
    let backend = InMemoryService::with_notes(vec![note("1", "A", "d1"), note("2", "B", "d2")]);
    let controller = SyncController::new(backend.clone(), ClientId::from("session"))
        .with_policy(ReconcilePolicy::Rollback);

    let script = [
        Command::Refresh,
        Command::Edit(NoteRef::Position(1)),
        Command::Input(FormField::Description, "updated".into()),
        Command::Submit,
        Command::Delete(NoteRef::Position(2)),
    ];
    for command in script {
        let result = execute(&controller, command).await.unwrap();
        assert!(!result.has_errors());
    }

    assert_eq!(backend.notes(), vec![note("1", "A", "updated")]);
    assert_eq!(controller.state().notes, backend.notes());
}

#[tokio::test]
async fn rollback_policy_undoes_every_kind_of_failed_mutation() {
    let backend = InMemoryService::with_notes(vec![note("1", "A", "d1"), note("2", "B", "d2")]);
    let controller = SyncController::new(backend.clone(), ClientId::from("session"))
        .with_policy(ReconcilePolicy::Rollback);
    controller.fetch_all().await.unwrap();
    let synced = controller.state().notes;

    backend.fail_all(true);
    assert!(controller
        .create(NoteForm::new("C", "d3"))
        .await
        .is_err());
    assert!(controller.delete(&synced[0]).await.is_err());
    assert!(controller
        .update(NoteForm::new("X", "Y"), "2")
        .await
        .is_err());

    let state = controller.state();
    assert!(state.error);
    assert_eq!(state.notes, synced);
}
