//! End-to-end scenarios: buffer host ⇄ channel ⇄ coordinator ⇄ real filesystem.

use mdpad_application::{BufferHost, PersistenceCoordinator, ShellClient, connect};
use mdpad_core::document::{FailureKind, WorkflowOutcome};
use mdpad_core::{DialogService, FileFilter, ShellConfig, ShellEvent, ShellReply, ShellRequest};
use mdpad_infrastructure::{FsDocumentStorage, PreformattedHtmlRenderer};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::sync::mpsc;

#[derive(Default)]
struct ScriptedDialogs {
    answers: Mutex<VecDeque<Option<PathBuf>>>,
}

impl ScriptedDialogs {
    fn answer(&self, answer: Option<PathBuf>) {
        self.answers.lock().unwrap().push_back(answer);
    }

    fn next(&self) -> Option<PathBuf> {
        self.answers.lock().unwrap().pop_front().flatten()
    }
}

#[async_trait::async_trait]
impl DialogService for ScriptedDialogs {
    async fn choose_file_for_open(
        &self,
        _filter: &FileFilter,
    ) -> mdpad_core::Result<Option<PathBuf>> {
        Ok(self.next())
    }

    async fn choose_file_for_save(
        &self,
        _title: &str,
        _filter: &FileFilter,
    ) -> mdpad_core::Result<Option<PathBuf>> {
        Ok(self.next())
    }
}

struct Shell {
    host: BufferHost,
    coordinator: Arc<PersistenceCoordinator>,
    dialogs: Arc<ScriptedDialogs>,
    dir: TempDir,
}

impl Shell {
    fn start() -> Self {
        let dialogs = Arc::new(ScriptedDialogs::default());
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let coordinator = Arc::new(
            PersistenceCoordinator::new(
                ShellConfig::default(),
                dialogs.clone(),
                Arc::new(FsDocumentStorage::new()),
            )
            .with_event_sender(event_tx),
        );
        let (client, actor) = connect(coordinator.clone());
        actor.spawn();

        Self {
            host: BufferHost::new(client, event_rx, Arc::new(PreformattedHtmlRenderer::new())),
            coordinator,
            dialogs,
            dir: TempDir::new().unwrap(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn client(&self) -> ShellClient {
        self.host.client().clone()
    }
}

#[tokio::test]
async fn test_untitled_save_scenario() {
    let mut shell = Shell::start();
    let target = shell.path("a.md");

    assert!(shell.host.edit("# Hi").await.unwrap());
    assert!(shell.host.affordances().save);

    shell.dialogs.answer(Some(target.clone()));
    let outcome = shell.host.save().await.unwrap();

    assert_eq!(outcome, WorkflowOutcome::Completed { path: target.clone() });
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "# Hi");
    assert_eq!(shell.coordinator.bound_path().await, Some(target.clone()));
    assert!(!shell.client().has_changes("# Hi").await.unwrap());
    // The Saved acknowledgment re-queried dirty state
    assert!(!shell.host.affordances().save);
    assert!(shell.host.affordances().reveal);
    assert_eq!(shell.host.document_path(), Some(target.as_path()));
}

#[tokio::test]
async fn test_open_scenario() {
    let mut shell = Shell::start();
    let source = shell.path("a.md");
    std::fs::write(&source, "body").unwrap();

    shell.dialogs.answer(Some(source.clone()));
    let outcome = shell.host.open().await.unwrap();

    assert!(outcome.is_completed());
    assert_eq!(shell.host.content(), "body");
    assert_eq!(shell.host.rendered(), "<pre class=\"mdpad-source\">body</pre>");
    let affordances = shell.host.affordances();
    assert!(affordances.reveal && affordances.open_externally);
    assert!(!affordances.save);

    assert!(!shell.client().has_changes("body").await.unwrap());
    assert!(shell.host.edit("body!").await.unwrap());
    assert!(shell.host.affordances().save);
}

#[tokio::test]
async fn test_failed_save_scenario() {
    let mut shell = Shell::start();
    let source = shell.path("a.md");
    std::fs::write(&source, "body").unwrap();
    shell.host.open_path(source.clone()).await.unwrap();
    let before = shell.coordinator.session().await;

    // Replace the file with a directory so the write fails
    std::fs::remove_file(&source).unwrap();
    std::fs::create_dir(&source).unwrap();
    shell.host.edit("body v2").await.unwrap();
    let outcome = shell.host.save().await.unwrap();

    let failure = outcome.failure().expect("save should fail");
    assert_eq!(failure.kind, FailureKind::SaveFailed);
    assert_eq!(shell.coordinator.session().await, before);
    assert!(shell.host.affordances().save);
}

#[tokio::test]
async fn test_failed_open_is_pushed_as_event() {
    let mut shell = Shell::start();
    let missing = shell.path("missing.md");
    let client = shell.client();

    client.open_path(missing.clone()).await.unwrap();
    let event = shell.host.next_event().await.unwrap().unwrap();

    match event {
        ShellEvent::WorkflowFailed(failure) => {
            assert_eq!(failure.kind, FailureKind::OpenFailed);
            assert_eq!(failure.path, missing.display().to_string());
        }
        other => panic!("unexpected event {:?}", other),
    }
    assert_eq!(shell.coordinator.bound_path().await, None);
}

#[tokio::test]
async fn test_export_writes_rendered_output_only() {
    let mut shell = Shell::start();
    let source = shell.path("a.md");
    let export = shell.path("a.html");
    std::fs::write(&source, "<b>").unwrap();
    shell.host.open_path(source.clone()).await.unwrap();
    let before = shell.coordinator.session().await;

    shell.dialogs.answer(Some(export.clone()));
    let outcome = shell.host.export_html().await.unwrap();

    assert!(outcome.is_completed());
    assert_eq!(
        std::fs::read_to_string(&export).unwrap(),
        "<pre class=\"mdpad-source\">&lt;b&gt;</pre>"
    );
    assert_eq!(shell.coordinator.session().await, before);
}

#[tokio::test]
async fn test_environment_open_is_pushed_unsolicited() {
    let mut shell = Shell::start();
    let source = shell.path("a.md");
    std::fs::write(&source, "from the OS").unwrap();

    // A second client stands in for the OS "open with" handler
    let environment_client = shell.client();
    environment_client.open_path(source.clone()).await.unwrap();

    let event = shell.host.next_event().await.unwrap().unwrap();
    assert_eq!(
        event,
        ShellEvent::FileOpened {
            content: "from the OS".to_string(),
            path: source,
        }
    );
    assert_eq!(shell.host.content(), "from the OS");
}

#[tokio::test]
async fn test_reveal_without_bound_file_is_ignored() {
    let mut shell = Shell::start();
    assert_eq!(
        shell.host.reveal_in_file_manager().await.unwrap(),
        WorkflowOutcome::Ignored
    );
    assert_eq!(
        shell.host.open_externally().await.unwrap(),
        WorkflowOutcome::Ignored
    );
}

#[tokio::test]
async fn test_queued_workflows_run_in_request_order() {
    let shell = Shell::start();
    let first = shell.path("first.md");
    let second = shell.path("second.md");
    std::fs::write(&second, "second").unwrap();
    let client = shell.client();

    shell.dialogs.answer(Some(first.clone()));
    client
        .post(ShellRequest::RequestSave {
            content: "first".to_string(),
        })
        .await
        .unwrap();
    let reply = client
        .call(ShellRequest::OpenPath {
            path: second.clone(),
        })
        .await
        .unwrap();

    assert_eq!(
        reply,
        ShellReply::Outcome(WorkflowOutcome::Completed {
            path: second.clone()
        })
    );
    assert_eq!(std::fs::read_to_string(&first).unwrap(), "first");
    assert_eq!(shell.coordinator.bound_path().await, Some(second));
    assert_eq!(shell.coordinator.persisted_snapshot().await, "second");
}

#[tokio::test]
async fn test_cancelled_dialog_reply() {
    let shell = Shell::start();
    shell.dialogs.answer(None);

    let reply = shell
        .client()
        .call(ShellRequest::RequestSave {
            content: "x".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(reply, ShellReply::Outcome(WorkflowOutcome::Cancelled));
    assert_eq!(shell.coordinator.bound_path().await, None);
}
