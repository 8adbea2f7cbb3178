use blob_store::LocalFileBlobStore;
use criterion::{criterion_group, criterion_main, Criterion};
use document_store::{DocumentStore, MemoryDocumentStore, MessageRecord};
use message_board_server::form::{Attachment, SubmissionForm};
use message_board_server::views::Views;
use message_board_server::workflows::SubmissionWorkflow;


fn submission_benchmark(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let blobs = LocalFileBlobStore::new(dir.path(), "http://127.0.0.1:5000/blobs");
    let documents = MemoryDocumentStore::new();
    let workflow = SubmissionWorkflow::new(&blobs, &documents, dir.path());

    c.bench_function("submit text only", |b| b.iter(|| {
        rt.block_on(workflow.submit(SubmissionForm::text("hello"))).unwrap()
    }));

    let image = vec![0u8; 64 * 1024];
    c.bench_function("submit 64k image", |b| b.iter(|| {
        let form = SubmissionForm {
            msg: Some("look".to_string()),
            file: Attachment::new("cat.png", image.clone()),
        };
        rt.block_on(workflow.submit(form)).unwrap()
    }));
}

fn render_benchmark(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let documents = MemoryDocumentStore::new();
    for i in 0..10 {
        let record = MessageRecord::new(format!("message {}", i), None);
        rt.block_on(documents.insert(&record)).unwrap();
    }
    let messages = rt.block_on(documents.list(10)).unwrap();
    let views = Views::new().unwrap();

    c.bench_function("render home with 10 messages", |b| b.iter(|| views.home(&messages).unwrap()));
}

criterion_group!(benches, submission_benchmark, render_benchmark);
criterion_main!(benches);
