use veerpreps_admin::server::controller::util::multipart::read_multipart;

use crate::util::multipart::{FormBuilder, PDF_BYTES};

#[tokio::test]
/// Expect text parts as fields and file parts as files with their metadata
async fn splits_fields_and_files() {
    let multipart = FormBuilder::new()
        .pdf("notespdf")
        .text("notesname", "Unit 1")
        .into_multipart()
        .await;

    let form = read_multipart(multipart).await.unwrap();

    assert_eq!(form.fields.get("notesname").map(String::as_str), Some("Unit 1"));
    let file = form.files.get("notespdf").unwrap();
    assert_eq!(file.file_name, "notes.pdf");
    assert_eq!(file.content_type.as_deref(), Some("application/pdf"));
    assert_eq!(file.bytes.as_ref(), PDF_BYTES);
}

#[tokio::test]
/// Expect the first of a repeated field name to win
async fn keeps_first_repeated_field() {
    let multipart = FormBuilder::new()
        .text("notesname", "Unit 1")
        .text("notesname", "Unit 2")
        .file("notespdf", "first.pdf", "application/pdf", PDF_BYTES)
        .file("notespdf", "second.pdf", "application/pdf", b"%PDF-1.7")
        .into_multipart()
        .await;

    let form = read_multipart(multipart).await.unwrap();

    assert_eq!(form.fields.get("notesname").map(String::as_str), Some("Unit 1"));
    assert_eq!(form.files.get("notespdf").unwrap().file_name, "first.pdf");
}
