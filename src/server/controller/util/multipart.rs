use axum::extract::Multipart;

use crate::server::{
    error::Error,
    model::upload::{MultipartForm, UploadFile},
};

/// Reads every part of a multipart body.
///
/// Parts with a file name are kept as files, everything else as text. A repeated field name
/// keeps the first value.
pub async fn read_multipart(mut multipart: Multipart) -> Result<MultipartForm, Error> {
    let mut form = MultipartForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;

                form.files.entry(name).or_insert(UploadFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            None => {
                let text = field.text().await?;
                form.fields.entry(name).or_insert(text);
            }
        }
    }

    Ok(form)
}
