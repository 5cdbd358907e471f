use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Message used when the server rejects an upload without saying why.
pub const UNKNOWN_REMOTE_ERROR: &str = "Неизвестная ошибка";

/// Errors that can occur while uploading an image.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The input path does not exist
    #[error("Ошибка: файл '{}' не найден", .0.display())]
    NotFound(PathBuf),

    /// The input path exists but is not a regular file
    #[error("Ошибка: '{}' не является файлом", .0.display())]
    NotAFile(PathBuf),

    /// Opening or reading the image failed
    #[error("Непредвиденная ошибка: {0}")]
    Io(#[from] std::io::Error),

    /// The request could not be sent or the response could not be read
    #[error("Ошибка при отправке запроса: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("Ошибка при отправке запроса: HTTP {status}")]
    Http { status: StatusCode },

    /// The response body is not the JSON we expect
    #[error("Ошибка разбора ответа сервера: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server parsed the upload but reported a failure
    #[error("Ошибка загрузки: {0}")]
    Remote(String),
}

/// Errors surfaced by a whole upload-and-print run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// The upload succeeded but the response had nothing to build links from
    #[error("Ошибка: не удалось получить ссылки")]
    EmptyResult,

    /// Writing the output failed
    #[error("Непредвиденная ошибка: {0}")]
    Io(#[from] std::io::Error),
}
