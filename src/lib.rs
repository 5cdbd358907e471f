// Library root
// -----------
// This crate exposes a small library surface for the `ninepic` binary,
// which uploads one image to https://9pic.ru/ and prints share links.
//
// Module responsibilities:
// - `api`: the blocking HTTP client that performs the multipart upload
//   and parses the JSON answer.
// - `links`: pure formatting of the answer into page/direct/embed links.
// - `ui`: prints the banner and the selected links, and runs the whole
//   upload-and-print sequence.
// - `cli`: clap argument definitions and the `Config` built from them.
// - `error`: error types shared by the modules above.
pub mod api;
pub mod cli;
pub mod error;
pub mod links;
pub mod ui;
