// UI layer: prints progress lines and the resulting links. All output goes
// through a caller-supplied writer; the spinner is drawn on stderr.

use std::io::{self, Write};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::api::{ApiClient, UploadRequest};
use crate::cli::Config;
use crate::error::Error;
use crate::links::{format_links, LinkKind, LinkSet};

/// Run one upload: print the banner, upload, build the links and print
/// the requested ones.
pub fn run<W: Write>(api: &ApiClient, config: &Config, out: &mut W) -> Result<(), Error> {
    print_banner(out, &config.request)?;

    let spinner = upload_spinner();
    let result = api.upload(&config.request);
    spinner.finish_and_clear();
    let response = result?;

    let links = format_links(&response);
    if links.is_empty() {
        return Err(Error::EmptyResult);
    }
    debug!(count = links.len(), "links formatted");

    writeln!(out, "Изображение успешно загружено!")?;
    writeln!(out)?;
    print_links(out, &links, &config.link_kinds)?;
    out.flush()?;
    Ok(())
}

/// Lines shown before the upload starts.
pub fn print_banner<W: Write>(out: &mut W, request: &UploadRequest) -> io::Result<()> {
    writeln!(out, "Загрузка изображения: {}", request.file_path.display())?;
    writeln!(out, "Срок хранения: {}", request.retention.label())?;
    writeln!(out)?;
    // Flushed so the banner is visible while the request is in flight.
    out.flush()
}

/// Print `label: value` lines. With no requested kinds every present link
/// is printed in canonical order; otherwise the requested kinds are printed
/// in the order given and missing ones are skipped.
pub fn print_links<W: Write>(
    out: &mut W,
    links: &LinkSet,
    requested: &[LinkKind],
) -> io::Result<()> {
    if requested.is_empty() {
        for (kind, value) in links.iter() {
            writeln!(out, "{}: {}", kind.label(), value)?;
        }
        return Ok(());
    }

    for kind in requested {
        if let Some(value) = links.get(*kind) {
            writeln!(out, "{}: {}", kind.label(), value)?;
        }
    }
    Ok(())
}

fn upload_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Загрузка...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
