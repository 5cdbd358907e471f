// Link formatting: turns a successful upload response into the set of
// share links the service supports. Everything here is pure so it can be
// tested without a network.

use std::collections::BTreeMap;

use clap::ValueEnum;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::api::{UploadResponse, SERVICE_ORIGIN};

/// Bytes kept as-is in the filename segment of the direct link. Everything
/// outside `A-Z a-z 0-9 - . _ ~ /` is percent-encoded.
const FILENAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// One representation of an uploaded image's location. The declaration
/// order is the canonical print order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum LinkKind {
    /// Page that shows the image
    #[value(name = "link")]
    Page,
    /// Direct link to the image file
    Direct,
    /// Markdown embed
    Markdown,
    /// BBCode embed for forums
    Forum,
    /// HTML embed
    Html,
    /// Link that deletes the image
    Delete,
}

impl LinkKind {
    /// Human-readable label used when printing.
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Page => "Ссылка",
            LinkKind::Direct => "Прямая ссылка",
            LinkKind::Markdown => "Markdown",
            LinkKind::Forum => "Для форума",
            LinkKind::Html => "Для сайта (HTML-код)",
            LinkKind::Delete => "Ссылка для удаления",
        }
    }
}

/// Links derived from one upload, iterated in canonical order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkSet {
    links: BTreeMap<LinkKind, String>,
}

impl LinkSet {
    pub fn get(&self, kind: LinkKind) -> Option<&str> {
        self.links.get(&kind).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LinkKind, &str)> {
        self.links.iter().map(|(kind, value)| (*kind, value.as_str()))
    }
}

/// Percent-encode a filename for use as the last segment of a URL path.
pub fn encode_filename(name: &str) -> String {
    utf8_percent_encode(name, FILENAME_ENCODE_SET).to_string()
}

/// Build every link the response allows. A response without both `uuid`
/// and `original` yields an empty set.
pub fn format_links(response: &UploadResponse) -> LinkSet {
    let mut links = BTreeMap::new();

    let (Some(uuid), Some(original)) = (&response.uuid, &response.original_filename) else {
        return LinkSet { links };
    };

    let direct = format!("{}/{}/{}", SERVICE_ORIGIN, uuid, encode_filename(original));

    links.insert(LinkKind::Page, format!("{}/{}", SERVICE_ORIGIN, uuid));
    links.insert(LinkKind::Markdown, format!("![Image]({})", direct));
    links.insert(LinkKind::Forum, format!("[IMG]{}[/IMG]", direct));
    links.insert(
        LinkKind::Html,
        format!("<img src=\"{}\" alt=\"{}\">", direct, original),
    );
    if let Some(delete_url) = &response.delete_url {
        links.insert(LinkKind::Delete, delete_url.clone());
    }
    links.insert(LinkKind::Direct, direct);

    LinkSet { links }
}
