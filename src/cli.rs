// Command-line surface. Arguments are parsed with clap and turned into a
// plain `Config` value that the rest of the program receives.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::api::{RetentionPolicy, UploadRequest};
use crate::links::LinkKind;

#[derive(Parser, Debug)]
#[command(name = "ninepic")]
#[command(version, about = "Загрузка изображений на https://9pic.ru/")]
#[command(after_help = "Примеры использования:
  ninepic image.jpg
  ninepic image.png --deleteafter30days
  ninepic image.jpg --link-type direct
  ninepic image.jpg --link-type direct --link-type markdown")]
pub struct Cli {
    /// Путь к изображению для загрузки
    pub image_path: PathBuf,

    /// Удалить изображение через 30 дней (по умолчанию: никогда не удалять)
    #[arg(long = "deleteafter30days")]
    pub delete_after_30_days: bool,

    /// Тип ссылки для вывода (можно указать несколько раз). Если не указано, выводятся все ссылки
    #[arg(long = "link-type", value_enum)]
    pub link_types: Vec<LinkKind>,

    /// Подробный журнал в stderr (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> Config {
        let retention = if self.delete_after_30_days {
            RetentionPolicy::After30Days
        } else {
            RetentionPolicy::Never
        };
        Config {
            request: UploadRequest {
                file_path: self.image_path.clone(),
                retention,
            },
            link_kinds: self.link_types.clone(),
        }
    }

    /// Log filter for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "ninepic_cli=info,warn",
            _ => "ninepic_cli=debug,info",
        }
    }
}

/// Everything one run needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub request: UploadRequest,
    /// Kinds to print, in order; empty means all.
    pub link_kinds: Vec<LinkKind>,
}
