use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};
use pdf_writer::{Date, Pdf, TextStr};

/// Document metadata written to the PDF information dictionary
#[derive(Default, Debug, Clone)]
pub struct Info {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    /// Free-form, though readers conventionally expect a comma separated list
    pub keywords: Option<String>,
    /// Defaults to the moment the document is written
    pub created: Option<DateTime<FixedOffset>>,
}

impl Info {
    pub fn new() -> Info {
        Info::default()
    }

    pub fn title<S: ToString>(mut self, title: S) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn author<S: ToString>(mut self, author: S) -> Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn subject<S: ToString>(mut self, subject: S) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn keywords<S: ToString>(mut self, keywords: S) -> Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    /// Pin the creation date, e.g. to make output reproducible
    pub fn created(mut self, created: DateTime<FixedOffset>) -> Self {
        self.created = Some(created);
        self
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title));
        }
        if let Some(author) = &self.author {
            info.author(TextStr(author));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject));
        }
        if let Some(keywords) = &self.keywords {
            info.keywords(TextStr(keywords));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));

        let created = self
            .created
            .unwrap_or_else(|| Local::now().fixed_offset());
        info.creation_date(pdf_date(&created));
    }
}

fn pdf_date(when: &DateTime<FixedOffset>) -> Date {
    let offset_minutes = when.offset().local_minus_utc() / 60;
    Date::new(when.year() as u16)
        .month(when.month() as u8)
        .day(when.day() as u8)
        .hour(when.hour() as u8)
        .minute(when.minute() as u8)
        .second(when.second() as u8)
        .utc_offset_hour((offset_minutes / 60) as i8)
        .utc_offset_minute((offset_minutes % 60).unsigned_abs() as u8)
}
