use crate::error::{Result, TrackerError, ValidationError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use time::{Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};
use tracing::{debug, error};
use uuid::Uuid;

pub const MAX_COMMENT_CHARS: usize = 1500;

const DISPLAY_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[day]-[month]-[year]");
const LEGACY_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ApplicationDatabase {
    pub applications: Vec<ApplicationRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRecord {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub company_name: String,
    pub job_title: String,
    pub cover_letter_path: String,
    pub screenshot_path: String,
    pub application_date: ApplicationDate,
    pub status: Status,
    #[serde(default)]
    pub comment: String,
}

/// Everything on a record a user may change after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFields {
    pub company_name: String,
    pub job_title: String,
    pub cover_letter_path: String,
    pub screenshot_path: String,
    pub status: Status,
    pub comment: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    #[serde(rename = "En attente", alias = "Pending")]
    Pending,
    #[serde(rename = "Accepté", alias = "Accepted")]
    Accepted,
    #[serde(rename = "Refusé", alias = "Rejected")]
    Rejected,
}

/// Date a record was created, kept as the text found on disk.
///
/// Older files wrote `YYYY-MM-DD`, newer ones `DD-MM-YYYY`. Text matching
/// neither is kept as-is and displays as `invalid date`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ApplicationDate(String);

impl ApplicationDate {
    pub fn today() -> Self {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self::from_date(now.date())
    }

    pub fn from_date(date: Date) -> Self {
        Self(format!(
            "{:02}-{:02}-{:04}",
            date.day(),
            u8::from(date.month()),
            date.year()
        ))
    }

    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parse(&self) -> Option<Date> {
        Date::parse(&self.0, DISPLAY_FORMAT)
            .or_else(|_| Date::parse(&self.0, LEGACY_FORMAT))
            .ok()
    }
}

impl fmt::Display for ApplicationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parse() {
            Some(date) => f.write_str(Self::from_date(date).as_str()),
            None => f.write_str("invalid date"),
        }
    }
}

impl Status {
    /// The label written to disk, also used as the sort key.
    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "En attente",
            Status::Accepted => "Accepté",
            Status::Rejected => "Refusé",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" | "en attente" => Ok(Status::Pending),
            "accepted" | "accepté" => Ok(Status::Accepted),
            "rejected" | "refusé" => Ok(Status::Rejected),
            other => Err(format!(
                "unknown status `{other}` (expected pending, accepted or rejected)"
            )),
        }
    }
}

impl ApplicationFields {
    /// Trims every text field, then checks the save-time rules.
    pub fn validated(self) -> std::result::Result<Self, ValidationError> {
        let fields = Self {
            company_name: self.company_name.trim().to_owned(),
            job_title: self.job_title.trim().to_owned(),
            cover_letter_path: self.cover_letter_path.trim().to_owned(),
            screenshot_path: self.screenshot_path.trim().to_owned(),
            status: self.status,
            comment: self.comment.trim().to_owned(),
        };

        for (name, value) in [
            ("company_name", &fields.company_name),
            ("job_title", &fields.job_title),
            ("cover_letter_path", &fields.cover_letter_path),
            ("screenshot_path", &fields.screenshot_path),
        ] {
            if value.is_empty() {
                return Err(ValidationError::EmptyField(name));
            }
        }

        let len = fields.comment.chars().count();
        if len > MAX_COMMENT_CHARS {
            return Err(ValidationError::CommentTooLong {
                len,
                max: MAX_COMMENT_CHARS,
            });
        }

        Ok(fields)
    }
}

impl ApplicationRecord {
    pub fn fields(&self) -> ApplicationFields {
        ApplicationFields {
            company_name: self.company_name.clone(),
            job_title: self.job_title.clone(),
            cover_letter_path: self.cover_letter_path.clone(),
            screenshot_path: self.screenshot_path.clone(),
            status: self.status,
            comment: self.comment.clone(),
        }
    }

    fn assign(&mut self, fields: ApplicationFields) {
        self.company_name = fields.company_name;
        self.job_title = fields.job_title;
        self.cover_letter_path = fields.cover_letter_path;
        self.screenshot_path = fields.screenshot_path;
        self.status = fields.status;
        self.comment = fields.comment;
    }
}

impl ApplicationDatabase {
    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&ApplicationRecord> {
        self.applications
            .get(index)
            .ok_or_else(|| self.out_of_bounds(index))
    }

    pub fn position_of(&self, id: Uuid) -> Option<usize> {
        self.applications.iter().position(|app| app.id == id)
    }

    /// Appends a record dated today and returns its position.
    pub fn create(&mut self, fields: ApplicationFields) -> Result<usize> {
        self.create_on(fields, ApplicationDate::today())
    }

    pub fn create_on(&mut self, fields: ApplicationFields, date: ApplicationDate) -> Result<usize> {
        let fields = fields.validated()?;
        let record = ApplicationRecord {
            id: Uuid::new_v4(),
            company_name: fields.company_name,
            job_title: fields.job_title,
            cover_letter_path: fields.cover_letter_path,
            screenshot_path: fields.screenshot_path,
            application_date: date,
            status: fields.status,
            comment: fields.comment,
        };

        debug!(id = %record.id, "created application");
        self.applications.push(record);

        Ok(self.applications.len() - 1)
    }

    /// Replaces every mutable field. The date and id stay untouched.
    pub fn update(&mut self, index: usize, fields: ApplicationFields) -> Result<()> {
        let fields = fields.validated()?;
        let len = self.applications.len();

        match self.applications.get_mut(index) {
            Some(record) => {
                record.assign(fields);
                debug!(index, id = %record.id, "updated application");
                Ok(())
            }
            None => Err(out_of_bounds(index, len)),
        }
    }

    /// Removes the record at `index`, shifting later positions down by one.
    pub fn delete(&mut self, index: usize) -> Result<ApplicationRecord> {
        if index >= self.applications.len() {
            return Err(self.out_of_bounds(index));
        }

        let record = self.applications.remove(index);
        debug!(index, id = %record.id, "deleted application");

        Ok(record)
    }

    fn out_of_bounds(&self, index: usize) -> TrackerError {
        out_of_bounds(index, self.applications.len())
    }
}

// Positions only go stale when a caller reuses a view across a mutation.
fn out_of_bounds(index: usize, len: usize) -> TrackerError {
    error!(index, len, "application position out of bounds");
    TrackerError::Index { index, len }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn fields(company: &str, title: &str) -> ApplicationFields {
        ApplicationFields {
            company_name: company.to_owned(),
            job_title: title.to_owned(),
            cover_letter_path: "c.pdf".to_owned(),
            screenshot_path: "s.png".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn reads_both_date_layouts() {
        assert_eq!(
            ApplicationDate::from_raw("01-02-2024").parse(),
            Some(date!(2024 - 02 - 01))
        );
        assert_eq!(
            ApplicationDate::from_raw("2024-03-15").parse(),
            Some(date!(2024 - 03 - 15))
        );
    }

    #[test]
    fn legacy_dates_display_in_current_layout() {
        assert_eq!(ApplicationDate::from_raw("2024-03-15").to_string(), "15-03-2024");
        assert_eq!(ApplicationDate::from_raw("yesterday").to_string(), "invalid date");
    }

    #[test]
    fn new_dates_use_day_first_layout() {
        let created = ApplicationDate::from_date(date!(2025 - 07 - 04));
        assert_eq!(created.as_str(), "04-07-2025");
    }

    #[test]
    fn status_reads_labels_and_english_names() {
        assert_eq!("Accepté".parse::<Status>(), Ok(Status::Accepted));
        assert_eq!("rejected".parse::<Status>(), Ok(Status::Rejected));
        assert!("maybe".parse::<Status>().is_err());

        let status: Status = serde_json::from_str("\"Pending\"").unwrap();
        assert_eq!(status, Status::Pending);
        assert_eq!(serde_json::to_string(&Status::Rejected).unwrap(), "\"Refusé\"");
    }

    #[test]
    fn blank_fields_are_rejected() {
        let mut missing = fields("Acme", "Engineer");
        missing.screenshot_path = "   ".to_owned();

        assert_eq!(
            missing.validated(),
            Err(ValidationError::EmptyField("screenshot_path"))
        );
    }

    #[test]
    fn comment_limit_counts_characters() {
        let mut ok = fields("Acme", "Engineer");
        ok.comment = "é".repeat(MAX_COMMENT_CHARS);
        assert!(ok.validated().is_ok());

        let mut long = fields("Acme", "Engineer");
        long.comment = "x".repeat(MAX_COMMENT_CHARS + 1);
        assert_eq!(
            long.validated(),
            Err(ValidationError::CommentTooLong {
                len: MAX_COMMENT_CHARS + 1,
                max: MAX_COMMENT_CHARS
            })
        );
    }

    #[test]
    fn failed_validation_leaves_store_untouched() {
        let mut db = ApplicationDatabase::default();
        db.create(fields("Acme", "Engineer")).unwrap();

        let result = db.update(0, fields("", "Engineer"));

        assert!(matches!(result, Err(TrackerError::Validation(_))));
        assert_eq!(db.applications[0].company_name, "Acme");
    }

    #[test]
    fn update_keeps_date_and_id() {
        let mut db = ApplicationDatabase::default();
        let index = db
            .create_on(fields("Acme", "Engineer"), ApplicationDate::from_raw("2024-03-15"))
            .unwrap();
        let id = db.applications[index].id;

        let mut changed = db.applications[index].fields();
        changed.job_title = "Staff Engineer".to_owned();
        db.update(index, changed).unwrap();

        let record = &db.applications[index];
        assert_eq!(record.id, id);
        assert_eq!(record.application_date.as_str(), "2024-03-15");
        assert_eq!(record.job_title, "Staff Engineer");
        assert_eq!(db.position_of(id), Some(index));
    }

    #[test]
    fn out_of_bounds_positions_are_errors() {
        let mut db = ApplicationDatabase::default();

        assert!(matches!(db.get(0), Err(TrackerError::Index { index: 0, len: 0 })));
        assert!(matches!(
            db.update(3, fields("Acme", "Engineer")),
            Err(TrackerError::Index { index: 3, len: 0 })
        ));
        assert!(matches!(db.delete(0), Err(TrackerError::Index { .. })));
    }

    #[test]
    fn missing_comment_and_id_get_defaults() {
        let json = r#"{"applications":[{
            "company_name":"Acme","job_title":"Engineer",
            "cover_letter_path":"c.pdf","screenshot_path":"s.png",
            "application_date":"2024-03-15","status":"En attente"}]}"#;

        let db: ApplicationDatabase = serde_json::from_str(json).unwrap();

        assert_eq!(db.applications[0].comment, "");
        assert!(!db.applications[0].id.is_nil());
    }
}
