//! Filtering and ordering of the application list.
//!
//! Everything here borrows the records and never reorders the store. Each
//! row of a view carries the position of its record in the store, which is
//! what edit and delete must be addressed with.

use crate::applications::ApplicationRecord;
use std::cmp::Ordering;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    ApplicationDate,
    Status,
}

/// Column selection of the list, toggled by picking a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub ascending: bool,
}

/// A row of a view: the store position plus the record there.
pub type ViewRow<'a> = (usize, &'a ApplicationRecord);

impl SortState {
    pub fn new(key: SortKey, ascending: bool) -> Self {
        Self {
            key: Some(key),
            ascending,
        }
    }

    /// Same key flips the direction, a new key starts ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.ascending = !self.ascending;
        } else {
            self.key = Some(key);
            self.ascending = true;
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub fn matches(record: &ApplicationRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.company_name.to_lowercase().contains(needle)
        || record.job_title.to_lowercase().contains(needle)
}

/// Compares two records on `key`.
///
/// Dates that cannot be parsed compare as earlier than any valid date.
pub fn compare(a: &ApplicationRecord, b: &ApplicationRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::ApplicationDate => a.application_date.parse().cmp(&b.application_date.parse()),
        SortKey::Status => a.status.label().cmp(b.status.label()),
    }
}

/// Filters `records` on `filter_text`, then orders them on `sort_key`.
///
/// Descending order is the ascending order reversed, so records sharing a
/// key come out in reverse store order.
pub fn apply<'a>(
    records: &'a [ApplicationRecord],
    filter_text: &str,
    sort_key: Option<SortKey>,
    ascending: bool,
) -> Vec<ViewRow<'a>> {
    let needle = filter_text.to_lowercase();

    let mut view: Vec<ViewRow<'a>> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, &needle))
        .collect();

    if let Some(key) = sort_key {
        view.sort_by(|(_, a), (_, b)| compare(a, b, key));
        if !ascending {
            view.reverse();
        }
    }

    debug!(total = records.len(), shown = view.len(), ?sort_key, ascending, "applied query");
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applications::{ApplicationDate, Status};
    use uuid::Uuid;

    fn record(company: &str, title: &str, date: &str, status: Status) -> ApplicationRecord {
        ApplicationRecord {
            id: Uuid::new_v4(),
            company_name: company.to_owned(),
            job_title: title.to_owned(),
            cover_letter_path: "c.pdf".to_owned(),
            screenshot_path: "s.png".to_owned(),
            application_date: ApplicationDate::from_raw(date),
            status,
            comment: String::new(),
        }
    }

    fn positions(view: &[ViewRow<'_>]) -> Vec<usize> {
        view.iter().map(|(index, _)| *index).collect()
    }

    #[test]
    fn filter_is_case_insensitive_on_company_or_title() {
        let records = [
            record("Acme", "Engineer", "01-01-2024", Status::Pending),
            record("Globex", "ACME liaison", "01-01-2024", Status::Pending),
            record("Initech", "Analyst", "01-01-2024", Status::Pending),
        ];

        assert_eq!(positions(&apply(&records, "acMe", None, true)), [0, 1]);
        assert_eq!(positions(&apply(&records, "", None, true)), [0, 1, 2]);
        assert!(apply(&records, "umbrella", None, true).is_empty());
    }

    #[test]
    fn mixed_date_layouts_sort_chronologically() {
        let records = [
            record("B", "x", "2024-03-15", Status::Pending),
            record("A", "x", "01-02-2024", Status::Pending),
        ];

        let view = apply(&records, "", Some(SortKey::ApplicationDate), true);

        assert_eq!(positions(&view), [1, 0]);
    }

    #[test]
    fn invalid_dates_sort_first() {
        let records = [
            record("A", "x", "01-02-2024", Status::Pending),
            record("B", "x", "not a date", Status::Pending),
        ];

        let ascending = apply(&records, "", Some(SortKey::ApplicationDate), true);
        let descending = apply(&records, "", Some(SortKey::ApplicationDate), false);

        assert_eq!(positions(&ascending), [1, 0]);
        assert_eq!(positions(&descending), [0, 1]);
    }

    #[test]
    fn status_sorts_on_stored_label() {
        let records = [
            record("A", "x", "01-01-2024", Status::Rejected),
            record("B", "x", "01-01-2024", Status::Pending),
            record("C", "x", "01-01-2024", Status::Accepted),
            record("D", "x", "01-01-2024", Status::Pending),
        ];

        let view = apply(&records, "", Some(SortKey::Status), true);

        // Accepté < En attente < Refusé, ties keep store order
        assert_eq!(positions(&view), [2, 1, 3, 0]);
    }

    #[test]
    fn toggling_flips_then_resets() {
        let mut sort = SortState::default();

        sort.toggle(SortKey::Status);
        assert_eq!(sort, SortState::new(SortKey::Status, true));

        sort.toggle(SortKey::Status);
        assert_eq!(sort, SortState::new(SortKey::Status, false));

        sort.toggle(SortKey::ApplicationDate);
        assert_eq!(sort, SortState::new(SortKey::ApplicationDate, true));

        sort.clear();
        assert_eq!(sort.key, None);
    }

    #[test]
    fn apply_leaves_records_untouched() {
        let records = vec![
            record("B", "x", "2024-03-15", Status::Pending),
            record("A", "x", "01-02-2024", Status::Accepted),
        ];
        let before = records.clone();

        let first = positions(&apply(&records, "", Some(SortKey::ApplicationDate), false));
        let second = positions(&apply(&records, "", Some(SortKey::ApplicationDate), false));

        assert_eq!(records, before);
        assert_eq!(first, second);
    }
}
