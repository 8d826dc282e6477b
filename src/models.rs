use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use time::{Date, Time};

use crate::constants::FIRST_PAGE;
use crate::utils::{join_datetime, split_datetime};

pub type WorkId = i64;

/// One time-tracking entry as held by the client.
///
/// Only the server fields are deserialized; `datetime` and the flags are client state.
///
/// After `normalized`, `datetime` is the editable form of the record's date and time.
/// `date` and `time` then hold the values as loaded and are ignored when building
/// payloads, so edits go to `datetime`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WorkRecord {
    #[serde(default)]
    pub id: Option<WorkId>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub minutes: Option<u64>,
    /// Opaque concurrency token. An explicit `null` from the server is kept as `Some(Null)`.
    #[serde(default, deserialize_with = "present_value")]
    pub version: Option<Value>,
    /// `"<date> <time>"`; takes precedence over `date` and `time` once set.
    #[serde(skip)]
    pub datetime: Option<String>,
    #[serde(skip)]
    pub is_new: bool,
    #[serde(skip)]
    pub selected: bool,
    #[serde(skip)]
    pub is_deleted: bool,
}

impl WorkRecord {
    pub fn blank() -> Self {
        WorkRecord {
            is_new: true,
            ..Default::default()
        }
    }

    /// Builds the editable `datetime` field and clears all client flags.
    pub fn normalized(mut self) -> Self {
        self.datetime = join_datetime(self.date.as_deref(), self.time.as_deref());
        self.is_new = false;
        self.selected = false;
        self.is_deleted = false;
        self
    }

    /// Wire form of this record. `date`/`time` come from `datetime` when it is set.
    pub fn to_payload(&self) -> WorkPayload {
        let (date, time) = match self.datetime.as_deref() {
            Some(datetime) => split_datetime(datetime),
            None => (self.date.clone(), self.time.clone()),
        };

        WorkPayload {
            id: self.id,
            date,
            time,
            description: self.description.clone(),
            minutes: self.minutes,
            version: self.version.clone(),
        }
    }

    /// Wire form for a record the server has not seen yet; it assigns `id` and `version`.
    pub fn to_new_payload(&self) -> WorkPayload {
        WorkPayload {
            id: None,
            version: None,
            ..self.to_payload()
        }
    }
}

/// Record payload exchanged with the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<WorkId>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub description: Option<String>,
    pub minutes: Option<u64>,
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<Value>,
}

/// A field that is present deserializes to `Some`, even when it is `null`.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl WorkPayload {
    pub fn same_content(&self, other: &WorkPayload) -> bool {
        self.date == other.date
            && self.time == other.time
            && self.description == other.description
            && self.minutes == other.minutes
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeSet {
    pub new_records: Vec<WorkPayload>,
    pub modified_records: Vec<WorkPayload>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.new_records.is_empty() && self.modified_records.is_empty()
    }

    /// New records first, then modified ones.
    pub fn into_payload(self) -> Vec<WorkPayload> {
        let mut all = self.new_records;
        all.extend(self.modified_records);
        all
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub from_date: Option<Date>,
    pub from_time: Option<Time>,
    pub to_date: Option<Date>,
    pub to_time: Option<Time>,
}

impl SearchCriteria {
    pub fn between(from_date: Date, to_date: Date) -> Self {
        SearchCriteria {
            from_date: Some(from_date),
            to_date: Some(to_date),
            ..Default::default()
        }
    }

    pub fn with_times(mut self, from_time: Option<Time>, to_time: Option<Time>) -> Self {
        self.from_time = from_time;
        self.to_time = to_time;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for Page {
    fn default() -> Self {
        Page {
            current_page: FIRST_PAGE,
            total_pages: 0,
        }
    }
}

impl Page {
    pub fn contains(&self, page: u32) -> bool {
        page >= FIRST_PAGE && page <= self.total_pages
    }
}

/// One page of search results as returned by the backend.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorksPage {
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub works: Vec<WorkRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub user_name: String,
    pub max_minutes_per_day: u64,
    /// `None` means nothing recorded today, which is not the same as `Some(0)`.
    #[serde(default)]
    pub todays_minutes: Option<u64>,
}

impl UserProfile {
    pub fn with_threshold(max_minutes_per_day: u64) -> Self {
        UserProfile {
            user_name: String::new(),
            max_minutes_per_day,
            todays_minutes: None,
        }
    }
}
