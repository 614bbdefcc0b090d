//! Component records as persisted in the local store.
//!
//! # Design
//! - Field names on the wire are fixed (`id`, `name`, `type`, `status`, `notes`, `createdAt`).
//! - Unknown status strings survive a read/write cycle untouched.
//! - Records are immutable apart from `status`, which only moves through [`ComponentStatus::next`].
//! - A `createdAt` that is not an RFC 3339 instant is kept as raw text instead of failing the read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

/// Store-assigned primary key of a component record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(u32);

impl ComponentId {
    /// Wrap a raw key value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw key value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Convert a numeric key produced by a key generator.
    ///
    /// Returns `None` for negative, fractional, non-finite or out-of-range keys.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_key(value: f64) -> Option<Self> {
        if !value.is_finite() || value.fract() != 0.0 || value < 1.0 {
            return None;
        }
        if value > f64::from(u32::MAX) {
            return None;
        }
        Some(Self(value as u32))
    }
}

impl Display for ComponentId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Lifecycle state of a component.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentStatus {
    /// Work in progress.
    #[default]
    Draft,
    /// Under test.
    Testing,
    /// Ready for use.
    Ready,
    /// Kept for reference, no longer recommended.
    Deprecated,
    /// Any value outside the known cycle, kept verbatim.
    Unknown(String),
}

impl ComponentStatus {
    /// Known statuses in promotion order.
    pub const CYCLE: [Self; 4] = [Self::Draft, Self::Testing, Self::Ready, Self::Deprecated];

    /// Parse a stored status value. Never fails; unknown values are preserved.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "draft" => Self::Draft,
            "testing" => Self::Testing,
            "ready" => Self::Ready,
            "deprecated" => Self::Deprecated,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Stored string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "draft",
            Self::Testing => "testing",
            Self::Ready => "ready",
            Self::Deprecated => "deprecated",
            Self::Unknown(value) => value,
        }
    }

    /// Next status in the promotion cycle. Wraps from `deprecated` to `draft`;
    /// unknown values restart at `draft`.
    #[must_use]
    pub fn next(&self) -> Self {
        match self {
            Self::Draft => Self::Testing,
            Self::Testing => Self::Ready,
            Self::Ready => Self::Deprecated,
            Self::Deprecated | Self::Unknown(_) => Self::Draft,
        }
    }
}

impl From<String> for ComponentStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ComponentStatus> for String {
    fn from(value: ComponentStatus) -> Self {
        match value {
            ComponentStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for ComponentStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Creation time of a stored record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<Value>")]
pub enum CreatedAt {
    /// A parsed instant.
    At(DateTime<Utc>),
    /// Stored text that is not an instant; empty when the field was absent or null.
    Raw(String),
}

impl CreatedAt {
    /// Parsed instant, if any.
    #[must_use]
    pub const fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::At(at) => Some(*at),
            Self::Raw(_) => None,
        }
    }
}

impl Default for CreatedAt {
    fn default() -> Self {
        Self::Raw(String::new())
    }
}

impl From<DateTime<Utc>> for CreatedAt {
    fn from(at: DateTime<Utc>) -> Self {
        Self::At(at)
    }
}

impl From<Option<Value>> for CreatedAt {
    fn from(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::default(),
            Some(Value::String(text)) => text.parse().map_or(Self::Raw(text), Self::At),
            Some(other) => Self::Raw(other.to_string()),
        }
    }
}

impl Serialize for CreatedAt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::At(at) => at.serialize(serializer),
            Self::Raw(text) => serializer.serialize_str(text),
        }
    }
}

impl Ord for CreatedAt {
    /// Instants order chronologically; raw values sort before every instant.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::At(left), Self::At(right)) => left.cmp(right),
            (Self::Raw(left), Self::Raw(right)) => left.cmp(right),
            (Self::Raw(_), Self::At(_)) => Ordering::Less,
            (Self::At(_), Self::Raw(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for CreatedAt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A persisted component record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    /// Store-assigned primary key.
    pub id: ComponentId,
    /// Display name.
    pub name: String,
    /// Free-form type tag.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Lifecycle status.
    #[serde(default)]
    pub status: ComponentStatus,
    /// Optional notes; empty when unset.
    #[serde(default)]
    pub notes: String,
    /// Creation time, stamped once on insert.
    #[serde(default)]
    pub created_at: CreatedAt,
}

impl ComponentRecord {
    /// Copy of the record advanced one step through the status cycle.
    #[must_use]
    pub fn promoted(&self) -> Self {
        Self {
            status: self.status.next(),
            ..self.clone()
        }
    }
}

/// A record awaiting insertion; the store assigns the id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComponent {
    /// Display name.
    pub name: String,
    /// Free-form type tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// Initial lifecycle status.
    pub status: ComponentStatus,
    /// Optional notes.
    pub notes: String,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
}

impl NewComponent {
    /// Attach the store-assigned id.
    #[must_use]
    pub fn with_id(self, id: ComponentId) -> ComponentRecord {
        ComponentRecord {
            id,
            name: self.name,
            kind: self.kind,
            status: self.status,
            notes: self.notes,
            created_at: CreatedAt::At(self.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample() -> NewComponent {
        NewComponent {
            name: "Header".to_string(),
            kind: "layout".to_string(),
            status: ComponentStatus::Draft,
            notes: String::new(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn promotion_cycle_wraps_and_resets_unknown() {
        assert_eq!(ComponentStatus::Draft.next(), ComponentStatus::Testing);
        assert_eq!(ComponentStatus::Testing.next(), ComponentStatus::Ready);
        assert_eq!(ComponentStatus::Ready.next(), ComponentStatus::Deprecated);
        assert_eq!(ComponentStatus::Deprecated.next(), ComponentStatus::Draft);
        assert_eq!(
            ComponentStatus::parse("archived").next(),
            ComponentStatus::Draft
        );
    }

    #[test]
    fn cycle_visits_every_known_status_once() {
        let mut status = ComponentStatus::Draft;
        let mut seen = Vec::new();
        for _ in 0..ComponentStatus::CYCLE.len() {
            seen.push(status.clone());
            status = status.next();
        }
        assert_eq!(seen, ComponentStatus::CYCLE.to_vec());
        assert_eq!(status, ComponentStatus::Draft);
    }

    #[test]
    fn new_component_omits_id_on_the_wire() {
        let value = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(value["name"], "Header");
        assert_eq!(value["type"], "layout");
        assert_eq!(value["status"], "draft");
        assert_eq!(value["createdAt"], "2024-05-01T09:30:00Z");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn record_keeps_unknown_status_and_defaults_notes() {
        let record: ComponentRecord = serde_json::from_value(json!({
            "id": 7,
            "name": "Legacy",
            "type": "data",
            "status": "archived",
            "createdAt": "2023-01-02T03:04:05.000Z"
        }))
        .expect("deserialize");
        assert_eq!(record.id, ComponentId::new(7));
        assert_eq!(record.status, ComponentStatus::Unknown("archived".into()));
        assert!(record.notes.is_empty());
        let back = serde_json::to_value(&record).expect("serialize");
        assert_eq!(back["status"], "archived");
    }

    #[test]
    fn listing_keeps_rows_with_unreadable_creation_times() {
        let rows: Vec<ComponentRecord> = serde_json::from_value(json!([
            {"id": 1, "name": "Card", "status": "ready", "createdAt": "2024-05-01T09:30:00Z"},
            {"id": 2, "name": "Tabs", "status": "draft", "createdAt": "01/05/2024 9:30"},
            {"id": 3, "name": "Menu", "status": "draft"},
            {"id": 4, "name": "Grid", "status": "draft", "createdAt": 1_714_555_800_000_u64}
        ]))
        .expect("lenient createdAt");
        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows[0].created_at.instant(),
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).single()
        );
        assert_eq!(rows[1].created_at, CreatedAt::Raw("01/05/2024 9:30".into()));
        assert_eq!(rows[2].created_at, CreatedAt::default());
        assert_eq!(rows[3].created_at, CreatedAt::Raw("1714555800000".into()));

        let back = serde_json::to_value(&rows[1]).expect("serialize");
        assert_eq!(back["createdAt"], "01/05/2024 9:30");
    }

    #[test]
    fn raw_creation_times_sort_before_instants() {
        let at = CreatedAt::from(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        let raw = CreatedAt::Raw("yesterday".into());
        assert!(raw < at);
        assert!(CreatedAt::default() < raw);
    }

    #[test]
    fn promoted_changes_only_status() {
        let record = sample().with_id(ComponentId::new(3));
        let promoted = record.promoted();
        assert_eq!(promoted.status, ComponentStatus::Testing);
        assert_eq!(promoted.id, record.id);
        assert_eq!(promoted.created_at, record.created_at);
        assert_eq!(promoted.name, record.name);
    }

    #[test]
    fn keys_from_generator_are_validated() {
        assert_eq!(ComponentId::from_key(4.0), Some(ComponentId::new(4)));
        assert_eq!(ComponentId::from_key(0.0), None);
        assert_eq!(ComponentId::from_key(-2.0), None);
        assert_eq!(ComponentId::from_key(1.5), None);
        assert_eq!(ComponentId::from_key(f64::NAN), None);
        assert_eq!(ComponentId::from_key(1e12), None);
    }
}
