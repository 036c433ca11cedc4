//! EONET natural-event filter and event view.

use serde::Deserialize;

/// Event lifecycle states recognized by the EONET catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventStatus {
    #[default]
    Open,
    Closed,
}

impl EventStatus {
    /// Wire value sent to the upstream `status` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Parses a wire value, returning `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" => Some(Self::Open),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

/// Filter state for an EONET event query.
#[derive(Debug, Clone)]
pub struct EventFilter {
    /// Number of past days to include. Always positive.
    pub days_back: u32,
    pub status: EventStatus,
    /// Optional category tag; `None` queries all categories.
    pub category: Option<String>,
}

impl Default for EventFilter {
    fn default() -> Self {
        Self {
            days_back: 7,
            status: EventStatus::Open,
            category: None,
        }
    }
}

/// One natural event, as far as the event cards need it.
///
/// Deserialized leniently: the upstream carries many more fields (sources,
/// full geometry coordinates) that the view never reads.
#[derive(Debug, Clone, Deserialize)]
pub struct EonetEvent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub categories: Vec<EventCategory>,
    #[serde(default)]
    pub geometry: Vec<EventGeometry>,
    /// Closing timestamp; present only for closed events.
    #[serde(default)]
    pub closed: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventCategory {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventGeometry {
    pub date: String,
}

impl EonetEvent {
    /// Category titles joined for display.
    pub fn category_titles(&self) -> String {
        self.categories
            .iter()
            .map(|c| c.title.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Calendar date of the first geometry entry, when any exists.
    pub fn started(&self) -> Option<&str> {
        self.geometry
            .first()
            .map(|g| g.date.get(..10).unwrap_or(g.date.as_str()))
    }

    /// Calendar date the event closed, when it has.
    pub fn closed_date(&self) -> Option<&str> {
        self.closed.as_deref().map(|d| d.get(..10).unwrap_or(d))
    }
}
