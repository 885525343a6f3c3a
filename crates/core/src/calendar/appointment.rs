//! Booked appointments.

use chrono::{NaiveDate, NaiveDateTime};
use salon_shared::types::AppointmentId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{coerce_datetime, coerce_optional_text, coerce_text};
use crate::period::window::Dated;

/// A booked appointment as stored in the appointments collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAppointment", rename_all = "camelCase")]
pub struct Appointment {
    /// Store document key.
    pub id: Option<AppointmentId>,
    /// Client the appointment is for.
    pub client_name: String,
    /// Contact phone.
    pub phone: Option<String>,
    /// Requested technician, `Any` when the client has no preference.
    pub technician: String,
    /// Booked services.
    pub services: Vec<String>,
    /// Start time; `None` when the stored date is unreadable.
    pub starts_at: Option<NaiveDateTime>,
    /// Booking status (`booked`, ...).
    pub status: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawAppointment {
    id: Value,
    client_name: Value,
    phone: Value,
    technician: Value,
    services: Value,
    date: Value,
    status: Value,
    notes: Value,
}

impl From<RawAppointment> for Appointment {
    fn from(raw: RawAppointment) -> Self {
        let services = match &raw.services {
            Value::Array(items) => items
                .iter()
                .map(coerce_text)
                .filter(|s| !s.is_empty())
                .collect(),
            _ => Vec::new(),
        };
        Self {
            id: coerce_optional_text(&raw.id).map(AppointmentId::new),
            client_name: coerce_text(&raw.client_name),
            phone: coerce_optional_text(&raw.phone),
            technician: coerce_text(&raw.technician),
            services,
            starts_at: coerce_datetime(&raw.date),
            status: coerce_optional_text(&raw.status),
            notes: coerce_optional_text(&raw.notes),
        }
    }
}

impl Appointment {
    /// Decodes a snapshot of raw documents; unreadable documents become empty appointments.
    #[must_use]
    pub fn from_snapshot(documents: &[Value]) -> Vec<Self> {
        documents
            .iter()
            .map(|doc| Self::deserialize(doc).unwrap_or_default())
            .collect()
    }
}

impl Dated for Appointment {
    fn business_date(&self) -> Option<NaiveDate> {
        self.starts_at.map(|at| at.date())
    }
}
