// Domain records exchanged with the contacts backend. Serde attributes keep
// the wire field names exactly as the JAX-RS services emit them.

use crate::filter::contains_ci;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// Backend identifiers are positive integers assigned on first save.
pub type RecordId = u64;

// One entity type as the resource layer sees it: where it lives, how it is
// named in messages, which field the heading index buckets on, and how the
// search filter matches it.
pub trait Record:
    Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    // REST collection path, relative to the service base.
    fn resource_path() -> &'static str;

    // Display name used in user-facing messages ("Hotel added").
    fn entity_name() -> &'static str;

    // None until the backend has assigned an id.
    fn id(&self) -> Option<RecordId>;

    // The label field the heading index buckets on.
    fn label(&self) -> &str;

    // Case-insensitive substring match against the record's textual fields.
    fn matches(&self, query: &str) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(rename = "hotelName")]
    pub hotel_name: String,
    pub post_code: String,
    pub hotel_phone_number: String,
}

impl Record for Hotel {
    fn resource_path() -> &'static str {
        "rest/hotels"
    }

    fn entity_name() -> &'static str {
        "Hotel"
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn label(&self) -> &str {
        &self.hotel_name
    }

    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.hotel_name, query)
            || contains_ci(&self.post_code, query)
            || contains_ci(&self.hotel_phone_number, query)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub customer_name: String,
    pub phone_number: String,
    pub email: String,
}

impl Record for Customer {
    fn resource_path() -> &'static str {
        "rest/customers"
    }

    fn entity_name() -> &'static str {
        "Customer"
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn label(&self) -> &str {
        &self.customer_name
    }

    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.customer_name, query)
            || contains_ci(&self.phone_number, query)
            || contains_ci(&self.email, query)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Taxi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(rename = "numSeats")]
    pub num_seats: u32,
    pub reg: String,
}

impl Record for Taxi {
    fn resource_path() -> &'static str {
        "rest/taxis"
    }

    fn entity_name() -> &'static str {
        "Taxi"
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn label(&self) -> &str {
        &self.reg
    }

    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.reg, query) || self.num_seats.to_string().contains(query)
    }
}

// The backend embeds the full customer and taxi entities in booking JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Booking {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxi: Option<Taxi>,
}

impl Record for Booking {
    fn resource_path() -> &'static str {
        "rest/bookings"
    }

    fn entity_name() -> &'static str {
        "Booking"
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    // Bookings list under the customer who holds them; an unassigned booking
    // has an empty label.
    fn label(&self) -> &str {
        self.customer
            .as_ref()
            .map(|c| c.customer_name.as_str())
            .unwrap_or("")
    }

    fn matches(&self, query: &str) -> bool {
        self.booking_date
            .map(|d| d.to_string().contains(query))
            .unwrap_or(false)
            || self.customer.as_ref().map(|c| c.matches(query)).unwrap_or(false)
            || self.taxi.as_ref().map(|t| t.matches(query)).unwrap_or(false)
    }
}
