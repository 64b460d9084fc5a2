// Composition root: every entity's resource over one shared transport, plus
// the shared message bag. One desk per running front end.

use std::sync::Arc;
use tracing::{info, warn};

use crate::editor::Editor;
use crate::error::ApiError;
use crate::listing::Listing;
use crate::messages::{MessageBag, Severity};
use crate::record::{Booking, Customer, Hotel, RecordId, Taxi};
use crate::resource::Resource;
use crate::routes::Route;
use crate::transport::ResourceTransport;

pub struct Desk {
    pub hotels: Resource<Hotel>,
    pub customers: Resource<Customer>,
    pub taxis: Resource<Taxi>,
    pub bookings: Resource<Booking>,
    pub messages: MessageBag,
}

impl Desk {
    pub fn new(transport: Arc<dyn ResourceTransport>) -> Self {
        Self {
            hotels: Resource::new(Arc::clone(&transport)),
            customers: Resource::new(Arc::clone(&transport)),
            taxis: Resource::new(Arc::clone(&transport)),
            bookings: Resource::new(transport),
            messages: MessageBag::new(),
        }
    }

    // Initial load: populate every collection concurrently. A failed query
    // reports into the bag and leaves that collection empty; the others
    // still land.
    pub async fn refresh_all(&self) {
        let (hotels, customers, taxis, bookings) = futures::join!(
            self.hotels.query(),
            self.customers.query(),
            self.taxis.query(),
            self.bookings.query(),
        );
        self.report("hotels", hotels.map(|_| ()));
        self.report("customers", customers.map(|_| ()));
        self.report("taxis", taxis.map(|_| ()));
        self.report("bookings", bookings.map(|_| ()));
        info!(
            hotels = self.hotels.records().len(),
            customers = self.customers.records().len(),
            taxis = self.taxis.records().len(),
            bookings = self.bookings.records().len(),
            "collections loaded"
        );
    }

    fn report(&self, entity: &str, result: Result<(), ApiError>) {
        if let Err(err) = result {
            warn!(entity, error = %err, "initial load failed");
            for message in err.messages() {
                self.messages.push(Severity::Danger, message);
            }
        }
    }

    pub fn hotel_listing(&self) -> Listing<Hotel> {
        Listing::new(&self.hotels)
    }

    pub fn customer_listing(&self) -> Listing<Customer> {
        Listing::new(&self.customers)
    }

    pub fn booking_listing(&self) -> Listing<Booking> {
        Listing::new(&self.bookings)
    }

    pub fn add_hotel(&self) -> Editor<Hotel> {
        Editor::create(self.hotels.clone(), self.messages.clone()).with_exit(Route::HotelList)
    }

    pub async fn edit_hotel(&self, id: RecordId) -> Result<Editor<Hotel>, ApiError> {
        Ok(Editor::edit(self.hotels.clone(), self.messages.clone(), id)
            .await?
            .with_exit(Route::HotelList))
    }

    pub fn add_customer(&self) -> Editor<Customer> {
        Editor::create(self.customers.clone(), self.messages.clone())
    }

    pub async fn edit_customer(&self, id: RecordId) -> Result<Editor<Customer>, ApiError> {
        Editor::edit(self.customers.clone(), self.messages.clone(), id).await
    }

    pub fn add_booking(&self) -> Editor<Booking> {
        Editor::create(self.bookings.clone(), self.messages.clone())
    }

    pub async fn edit_booking(&self, id: RecordId) -> Result<Editor<Booking>, ApiError> {
        Editor::edit(self.bookings.clone(), self.messages.clone(), id).await
    }
}
