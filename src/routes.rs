// The fragment route table as data. The shell owns actual navigation; this
// just parses and prints locations, with /home as the catch-all.

use crate::record::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    AddCustomer,
    EditCustomer(RecordId),
    HotelList,
    AddHotel,
    EditHotel(RecordId),
    About,
}

impl Route {
    // Parse a location fragment. Unknown paths and malformed ids fall back
    // to Home.
    pub fn parse(fragment: &str) -> Route {
        let path = fragment.strip_prefix('#').unwrap_or(fragment);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] | ["home"] => Route::Home,
            ["addCustomer"] => Route::AddCustomer,
            ["editCustomer", id] => match id.parse() {
                Ok(id) => Route::EditCustomer(id),
                Err(_) => Route::Home,
            },
            ["hotel"] => Route::HotelList,
            ["addHotel"] => Route::AddHotel,
            // The edit path nests under an extra hotel segment; kept as-is.
            ["editHotel", "hotel", id] => match id.parse() {
                Ok(id) => Route::EditHotel(id),
                Err(_) => Route::Home,
            },
            ["about"] => Route::About,
            _ => Route::Home,
        }
    }

    pub fn fragment(&self) -> String {
        match self {
            Route::Home => "/home".to_string(),
            Route::AddCustomer => "/addCustomer".to_string(),
            Route::EditCustomer(id) => format!("/editCustomer/{id}"),
            Route::HotelList => "/hotel".to_string(),
            Route::AddHotel => "/addHotel".to_string(),
            Route::EditHotel(id) => format!("/editHotel/hotel/{id}"),
            Route::About => "/about".to_string(),
        }
    }
}
