//! Real estate listing types.

use serde::{Deserialize, Serialize};

use crate::domains::store::{Document, ID_KEY, RecordId, StoreError};

/// The mutable fields of a listing.
///
/// Used as the request body of create and update. Missing fields fall back
/// to their zero value so that validation, not parsing, reports them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealEstateDetails {
    /// Asking price.
    pub market_price: f64,

    /// Street address.
    pub address: String,

    /// City name.
    pub city: String,

    /// State or region.
    pub state: String,

    /// Postal code, kept as text to preserve leading zeros.
    pub zip_code: String,

    /// Number of bedrooms.
    pub beds: u32,

    /// Number of bathrooms; half baths are fractional.
    pub baths: f64,

    /// Living area in square feet.
    pub sqft: u32,

    /// Year of construction.
    pub year_built: i32,
}

/// A stored listing: its identifier plus its details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RealEstate {
    /// Store-assigned identifier.
    pub id: RecordId,

    /// Listing fields.
    #[serde(flatten)]
    pub details: RealEstateDetails,
}

impl RealEstateDetails {
    /// Fields replaced by an update. Never includes the identifier.
    pub const UPDATABLE_FIELDS: [&'static str; 9] = [
        "market_price",
        "address",
        "city",
        "state",
        "zip_code",
        "beds",
        "baths",
        "sqft",
        "year_built",
    ];

    /// Render the details as a store document (without an id).
    pub fn to_document(&self) -> Result<Document, serde_json::Error> {
        serde_json::from_value(serde_json::to_value(self)?)
    }

    /// Build the partial-set update for these details.
    ///
    /// Only [`Self::UPDATABLE_FIELDS`] are included, so fields added to stored
    /// documents by other writers survive an update.
    pub fn update_set(&self) -> Result<Document, serde_json::Error> {
        let mut document = self.to_document()?;
        document.retain(|key, _| Self::UPDATABLE_FIELDS.contains(&key.as_str()));
        Ok(document)
    }
}

impl RealEstate {
    /// Rebuild a listing from a document returned by the store.
    pub fn from_document(mut document: Document) -> Result<Self, StoreError> {
        let id = document
            .remove(ID_KEY)
            .ok_or_else(|| StoreError::corrupt(format!("document has no '{}'", ID_KEY)))?;
        let id: RecordId = serde_json::from_value(id)?;
        let details = serde_json::from_value(serde_json::Value::Object(document))?;

        Ok(Self { id, details })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::RealEstateDetails;

    /// A complete, valid listing.
    pub fn springfield() -> RealEstateDetails {
        RealEstateDetails {
            market_price: 500_000.0,
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
            beds: 3,
            baths: 2.0,
            sqft: 1800,
            year_built: 1998,
        }
    }
}
