pub mod session;
pub mod draft;
pub mod hours;
pub mod amenity;
pub mod image;
pub mod geocoding;

pub use session::{SessionConfig, WizardMode, WizardStep};
pub use draft::{
    capture_field, is_draftable_field, restore_field, DraftData, DraftPhase, DraftValue,
    FieldRestore,
};
pub use hours::{DayHours, RowValidation, TimeField, WEEK_DAYS};
pub use amenity::AmenityEntry;
pub use image::{AssetError, ImageId, ProvisionalImage};
pub use geocoding::{AddressFill, GeoPoint, ReverseGeocodeResponse};
