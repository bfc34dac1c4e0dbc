pub mod wizard_viewmodel;
pub mod identity_viewmodel;
pub mod map_pick_viewmodel;
pub mod hours_viewmodel;
pub mod amenities_viewmodel;
pub mod images_viewmodel;

pub use wizard_viewmodel::WizardViewModel;
pub use identity_viewmodel::{IdentityError, IdentityViewModel};
pub use map_pick_viewmodel::MapPickViewModel;
pub use hours_viewmodel::{HoursError, HoursViewModel};
pub use amenities_viewmodel::{AmenitiesError, AmenitiesViewModel};
pub use images_viewmodel::{ImageError, ImagesViewModel};
