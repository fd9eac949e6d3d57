pub mod activity;

pub use activity::{Activity, ActivityCatalog, ActivityDetails, RegistrationMessage};
