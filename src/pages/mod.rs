//! Page components for Encore.

mod billing_success;
mod checkout;
mod dashboard;
mod landing;
mod releases;

pub use billing_success::BillingSuccess;
pub use checkout::Checkout;
pub use dashboard::Dashboard;
pub use landing::Landing;
pub use releases::Releases;
