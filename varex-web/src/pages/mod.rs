mod about;
mod help;
mod home;
mod layout;
mod variant_detail;
mod variants;

pub use about::About;
pub use help::Help;
pub use home::Home;
pub use layout::{use_mode, AppLayout};
pub use variant_detail::VariantDetail;
pub use variants::Variants;
