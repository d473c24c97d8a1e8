pub mod message;
pub mod profile;

pub use message::{Message, Role};
pub use profile::{Gender, Hmo, ProfileError, Tier, UserProfile};
