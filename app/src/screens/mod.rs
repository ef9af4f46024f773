//! Screen controllers. Each owns its screen state and reacts to user
//! actions; rendering is left to the front end.

mod email_auth;
mod landing;
mod verification;

pub use email_auth::EmailAuthScreen;
pub use landing::LandingScreen;
pub use verification::VerificationScreen;
