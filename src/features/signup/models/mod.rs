mod draft;

pub use draft::{QuickSignup, ResidentSignup, SignupDraft, SignupField};
