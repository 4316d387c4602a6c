pub mod session;

pub use session::{RefreshRequest, SessionResponse, SubjectResponse, TokenResponse};
