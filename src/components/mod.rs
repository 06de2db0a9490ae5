//! UI Components
//!
//! Event binding for the three flows. State transitions live in `session`,
//! the async work in `flows`.

mod backend_badge;
mod outfit_suggestion;
mod status_line;
mod wardrobe_upload;

pub use backend_badge::BackendBadge;
pub use outfit_suggestion::OutfitSuggestion;
pub use status_line::StatusLine;
pub use wardrobe_upload::WardrobeUpload;
