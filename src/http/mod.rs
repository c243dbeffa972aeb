//! HTTP surface for runtime level control

pub mod level_handler;
pub mod router;

pub use level_handler::{
    authorization, parse_level_payload, AuthorizationHandler, LevelHandler, LevelPayload,
};
pub use router::MAX_BODY_BYTES;
