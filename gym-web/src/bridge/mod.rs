//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod overlay;
mod session;

pub use landmarks::{
    decode_landmarks,
    // Constants
    FRAME_LEN, LANDMARK_COUNT, LIMB_SKELETON, VALUES_PER_LANDMARK,
};

pub use overlay::{angle_labels, hud_text, AngleLabel};

pub use session::GymSession;
