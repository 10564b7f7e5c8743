//! Tracking session exposed to JavaScript
//!
//! The host owns a `GymSession` and drives it once per captured frame.
//! Start/stop mirror the selector's buttons: starting creates a fresh
//! counter for the chosen exercise, stopping drops it.
//!
//! `tracing` events here only reach a subscriber in native hosts and tests;
//! the browser sees the `web_sys::console` messages of the entry points.

use tracing::{debug, warn};
use wasm_bindgen::prelude::*;

use super::landmarks::decode_landmarks;
use super::overlay::{angle_labels, hud_text};
use crate::config::TrackerConfig;
use crate::counter::{ExerciseKind, RepCounter, RepUpdate};
use crate::error::GymError;
use crate::kinematics::JointFrame;

#[wasm_bindgen]
pub struct GymSession {
    config: TrackerConfig,
    /// Present only while tracking
    tracker: Option<RepCounter>,
    /// Output of the most recent frame
    last: RepUpdate,
    /// Frames dropped by landmark decoding since start
    rejected_frames: u32,
}

// ============================================================================
// RUST API
// ============================================================================

impl GymSession {
    pub fn with_config(config: TrackerConfig) -> Self {
        Self {
            config,
            tracker: None,
            last: RepUpdate::default(),
            rejected_frames: 0,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.tracker.is_some()
    }

    /// Exercise of the running session
    pub fn exercise(&self) -> Option<ExerciseKind> {
        self.tracker.as_ref().map(RepCounter::exercise)
    }

    /// Start tracking `exercise` with a fresh state
    ///
    /// Returns false (and changes nothing) if a session is already running.
    pub fn begin(&mut self, exercise: ExerciseKind) -> bool {
        if self.tracker.is_some() {
            return false;
        }
        debug!(%exercise, "tracking started");
        self.tracker = Some(RepCounter::new(exercise));
        self.last = RepUpdate::default();
        self.rejected_frames = 0;
        true
    }

    pub fn end(&mut self) {
        if let Some(counter) = self.tracker.take() {
            debug!(
                exercise = %counter.exercise(),
                reps = counter.state().counter,
                "tracking stopped"
            );
        }
    }

    /// Feed a decoded frame. Ignored while stopped.
    pub fn push_frame(&mut self, frame: Option<&JointFrame>) -> &RepUpdate {
        if let Some(counter) = self.tracker.as_mut() {
            self.last = counter.update(frame);
        }
        &self.last
    }

    /// Decode and feed a flat landmark array
    ///
    /// On a decoding error the frame counts as a no-detection frame: the
    /// counter is left exactly as it was and no angles are reported.
    pub fn ingest(&mut self, data: &[f32]) -> Result<&RepUpdate, GymError> {
        if self.tracker.is_none() {
            return Err(GymError::NotTracking);
        }
        match decode_landmarks(data) {
            Ok(frame) => Ok(self.push_frame(frame.as_ref())),
            Err(err) => {
                self.rejected_frames += 1;
                warn!(error = %err, rejected = self.rejected_frames, "landmark frame rejected");
                self.push_frame(None);
                Err(err)
            }
        }
    }

    pub fn last_update(&self) -> &RepUpdate {
        &self.last
    }

    pub fn rejected_frames(&self) -> u32 {
        self.rejected_frames
    }

    pub fn report(&self) -> Result<String, GymError> {
        Ok(serde_json::to_string(&self.last)?)
    }
}

impl Default for GymSession {
    fn default() -> Self {
        Self::with_config(TrackerConfig::default())
    }
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

#[wasm_bindgen]
impl GymSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> GymSession {
        GymSession::default()
    }

    /// Build a session from a JSON `TrackerConfig`
    pub fn from_config(json: &str) -> Result<GymSession, JsValue> {
        Ok(GymSession::with_config(TrackerConfig::from_json(json)?))
    }

    /// Start tracking; accepts selector labels ("Squats") or ids ("squats")
    pub fn start(&mut self, exercise: &str) -> Result<(), JsValue> {
        let kind: ExerciseKind = exercise.parse()?;
        if !self.begin(kind) {
            web_sys::console::log_1(&"ℹ️ Tracking already running".into());
        }
        Ok(())
    }

    pub fn stop(&mut self) {
        self.end();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.is_running()
    }

    /// Called from JavaScript with a flat Float32Array of 99 values
    /// (33 landmarks × x, y, z), or an empty array when no pose was found
    pub fn update_landmarks(&mut self, data: &[f32]) {
        if let Err(err) = self.ingest(data) {
            if err != GymError::NotTracking {
                web_sys::console::warn_1(&err.to_string().into());
            }
        }
    }

    /// Called from JavaScript when MediaPipe returned no pose
    pub fn no_detection(&mut self) {
        self.push_frame(None);
    }

    #[wasm_bindgen(getter)]
    pub fn counter(&self) -> u32 {
        self.last.state.counter
    }

    /// "none", "down" or "up"
    #[wasm_bindgen(getter)]
    pub fn stage(&self) -> String {
        self.last.state.stage.as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn warning(&self) -> Option<String> {
        self.last.state.warning.map(|w| w.as_str().to_string())
    }

    /// Angles measured in the last frame, degrees
    #[wasm_bindgen(getter)]
    pub fn angles(&self) -> Vec<f32> {
        self.last.angles.iter().map(|a| a.degrees).collect()
    }

    #[wasm_bindgen(getter)]
    pub fn poll_interval_ms(&self) -> u32 {
        self.config.poll_interval_ms
    }

    /// For the host's MediaPipe Pose options
    #[wasm_bindgen(getter)]
    pub fn min_detection_confidence(&self) -> f32 {
        self.config.min_detection_confidence
    }

    #[wasm_bindgen(getter)]
    pub fn min_tracking_confidence(&self) -> f32 {
        self.config.min_tracking_confidence
    }

    pub fn hud_text(&self) -> String {
        hud_text(&self.last)
    }

    pub fn angle_labels_json(&self) -> Result<String, JsValue> {
        let labels = angle_labels(&self.last, self.config.overlay_width, self.config.overlay_height);
        Ok(serde_json::to_string(&labels).map_err(GymError::from)?)
    }

    pub fn report_json(&self) -> Result<String, JsValue> {
        Ok(self.report()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::landmarks::FRAME_LEN;
    use crate::counter::{RepState, Stage};
    use crate::kinematics::Joint;

    /// Flat MediaPipe array with the left elbow bent to `degrees`
    fn flat_arm(degrees: f32) -> Vec<f32> {
        let mut data = vec![0.5; FRAME_LEN];
        let r = degrees.to_radians();
        let mut put = |joint: Joint, x: f32, y: f32| {
            let base = joint.landmark_index() * 3;
            data[base] = x;
            data[base + 1] = y;
        };
        put(Joint::LeftShoulder, 0.5, 0.3);
        put(Joint::LeftElbow, 0.5, 0.5);
        put(Joint::LeftWrist, 0.5 + 0.2 * r.sin(), 0.5 - 0.2 * r.cos());
        data
    }

    #[test]
    fn test_frames_ignored_until_started() {
        let mut session = GymSession::default();
        assert_eq!(session.ingest(&flat_arm(170.0)).unwrap_err(), GymError::NotTracking);
        session.push_frame(None);
        assert_eq!(session.last_update().state, RepState::new());
    }

    #[test]
    fn test_counts_through_flat_arrays() {
        let mut session = GymSession::default();
        assert!(session.begin(ExerciseKind::BicepCurl));
        session.ingest(&flat_arm(170.0)).unwrap();
        let update = session.ingest(&flat_arm(25.0)).unwrap();
        assert_eq!(update.state.counter, 1);
        assert_eq!(session.counter(), 1);
        assert_eq!(session.stage(), "up");
        assert_eq!(session.warning(), None);
        assert_eq!(session.angles().len(), 1);
    }

    #[test]
    fn test_bad_frame_leaves_state() {
        let mut session = GymSession::default();
        session.begin(ExerciseKind::BicepCurl);
        session.ingest(&flat_arm(170.0)).unwrap();
        session.ingest(&flat_arm(70.0)).unwrap();
        let before = session.last_update().clone();

        assert!(session.ingest(&[0.1; 10]).is_err());
        let mut nan = flat_arm(20.0);
        nan[Joint::LeftWrist.landmark_index() * 3] = f32::NAN;
        assert!(session.ingest(&nan).is_err());

        assert_eq!(session.last_update().state, before.state);
        assert!(session.angles().is_empty());
        assert!(session.last_update().angles.is_empty());
        assert_eq!(session.rejected_frames(), 2);
        assert_eq!(session.warning().as_deref(), Some("Half Rep Warning"));
    }

    #[test]
    fn test_rejected_frame_drops_previous_angles() {
        let mut session = GymSession::default();
        session.begin(ExerciseKind::BicepCurl);
        session.ingest(&flat_arm(170.0)).unwrap();
        assert_eq!(session.angles().len(), 1);

        assert!(session.ingest(&[0.1; 10]).is_err());
        assert!(session.angles().is_empty());
        assert_eq!(session.angle_labels_json().unwrap(), "[]");
        let report: serde_json::Value = serde_json::from_str(&session.report().unwrap()).unwrap();
        assert_eq!(report["angles"], serde_json::json!([]));
        assert_eq!(report["stage"], "down");
    }

    #[test]
    fn test_empty_array_is_no_detection() {
        let mut session = GymSession::default();
        session.begin(ExerciseKind::Pushup);
        session.ingest(&flat_arm(170.0)).unwrap();
        let update = session.ingest(&[]).unwrap();
        assert_eq!(update.state.stage, Stage::Down);
        assert!(update.angles.is_empty());
    }

    #[test]
    fn test_start_twice_keeps_session() {
        let mut session = GymSession::default();
        session.begin(ExerciseKind::BicepCurl);
        session.ingest(&flat_arm(170.0)).unwrap();
        session.ingest(&flat_arm(20.0)).unwrap();

        assert!(!session.begin(ExerciseKind::Squat));
        assert_eq!(session.exercise(), Some(ExerciseKind::BicepCurl));
        assert_eq!(session.counter(), 1);
    }

    #[test]
    fn test_restart_resets_state() {
        let mut session = GymSession::default();
        session.begin(ExerciseKind::BicepCurl);
        session.ingest(&flat_arm(170.0)).unwrap();
        session.ingest(&flat_arm(20.0)).unwrap();
        session.end();
        assert!(!session.running());

        // Frames while stopped change nothing
        session.push_frame(None);
        assert_eq!(session.counter(), 1);

        assert!(session.begin(ExerciseKind::Squat));
        assert_eq!(session.counter(), 0);
        assert_eq!(session.stage(), "none");
        assert_eq!(session.exercise(), Some(ExerciseKind::Squat));
    }

    #[test]
    fn test_report_json() {
        let mut session = GymSession::default();
        session.begin(ExerciseKind::BicepCurl);
        session.ingest(&flat_arm(170.0)).unwrap();
        let report: serde_json::Value = serde_json::from_str(&session.report().unwrap()).unwrap();
        assert_eq!(report["stage"], "down");
        assert_eq!(report["counter"], 0);
    }

    #[test]
    fn test_detector_options_come_from_config() {
        let config = TrackerConfig {
            min_detection_confidence: 0.7,
            min_tracking_confidence: 0.4,
            poll_interval_ms: 33,
            ..Default::default()
        };
        let session = GymSession::with_config(config);
        assert_eq!(session.min_detection_confidence(), 0.7);
        assert_eq!(session.min_tracking_confidence(), 0.4);
        assert_eq!(session.poll_interval_ms(), 33);
    }

    #[test]
    fn test_hud_follows_last_frame() {
        let mut session = GymSession::default();
        session.begin(ExerciseKind::BicepCurl);
        session.ingest(&flat_arm(170.0)).unwrap();
        session.ingest(&flat_arm(60.0)).unwrap();
        assert_eq!(session.hud_text(), "REPS: 0 | STAGE: down\nHalf Rep Warning");
    }
}
