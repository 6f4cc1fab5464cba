//! JSON wire types for the pose backend.
//!
//! Field names follow the backend exactly (`scoringEffect`, `poseValue`,
//! `current_pose`), so the Rust names are mapped with serde attributes.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::pose::Pose;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

/// Backend routes consumed by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ScoringEffect,
    UpdateScore,
    CurrentPose,
    VideoFeed,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::ScoringEffect => "get_scoring_effect",
            Endpoint::UpdateScore => "update_score",
            Endpoint::CurrentPose => "current_pose",
            Endpoint::VideoFeed => "video_feed",
        }
    }

    pub fn method(self) -> Method {
        match self {
            Endpoint::ScoringEffect | Endpoint::VideoFeed => Method::Get,
            Endpoint::UpdateScore | Endpoint::CurrentPose => Method::Post,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}

/// `GET /get_scoring_effect`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringEffectResponse {
    #[serde(rename = "scoringEffect", default)]
    pub scoring_effect: Option<i64>,
}

/// `POST /update_score`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateScoreRequest {
    #[serde(rename = "scoringEffect")]
    pub scoring_effect: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateScoreResponse {
    pub score: i64,
    #[serde(rename = "scoringEffect", default)]
    pub scoring_effect: Option<i64>,
}

/// `POST /current_pose`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentPoseRequest {
    #[serde(rename = "poseValue")]
    pub pose_value: Pose,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentPoseResponse {
    pub status: String,
    #[serde(default)]
    pub current_pose: Option<u8>,
    #[serde(default)]
    pub message: Option<String>,
}

impl CurrentPoseResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Classifies a `/current_pose` reply. Returns the rejection message, or
/// `None` when the pose was accepted. An unreadable body on a 2xx reply
/// counts as accepted.
pub fn pose_rejection(
    http_ok: bool,
    http_status: u16,
    reply: Option<CurrentPoseResponse>,
) -> Option<String> {
    let accepted = http_ok && reply.as_ref().map_or(true, CurrentPoseResponse::is_success);
    if accepted {
        return None;
    }
    Some(
        reply
            .and_then(|r| r.message)
            .unwrap_or_else(|| format!("HTTP {http_status}")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scoring_effect_accepts_missing_and_null() {
        let r: ScoringEffectResponse = serde_json::from_value(json!({"scoringEffect": 3})).unwrap();
        assert_eq!(r.scoring_effect, Some(3));
        let r: ScoringEffectResponse = serde_json::from_value(json!({"scoringEffect": null})).unwrap();
        assert_eq!(r.scoring_effect, None);
        let r: ScoringEffectResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(r.scoring_effect, None);
    }

    #[test]
    fn requests_use_backend_field_names() {
        let body = serde_json::to_value(UpdateScoreRequest { scoring_effect: 4 }).unwrap();
        assert_eq!(body, json!({"scoringEffect": 4}));

        let body = serde_json::to_value(CurrentPoseRequest {
            pose_value: Pose::TreePose,
        })
        .unwrap();
        assert_eq!(body, json!({"poseValue": 1}));
    }

    #[test]
    fn update_score_reply_tolerates_missing_echo() {
        let r: UpdateScoreResponse = serde_json::from_value(json!({"score": -50})).unwrap();
        assert_eq!(r.score, -50);
        assert_eq!(r.scoring_effect, None);
    }

    #[test]
    fn current_pose_error_reply() {
        let r: CurrentPoseResponse = serde_json::from_value(
            json!({"status": "error", "message": "Invalid pose value"}),
        )
        .unwrap();
        assert!(!r.is_success());
        assert_eq!(r.message.as_deref(), Some("Invalid pose value"));
    }

    #[test]
    fn pose_reply_classification() {
        let ok = CurrentPoseResponse {
            status: "success".to_string(),
            current_pose: Some(2),
            message: None,
        };
        assert_eq!(pose_rejection(true, 200, Some(ok)), None);
        assert_eq!(pose_rejection(true, 200, None), None);

        let err = CurrentPoseResponse {
            status: "error".to_string(),
            current_pose: None,
            message: Some("Invalid pose value".to_string()),
        };
        assert_eq!(
            pose_rejection(false, 400, Some(err)).as_deref(),
            Some("Invalid pose value")
        );
        assert_eq!(pose_rejection(false, 502, None).as_deref(), Some("HTTP 502"));
    }

    #[test]
    fn endpoint_methods() {
        assert_eq!(Endpoint::ScoringEffect.method(), Method::Get);
        assert_eq!(Endpoint::UpdateScore.method(), Method::Post);
        assert_eq!(Endpoint::CurrentPose.to_string(), "/current_pose");
    }
}
