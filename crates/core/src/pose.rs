use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prng::Prng;

/// One of the four target poses the player is asked to hold.
///
/// The discriminant is the wire value the backend expects in `poseValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Pose {
    DownwardDog = 0,
    TreePose = 1,
    Warrior1 = 2,
    Warrior2 = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pose value {0} is outside 0..=3")]
pub struct InvalidPose(pub i64);

impl Pose {
    pub const COUNT: usize = 4;

    pub fn all() -> &'static [Pose] {
        &[
            Pose::DownwardDog,
            Pose::TreePose,
            Pose::Warrior1,
            Pose::Warrior2,
        ]
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Asset stem, shared by the image file name.
    pub fn name(self) -> &'static str {
        match self {
            Pose::DownwardDog => "DownwardDog",
            Pose::TreePose => "TreePose",
            Pose::Warrior1 => "Warrior1",
            Pose::Warrior2 => "Warrior2",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Pose::DownwardDog => "Downward Dog",
            Pose::TreePose => "Tree Pose",
            Pose::Warrior1 => "Warrior I",
            Pose::Warrior2 => "Warrior II",
        }
    }

    pub fn image_path(self) -> &'static str {
        match self {
            Pose::DownwardDog => "/poses/DownwardDog.png",
            Pose::TreePose => "/poses/TreePose.png",
            Pose::Warrior1 => "/poses/Warrior1.png",
            Pose::Warrior2 => "/poses/Warrior2.png",
        }
    }

    pub fn random(rng: &mut Prng) -> Pose {
        Pose::all()[rng.gen_range_usize(0, Pose::COUNT)]
    }
}

impl TryFrom<i64> for Pose {
    type Error = InvalidPose;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Pose::DownwardDog),
            1 => Ok(Pose::TreePose),
            2 => Ok(Pose::Warrior1),
            3 => Ok(Pose::Warrior2),
            other => Err(InvalidPose(other)),
        }
    }
}

impl TryFrom<u8> for Pose {
    type Error = InvalidPose;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Pose::try_from(i64::from(value))
    }
}

impl From<Pose> for u8 {
    fn from(pose: Pose) -> Self {
        pose.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_match_catalogue_order() {
        for (i, pose) in Pose::all().iter().enumerate() {
            assert_eq!(pose.value() as usize, i);
            assert_eq!(Pose::try_from(i as i64), Ok(*pose));
        }
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert_eq!(Pose::try_from(4i64), Err(InvalidPose(4)));
        assert_eq!(Pose::try_from(-1i64), Err(InvalidPose(-1)));
        assert!(Pose::try_from(200u8).is_err());
    }

    #[test]
    fn image_paths_use_asset_stem() {
        for pose in Pose::all() {
            assert_eq!(pose.image_path(), format!("/poses/{}.png", pose.name()));
        }
    }

    #[test]
    fn serializes_as_wire_integer() {
        let raw = serde_json::to_string(&Pose::Warrior1).unwrap();
        assert_eq!(raw, "2");
        let back: Pose = serde_json::from_str("3").unwrap();
        assert_eq!(back, Pose::Warrior2);
        assert!(serde_json::from_str::<Pose>("9").is_err());
    }
}
