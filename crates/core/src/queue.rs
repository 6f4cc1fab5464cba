use crate::pose::Pose;
use crate::prng::Prng;

/// Number of upcoming poses rendered at once.
pub const VISIBLE_SLOTS: usize = 3;

/// Fixed-length queue of upcoming target poses.
///
/// Always holds exactly four poses; the first three are shown and the first
/// one is the pose the backend scores against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoseQueue {
    slots: [Pose; Pose::COUNT],
}

impl PoseQueue {
    /// The queue every session starts with: one of each pose, in order.
    pub fn seeded() -> Self {
        Self {
            slots: [
                Pose::DownwardDog,
                Pose::TreePose,
                Pose::Warrior1,
                Pose::Warrior2,
            ],
        }
    }

    pub fn random(rng: &mut Prng) -> Self {
        Self {
            slots: std::array::from_fn(|_| Pose::random(rng)),
        }
    }

    pub fn slots(&self) -> &[Pose; Pose::COUNT] {
        &self.slots
    }

    pub fn visible(&self) -> &[Pose] {
        &self.slots[..VISIBLE_SLOTS]
    }

    pub fn lead(&self) -> Pose {
        self.slots[0]
    }

    /// Drops the lead pose and appends a fresh random one. Returns the dropped pose.
    pub fn rotate(&mut self, rng: &mut Prng) -> Pose {
        let dropped = self.slots[0];
        self.slots.rotate_left(1);
        self.slots[Pose::COUNT - 1] = Pose::random(rng);
        dropped
    }

    /// Replaces every slot with a fresh draw.
    pub fn refresh(&mut self, rng: &mut Prng) {
        *self = Self::random(rng);
    }
}

impl Default for PoseQueue {
    fn default() -> Self {
        Self::seeded()
    }
}
