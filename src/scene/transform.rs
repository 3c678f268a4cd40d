use glam::{EulerRot, Mat4, Quat, Vec3};

/// Transform channel a keyframe animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Translation.
    Position,
    /// Euler XYZ rotation in radians.
    Rotation,
    /// Per-axis scale.
    Scale,
}

/// Local position, rotation, and scale of a scene node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Translation relative to the parent.
    pub position: Vec3,
    /// Euler XYZ rotation in radians.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Transform {
    /// No translation, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Identity transform moved to `position`.
    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Value of one channel.
    #[must_use]
    pub fn channel(&self, channel: Channel) -> Vec3 {
        match channel {
            Channel::Position => self.position,
            Channel::Rotation => self.rotation,
            Channel::Scale => self.scale,
        }
    }

    /// Mutable access to one channel.
    pub fn channel_mut(&mut self, channel: Channel) -> &mut Vec3 {
        match channel {
            Channel::Position => &mut self.position,
            Channel::Rotation => &mut self.rotation,
            Channel::Scale => &mut self.scale,
        }
    }

    /// Local matrix (scale, then rotation, then translation).
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_access_round_trips() {
        let mut t = Transform::IDENTITY;
        *t.channel_mut(Channel::Scale) = Vec3::splat(2.0);
        assert_eq!(t.channel(Channel::Scale), Vec3::splat(2.0));
        assert_eq!(t.channel(Channel::Position), Vec3::ZERO);
    }

    #[test]
    fn matrix_translates_the_origin() {
        let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        let p = t.matrix().transform_point3(Vec3::ZERO);
        assert!((p - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);
    }
}
