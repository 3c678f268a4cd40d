//! The keyframes of the showcase, attached to chapter labels.

use glam::Vec3;

use crate::dom::Chapter;
use crate::options::CameraOptions;
use crate::responsive::VariantParams;
use crate::scene::{Channel, Part};
use crate::timeline::{AxisTargets, AxisValue, Timeline, TweenTarget};

/// Labels the choreography attaches keyframes to.
pub mod labels {
    /// Camera moves in to a centred framing.
    pub const INTRO: &str = "intro";
    /// Exploded view.
    pub const DESIGN: &str = "design";
    /// Root rotation.
    pub const PERFORMANCE: &str = "performance";
    /// Second, closer camera framing.
    pub const TIMING: &str = "timing";
    /// Asymmetric cup scaling.
    pub const FEATURES: &str = "features";
    /// Return to rest.
    pub const CTA: &str = "cta";
}

/// Build the labelled timeline for one variant.
///
/// `camera_home` is the camera position when the timeline is built, or
/// `None` without a camera, in which case every camera keyframe is left out
/// and the rest of each label still plays.
pub(crate) fn choreograph(
    chapters: &[Chapter],
    params: VariantParams,
    framing: &CameraOptions,
    camera_home: Option<Vec3>,
) -> Timeline {
    let mut timeline = Timeline::new();
    for chapter in chapters {
        let _ = timeline.add_label(&chapter.label);
    }

    let offset = params.explode_offset;
    let turn = params.rotation_amount;
    let by = AxisValue::By;
    let part = TweenTarget::Part;

    if let Some(home) = camera_home {
        let _ = timeline.from_to(
            TweenTarget::Camera,
            Channel::Position,
            home,
            AxisTargets::to(Vec3::from(framing.intro_framing)),
            labels::INTRO,
        );
    }

    let explode = [
        (Part::Headband, AxisTargets::default().y(by(offset))),
        (
            Part::LeftCup,
            AxisTargets::default().x(by(-offset)).z(by(offset)),
        ),
        (
            Part::RightCup,
            AxisTargets::default().x(by(offset)).z(by(offset)),
        ),
        (Part::Frame, AxisTargets::default().y(by(-offset * 0.5))),
    ];
    for (target, axes) in explode {
        let _ = timeline.to(part(target), Channel::Position, axes, labels::DESIGN);
    }

    let _ = timeline.to(
        part(Part::Root),
        Channel::Rotation,
        AxisTargets::default().y(by(turn)).x(by(turn * 0.25)),
        labels::PERFORMANCE,
    );

    if camera_home.is_some() {
        let _ = timeline.to(
            TweenTarget::Camera,
            Channel::Position,
            AxisTargets::to(Vec3::from(framing.timing_framing)),
            labels::TIMING,
        );
    }

    let _ = timeline.to(
        part(Part::LeftCup),
        Channel::Scale,
        AxisTargets::to(Vec3::splat(1.15)),
        labels::FEATURES,
    );
    let _ = timeline.to(
        part(Part::RightCup),
        Channel::Scale,
        AxisTargets::to(Vec3::splat(0.95)),
        labels::FEATURES,
    );

    for target in [Part::Headband, Part::LeftCup, Part::RightCup, Part::Frame] {
        let _ = timeline.to(
            part(target),
            Channel::Position,
            AxisTargets::to(Vec3::ZERO),
            labels::CTA,
        );
    }
    for target in [Part::LeftCup, Part::RightCup] {
        let _ = timeline.to(
            part(target),
            Channel::Scale,
            AxisTargets::to(Vec3::ONE),
            labels::CTA,
        );
    }
    if let Some(home) = camera_home {
        let _ = timeline.to(
            TweenTarget::Camera,
            Channel::Position,
            AxisTargets::to(home),
            labels::CTA,
        );
    }

    timeline
}
