//! Presentation: animator parameter bookkeeping.

use super::{AnimatorParams, DustKind, HURT_FLASH_TIME};
use crate::player::{AttackKind, Pose, PresentationCue};

#[test]
fn test_pose_flags_follow_cues() {
    let mut params = AnimatorParams::default();
    params.apply(PresentationCue::Pose(Pose::Walking, true));
    params.apply(PresentationCue::Pose(Pose::Sitting, true));
    assert!(params.walking && params.sitting);
    assert_eq!(params.dominant(), Pose::Sitting);

    params.apply(PresentationCue::Pose(Pose::Sitting, false));
    params.apply(PresentationCue::Pose(Pose::Walking, false));
    params.apply(PresentationCue::Pose(Pose::Jumping, true));
    assert!(!params.walking);
    assert_eq!(params.dominant(), Pose::Jumping);
}

#[test]
fn test_attack_reentry_keeps_latest_kind() {
    let mut params = AnimatorParams::default();
    params.apply(PresentationCue::Pose(Pose::Attacking(AttackKind::Regular), true));
    // Exit of the old attack then enter of the chained one.
    params.apply(PresentationCue::Pose(Pose::Attacking(AttackKind::Regular), false));
    params.apply(PresentationCue::Pose(Pose::Attacking(AttackKind::Up), true));
    assert_eq!(params.attacking, Some(AttackKind::Up));

    // A stale "off" for a different kind leaves the current one alone.
    params.apply(PresentationCue::Pose(Pose::Attacking(AttackKind::Down), false));
    assert_eq!(params.attacking, Some(AttackKind::Up));
    assert_eq!(params.dominant(), Pose::Attacking(AttackKind::Up));
}

#[test]
fn test_knockback_dominates_other_poses() {
    let mut params = AnimatorParams::default();
    params.apply(PresentationCue::Pose(Pose::Falling, true));
    params.apply(PresentationCue::Pose(Pose::KnockedBack, true));
    assert_eq!(params.dominant(), Pose::KnockedBack);
}

#[test]
fn test_toggles_and_values() {
    let mut params = AnimatorParams::default();
    params.apply(PresentationCue::ToggleAltAttack);
    params.apply(PresentationCue::FallTime(0.4));
    params.apply(PresentationCue::ChargeReady(true));
    params.apply(PresentationCue::Turn);
    assert!(params.alt_attack);
    assert_eq!(params.fall_time, 0.4);
    assert!(params.charge_ready && params.turn);

    params.apply(PresentationCue::ToggleAltAttack);
    params.apply(PresentationCue::ClearTurn);
    assert!(!params.alt_attack && !params.turn);
}

#[test]
fn test_hurt_flash_decays() {
    let mut params = AnimatorParams::default();
    params.apply(PresentationCue::Hurt);
    assert_eq!(params.hurt_flash, HURT_FLASH_TIME);
    params.tick(HURT_FLASH_TIME * 2.0);
    assert_eq!(params.hurt_flash, 0.0);
}

#[test]
fn test_dust_only_for_dust_cues() {
    assert_eq!(DustKind::from_cue(PresentationCue::JumpDust), Some(DustKind::Jump));
    assert_eq!(DustKind::from_cue(PresentationCue::LandingDust), Some(DustKind::Landing));
    assert_eq!(DustKind::from_cue(PresentationCue::WallDust(true)), Some(DustKind::Wall));
    assert_eq!(DustKind::from_cue(PresentationCue::WallDust(false)), None);
    assert_eq!(DustKind::from_cue(PresentationCue::Died), None);
}
