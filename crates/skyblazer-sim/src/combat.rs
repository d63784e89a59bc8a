//! Combat resolution — damage application, shield/cheat policy, kill scoring.
//!
//! Hits on entities already at zero hp are ignored: a craft deactivated
//! earlier in the tick never absorbs further damage or double-awards score.

use hecs::{Entity, World};

use skyblazer_core::components::{Boss, Enemy, PlayerCraft};
use skyblazer_core::constants::*;
use skyblazer_core::enums::{EnemyClass, RunOutcome};
use skyblazer_core::events::AudioEvent;

use crate::progress::ScoreState;

/// Resolve a hit on the player. The shield absorbs exactly one hit and
/// breaks; with cheat mode engaged the hit is ignored outright; otherwise
/// health drops by `damage`, clamped at zero.
pub fn hit_player(world: &mut World, damage: i32, cheat: bool, audio_events: &mut Vec<AudioEvent>) {
    for (_entity, craft) in world.query_mut::<&mut PlayerCraft>() {
        if craft.shield {
            craft.shield = false;
            audio_events.push(AudioEvent::ShieldBroken);
        } else if !cheat {
            craft.health = (craft.health - damage).max(0);
            audio_events.push(AudioEvent::PlayerHit { damage });
        }
    }
}

/// Apply damage to an enemy. Returns true when the hit landed (the enemy was
/// still live); a kill awards class-scaled score, which may advance the
/// level. Callers consume their projectile only on a landed hit.
pub fn hit_enemy(
    world: &mut World,
    entity: Entity,
    damage: u32,
    score: &mut ScoreState,
    audio_events: &mut Vec<AudioEvent>,
) -> bool {
    let downed_class = {
        let mut enemy = match world.get::<&mut Enemy>(entity) {
            Ok(e) => e,
            Err(_) => return false,
        };
        if enemy.hp == 0 {
            return false;
        }
        enemy.hp = enemy.hp.saturating_sub(damage);
        if enemy.hp == 0 {
            Some(enemy.class)
        } else {
            None
        }
    };

    if let Some(class) = downed_class {
        score.enemies_downed += 1;
        audio_events.push(AudioEvent::EnemyDown { class });
        score.award(enemy_score(class), audio_events);
    }
    true
}

/// Apply damage to the boss. Returns true when the hit landed. Destroying it
/// awards the boss bonus and records the victory outcome that ends the run.
pub fn hit_boss(
    world: &mut World,
    entity: Entity,
    damage: u32,
    score: &mut ScoreState,
    outcome: &mut Option<RunOutcome>,
    audio_events: &mut Vec<AudioEvent>,
) -> bool {
    let downed = {
        let mut boss = match world.get::<&mut Boss>(entity) {
            Ok(b) => b,
            Err(_) => return false,
        };
        if boss.hp == 0 {
            return false;
        }
        boss.hp = boss.hp.saturating_sub(damage);
        boss.hp == 0
    };

    if downed {
        audio_events.push(AudioEvent::BossDown);
        score.award(BOSS_SCORE, audio_events);
        *outcome = Some(RunOutcome::Victory);
    } else {
        audio_events.push(AudioEvent::BossHit);
    }
    true
}

/// Score awarded for destroying an enemy of the given class.
pub fn enemy_score(class: EnemyClass) -> u64 {
    match class {
        EnemyClass::Standard => STANDARD_ENEMY_SCORE,
        EnemyClass::Fast => FAST_ENEMY_SCORE,
        EnemyClass::Heavy => HEAVY_ENEMY_SCORE,
    }
}
