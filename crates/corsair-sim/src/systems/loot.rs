//! Chest and reward lifecycle.
//!
//! Chests spin in place. Each reward reels down toward its chest while
//! the ship is alongside and floats back up to rest otherwise. Reaching
//! the collection height loots the chest; chest and reward share one
//! entity so they always leave the world together.

use hecs::{Entity, World};

use corsair_core::components::{Chest, EntityId, Reward};
use corsair_core::constants::*;
use corsair_core::enums::LootOutcome;
use corsair_core::events::AudioEvent;

use super::in_spawn_order;
use crate::score::ScoreState;

/// Cosmetic spin for every chest and its reward.
pub fn spin(world: &mut World) {
    for (_entity, (chest, reward)) in world.query_mut::<(&mut Chest, &mut Reward)>() {
        chest.rotation += CHEST_SPIN_PER_TICK;
        reward.rotation += CHEST_SPIN_PER_TICK;
    }
}

/// Move a reward one step and report what happened.
///
/// The offset never leaves `[REWARD_COLLECT_OFFSET, REWARD_REST_OFFSET]`.
pub fn advance_reward(reward: &mut Reward) -> LootOutcome {
    let entered = reward.in_collection && !reward.reeling;
    reward.reeling = reward.in_collection;

    if reward.in_collection {
        reward.offset = (reward.offset - REWARD_STEP).max(REWARD_COLLECT_OFFSET);
        if reward.offset <= REWARD_COLLECT_OFFSET {
            reward.in_collection = false;
            reward.reeling = false;
            return LootOutcome::Looted;
        }
    } else {
        reward.offset = (reward.offset + REWARD_STEP).min(REWARD_REST_OFFSET);
    }

    if entered {
        LootOutcome::Reeling
    } else {
        LootOutcome::NoChange
    }
}

/// Advance every reward in spawn order; looted chests are marked for removal.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    score: &mut ScoreState,
    audio_events: &mut Vec<AudioEvent>,
) {
    for entity in in_spawn_order::<Reward>(world) {
        let Ok((reward, id)) = world.query_one_mut::<(&mut Reward, &EntityId)>(entity) else {
            continue;
        };
        match advance_reward(reward) {
            LootOutcome::NoChange => {}
            LootOutcome::Reeling => {
                audio_events.push(AudioEvent::RewardReeling { chest: id.0 });
            }
            LootOutcome::Looted => {
                despawn_buffer.push(entity);
                score.chests_looted += 1;
                audio_events.push(AudioEvent::ChestLooted { chest: id.0 });
                tracing::info!(
                    chest = id.0,
                    looted = score.chests_looted,
                    total = score.chests_total,
                    "Chest looted"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corsair_core::types::Position;

    #[test]
    fn test_reward_reels_then_loots_once() {
        let mut reward = Reward {
            in_collection: true,
            ..Reward::default()
        };
        assert_eq!(advance_reward(&mut reward), LootOutcome::Reeling);

        let mut looted = 0;
        let mut last = reward.offset;
        for _ in 0..1_000 {
            // The ship stays alongside until the reward is gone.
            if looted == 0 {
                reward.in_collection = true;
            }
            if advance_reward(&mut reward) == LootOutcome::Looted {
                looted += 1;
            }
            assert!(reward.offset <= last || looted > 0);
            assert!((REWARD_COLLECT_OFFSET..=REWARD_REST_OFFSET).contains(&reward.offset));
            last = reward.offset;
        }
        assert_eq!(looted, 1);
    }

    #[test]
    fn test_reward_floats_back_without_overshoot() {
        let mut reward = Reward {
            in_collection: true,
            ..Reward::default()
        };
        for _ in 0..20 {
            advance_reward(&mut reward);
        }
        assert!(reward.offset < REWARD_REST_OFFSET);

        reward.in_collection = false;
        for _ in 0..1_000 {
            assert_eq!(advance_reward(&mut reward), LootOutcome::NoChange);
        }
        assert_eq!(reward.offset, REWARD_REST_OFFSET);
    }

    #[test]
    fn test_reeling_cue_on_each_approach() {
        let mut reward = Reward::default();
        reward.in_collection = true;
        assert_eq!(advance_reward(&mut reward), LootOutcome::Reeling);
        assert_eq!(advance_reward(&mut reward), LootOutcome::NoChange);
        reward.in_collection = false;
        advance_reward(&mut reward);
        reward.in_collection = true;
        assert_eq!(advance_reward(&mut reward), LootOutcome::Reeling);
    }

    #[test]
    fn test_looted_chest_is_marked_with_counter() {
        let mut world = World::new();
        let chest = world.spawn((
            Chest::default(),
            Reward {
                in_collection: true,
                reeling: true,
                offset: REWARD_COLLECT_OFFSET + REWARD_STEP,
                ..Reward::default()
            },
            EntityId(3),
            Position::new(0.0, 0.0, 0.0),
        ));
        let mut despawn = Vec::new();
        let mut score = ScoreState::new(0, 1);
        let mut audio = Vec::new();
        run(&mut world, &mut despawn, &mut score, &mut audio);
        assert_eq!(despawn, vec![chest]);
        assert_eq!(score.chests_looted, 1);
        assert_eq!(audio, vec![AudioEvent::ChestLooted { chest: 3 }]);
    }

    #[test]
    fn test_spin_turns_chest_and_reward() {
        let mut world = World::new();
        let chest = world.spawn((Chest::default(), Reward::default()));
        spin(&mut world);
        spin(&mut world);
        assert_eq!(world.get::<&Chest>(chest).unwrap().rotation, 2.0 * CHEST_SPIN_PER_TICK);
        assert_eq!(world.get::<&Reward>(chest).unwrap().rotation, 2.0 * CHEST_SPIN_PER_TICK);
    }
}
