//! Basic usage of `SlotMap`: a tiny entity registry where other code refers to entities by
//! handle, so entities can be despawned without invalidating references to the survivors.

use slot_map::{SlotHandle, SlotMap};

#[derive(Debug)]
struct Entity {
    name: &'static str,
    health: u32,
    target: Option<SlotHandle>,
}

fn main() {
    println!("=== Slot Map Basic Example ===");

    let mut entities = SlotMap::new();

    let knight = entities.insert(Entity {
        name: "knight",
        health: 100,
        target: None,
    });
    let goblin = entities.insert(Entity {
        name: "goblin",
        health: 30,
        target: Some(knight),
    });
    let troll = entities.insert(Entity {
        name: "troll",
        health: 250,
        target: Some(knight),
    });

    entities[knight].target = Some(goblin);

    // Every entity with a target deals some damage to it.
    let attacks = entities
        .entries()
        .filter_map(|(attacker, entity)| entity.target.map(|target| (attacker, target)))
        .collect::<Vec<_>>();

    for (attacker, target) in attacks {
        if let Some(victim) = entities.get_mut(target) {
            victim.health = victim.health.saturating_sub(40);
        }

        println!("{} attacks its target", entities[attacker].name);
    }

    // Despawn everything that ran out of health. The troll moves into the freed position but
    // its handle keeps working.
    entities.retain(|_, entity| entity.health > 0);

    println!("Goblin still present: {}", entities.contains(goblin));
    println!("Troll: {:?}", entities[troll]);

    for (position, entity) in entities.iter().enumerate() {
        println!("position {position}: {} ({} hp)", entity.name, entity.health);
    }

    // The goblin's handle is reused for the next entity.
    let wolf = entities.insert(Entity {
        name: "wolf",
        health: 45,
        target: Some(troll),
    });
    assert_eq!(wolf, goblin);

    println!("Slot map example completed successfully!");
}
