use colored::Colorize;
use std::collections::HashMap;

// =============================================================================
// Milestone 1: Cloneable game characters
// =============================================================================

/// `Clone` cannot be a supertrait here (it is not object safe), so the
/// capability carries its own boxed-clone method.
pub trait GameCharacter {
    fn clone_character(&self) -> Box<dyn GameCharacter>;
    fn describe(&self) -> String;
    fn health(&self) -> u32;
    fn take_damage(&mut self, amount: u32);
}

#[derive(Clone)]
pub struct Orc {
    weapon: String,
    health: u32,
}

impl Orc {
    pub fn new() -> Self {
        Self {
            weapon: "Axe".to_string(),
            health: 100,
        }
    }
}

impl Default for Orc {
    fn default() -> Self {
        Self::new()
    }
}

impl GameCharacter for Orc {
    fn clone_character(&self) -> Box<dyn GameCharacter> {
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!("Orc with {}, Health: {}", self.weapon, self.health)
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}

#[derive(Clone)]
pub struct Troll {
    weapon: String,
    health: u32,
}

impl Troll {
    pub fn new() -> Self {
        Self {
            weapon: "Club".to_string(),
            health: 150,
        }
    }
}

impl Default for Troll {
    fn default() -> Self {
        Self::new()
    }
}

impl GameCharacter for Troll {
    fn clone_character(&self) -> Box<dyn GameCharacter> {
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!("Troll with {}, Health: {}", self.weapon, self.health)
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}

// =============================================================================
// Milestone 2: The prototype registry
// =============================================================================

/// A plain value the driver constructs and passes around; spawning clones
/// the stored prototype instead of building characters from scratch.
#[derive(Default)]
pub struct CharacterRegistry {
    prototypes: HashMap<String, Box<dyn GameCharacter>>,
}

impl CharacterRegistry {
    pub fn new() -> Self {
        Self {
            prototypes: HashMap::new(),
        }
    }

    pub fn add_prototype(&mut self, key: impl Into<String>, prototype: Box<dyn GameCharacter>) {
        self.prototypes.insert(key.into(), prototype);
    }

    /// Returns a fresh clone of the prototype under `key`, if one exists.
    pub fn spawn(&self, key: &str) -> Option<Box<dyn GameCharacter>> {
        self.prototypes
            .get(key)
            .map(|prototype| prototype.clone_character())
    }

    pub fn prototype_count(&self) -> usize {
        self.prototypes.len()
    }
}

// =============================================================================
// Milestone 3: Spawning a raiding party
// =============================================================================

fn main() {
    let mut registry = CharacterRegistry::new();
    registry.add_prototype("orc", Box::new(Orc::new()));
    registry.add_prototype("troll", Box::new(Troll::new()));

    println!("{}", "=== Spawned from Prototypes ===".bold().cyan());
    let mut party: Vec<Box<dyn GameCharacter>> = ["orc", "orc", "troll"]
        .iter()
        .filter_map(|key| registry.spawn(key))
        .collect();

    for character in &party {
        println!("{}", character.describe());
    }

    println!("\n{}", "=== Clones Are Independent ===".bold().cyan());
    party[0].take_damage(30);
    println!("After the first orc takes 30 damage:");
    for character in &party {
        println!("{}", character.describe());
    }
}
