//! Fixed-size slot inventories and crafting recipes
//!
//! Both the player's backpack and the workbench storage are slot arrays of a
//! fixed length. Every operation either completes fully or leaves the
//! inventory untouched.

use serde::{Deserialize, Serialize};

/// Everything that can occupy an inventory slot or lie on the ground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    Apple,
    Fish,
    Wood,
    Torch,
    Seed,
    AppleJuice,
    BigFish,
    WoodStand,
}

impl ItemType {
    /// Items that restore energy when eaten
    pub fn is_food(&self) -> bool {
        matches!(
            self,
            ItemType::Apple | ItemType::Fish | ItemType::AppleJuice | ItemType::BigFish
        )
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ItemType::Apple => "apple",
            ItemType::Fish => "fish",
            ItemType::Wood => "wood",
            ItemType::Torch => "torch",
            ItemType::Seed => "seed",
            ItemType::AppleJuice => "apple juice",
            ItemType::BigFish => "big fish",
            ItemType::WoodStand => "wooden stand",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A workbench recipe: `count` of `input` become one `output`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub output: ItemType,
    pub input: ItemType,
    pub count: usize,
}

pub const RECIPES: [Recipe; 3] = [
    Recipe { output: ItemType::AppleJuice, input: ItemType::Apple, count: 3 },
    Recipe { output: ItemType::BigFish, input: ItemType::Fish, count: 3 },
    Recipe { output: ItemType::WoodStand, input: ItemType::Wood, count: 3 },
];

impl Recipe {
    pub fn for_output(output: ItemType) -> Option<Recipe> {
        RECIPES.iter().copied().find(|r| r.output == output)
    }
}

/// Fixed-length array of optional item slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<Option<ItemType>>,
}

impl Inventory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Option<ItemType> {
        self.slots.get(index).copied().flatten()
    }

    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_none())
    }

    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    pub fn empty_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.capacity() - self.empty_count()
    }

    pub fn count(&self, item: ItemType) -> usize {
        self.slots.iter().filter(|s| **s == Some(item)).count()
    }

    /// Put `item` in the first empty slot, returning the slot used
    pub fn insert(&mut self, item: ItemType) -> Option<usize> {
        let index = self.first_empty()?;
        self.slots[index] = Some(item);
        Some(index)
    }

    /// Empty a slot, returning what it held
    pub fn take(&mut self, index: usize) -> Option<ItemType> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Overwrite an occupied slot in place (e.g. wood becoming a torch)
    pub fn replace(&mut self, index: usize, item: ItemType) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_some() => {
                *slot = Some(item);
                true
            }
            _ => false,
        }
    }

    /// Remove exactly `n` of `item`, lowest slots first, or nothing at all
    pub fn remove_n(&mut self, item: ItemType, n: usize) -> bool {
        if self.count(item) < n {
            return false;
        }
        let mut removed = 0;
        for slot in self.slots.iter_mut() {
            if removed == n {
                break;
            }
            if *slot == Some(item) {
                *slot = None;
                removed += 1;
            }
        }
        true
    }

    /// First slot holding any item matching `pred`
    pub fn position(&self, pred: impl Fn(ItemType) -> bool) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.is_some_and(|item| pred(item)))
    }
}

/// Craft `output` from the inventory. All-or-nothing.
pub fn craft(inventory: &mut Inventory, output: ItemType) -> bool {
    let Some(recipe) = Recipe::for_output(output) else {
        return false;
    };
    if !inventory.remove_n(recipe.input, recipe.count) {
        return false;
    }
    // Consuming `count` >= 1 items always frees a slot
    inventory.insert(recipe.output).is_some()
}

/// Move the item in `from[slot]` to the first empty slot of `to`
pub fn transfer(from: &mut Inventory, slot: usize, to: &mut Inventory) -> bool {
    if from.get(slot).is_none() || to.is_full() {
        return false;
    }
    match from.take(slot) {
        Some(item) => to.insert(item).is_some(),
        None => false,
    }
}
