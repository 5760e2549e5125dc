//! Animals that make sounds through a shared trait.

pub trait Animal {
    fn name(&self) -> &str;
    fn sound(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    pub name: String,
}

impl Animal for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn sound(&self) -> String {
        format!("{} says woof", self.name)
    }
}

impl Animal for Cat {
    fn name(&self) -> &str {
        &self.name
    }

    fn sound(&self) -> String {
        format!("{} says meow", self.name)
    }
}

/// Collects the sound of every animal in order.
pub fn chorus(animals: &[Box<dyn Animal>]) -> Vec<String> {
    animals.iter().map(|animal| animal.sound()).collect()
}
