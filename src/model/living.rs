//! The closed `LivingThing` sum type.
//!
//! Every consumer dispatches with an exhaustive `match`, so adding a variant
//! is a compile error at each call site until it is handled.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub name: String,
}

/// Something alive: either a [`Person`] or a [`Dog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LivingThing {
    Person(Person),
    Dog(Dog),
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<Person> for LivingThing {
    fn from(person: Person) -> Self {
        LivingThing::Person(person)
    }
}

impl From<Dog> for LivingThing {
    fn from(dog: Dog) -> Self {
        LivingThing::Dog(dog)
    }
}

impl LivingThing {
    pub fn name(&self) -> &str {
        match self {
            LivingThing::Person(person) => &person.name,
            LivingThing::Dog(dog) => &dog.name,
        }
    }

    /// Kind-and-name line, e.g. `" Person Bob"`.
    pub fn describe(&self) -> String {
        match self {
            LivingThing::Person(person) => format!(" Person {}", person.name),
            LivingThing::Dog(dog) => format!(" Dog {}", dog.name),
        }
    }

    /// The record rendered twice, one per line.
    pub fn render_twice(&self) -> String {
        let render = |thing: &LivingThing| thing.to_string();
        format!("{}\n{}", render(self), render(self))
    }
}

impl Display for LivingThing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LivingThing::Person(person) => {
                write!(f, "Person(name={}, age={})", person.name, person.age)
            }
            LivingThing::Dog(dog) => write!(f, "Dog(name={})", dog.name),
        }
    }
}
