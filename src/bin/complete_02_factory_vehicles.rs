use colored::Colorize;
use std::fmt::Debug;
use thiserror::Error;

// =============================================================================
// Milestone 1: The product capability
// =============================================================================

pub trait Vehicle: Debug {
    fn kind(&self) -> &str;
    fn horsepower(&self) -> u32;

    fn summary(&self) -> String {
        format!("Type: {}, Horsepower: {}", self.kind(), self.horsepower())
    }
}

#[derive(Debug)]
pub struct Car {
    horsepower: u32,
}

impl Car {
    pub fn new(horsepower: u32) -> Self {
        Self { horsepower }
    }
}

impl Vehicle for Car {
    fn kind(&self) -> &str {
        "Car"
    }

    fn horsepower(&self) -> u32 {
        self.horsepower
    }
}

#[derive(Debug)]
pub struct Truck {
    horsepower: u32,
}

impl Truck {
    pub fn new(horsepower: u32) -> Self {
        Self { horsepower }
    }
}

impl Vehicle for Truck {
    fn kind(&self) -> &str {
        "Truck"
    }

    fn horsepower(&self) -> u32 {
        self.horsepower
    }
}

// =============================================================================
// Milestone 2: The factory
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VehicleError {
    #[error("unknown vehicle kind: '{0}'")]
    UnknownKind(String),
}

pub struct VehicleFactory;

impl VehicleFactory {
    /// Picks the concrete vehicle from a runtime kind string,
    /// case-insensitively. The caller only ever sees `dyn Vehicle`.
    pub fn build(kind: &str, horsepower: u32) -> Result<Box<dyn Vehicle>, VehicleError> {
        if kind.eq_ignore_ascii_case("car") {
            Ok(Box::new(Car::new(horsepower)))
        } else if kind.eq_ignore_ascii_case("truck") {
            Ok(Box::new(Truck::new(horsepower)))
        } else {
            Err(VehicleError::UnknownKind(kind.to_string()))
        }
    }
}

// =============================================================================
// Milestone 3: Ordering from the factory
// =============================================================================

fn main() {
    println!("{}", "=== Vehicle Factory ===".bold().cyan());

    let orders = [("car", 150), ("truck", 400), ("hovercraft", 90)];

    let mut fleet: Vec<Box<dyn Vehicle>> = Vec::new();
    for (kind, horsepower) in orders {
        match VehicleFactory::build(kind, horsepower) {
            Ok(vehicle) => {
                println!("{} {}", "[built]".green(), vehicle.summary());
                fleet.push(vehicle);
            }
            Err(err) => println!("{} {err}", "[rejected]".red()),
        }
    }

    println!("\n{}", "=== Fleet ===".bold().cyan());
    for (idx, vehicle) in fleet.iter().enumerate() {
        println!("Vehicle {}: {}", idx + 1, vehicle.summary());
    }
}
