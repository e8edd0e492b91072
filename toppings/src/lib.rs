//! Pizza pricing where every topping wraps the pizza underneath it: the
//! order of wrapping spells out the menu line, and each layer adds its
//! own price to whatever it wraps.

/// Anything that can be priced and described on the menu.
pub trait Pizza {
    fn price(&self) -> u32;
    fn description(&self) -> String;
}

/// Toppings stack over boxed pizzas the same as over concrete ones.
impl Pizza for Box<dyn Pizza> {
    fn price(&self) -> u32 {
        self.as_ref().price()
    }

    fn description(&self) -> String {
        self.as_ref().description()
    }
}

/// The plain base pizza every topping stacks onto.
#[derive(Debug, Default, Clone, Copy)]
pub struct Domino;

impl Pizza for Domino {
    fn price(&self) -> u32 {
        15
    }

    fn description(&self) -> String {
        "Watch the pizza of your wildest dreams come to life!".to_string()
    }
}

/// Extra cheese, +$5.
#[derive(Debug, Clone, Copy)]
pub struct Cheese<P>(pub P);

impl<P: Pizza> Pizza for Cheese<P> {
    fn price(&self) -> u32 {
        self.0.price() + 5
    }

    fn description(&self) -> String {
        format!("{}, Cheese", self.0.description())
    }
}

/// Paneer cubes, +$4.
#[derive(Debug, Clone, Copy)]
pub struct Paneer<P>(pub P);

impl<P: Pizza> Pizza for Paneer<P> {
    fn price(&self) -> u32 {
        self.0.price() + 4
    }

    fn description(&self) -> String {
        format!("{}, Paneer", self.0.description())
    }
}

/// Olives, +$3.
#[derive(Debug, Clone, Copy)]
pub struct Olive<P>(pub P);

impl<P: Pizza> Pizza for Olive<P> {
    fn price(&self) -> u32 {
        self.0.price() + 3
    }

    fn description(&self) -> String {
        format!("{}, Olive", self.0.description())
    }
}
