use crate::domain::model::{Direction, Product};

/// Locates the neighbor of `current` in an already-fetched listing.
///
/// The listing is scanned for `current.id`; a hit at position 0 is
/// reported as no match, so the first product in a listing never has
/// neighbors. `Next` steps one position earlier in the listing,
/// `Previous` one position later; stepping past either end yields
/// `None`. Single pass, nothing is mutated.
pub fn adjacent_in<'a>(
    current: &Product,
    items: &'a [Product],
    direction: Direction,
) -> Option<&'a Product> {
    let index = items.iter().position(|p| p.id == current.id)?;

    if index == 0 {
        return None;
    }

    let adjacent = match direction {
        Direction::Next => index - 1,
        Direction::Previous => index + 1,
    };

    items.get(adjacent)
}
