// src/counter/mod.rs
// =============================================================================
// The rolling-digit counter, minus the drawing.
//
// A Counter owns one slot per place. Digit slots own a Spring that carries
// the strip to its target; the decimal point slot never moves.
//
// Lifecycle, as driven by the host UI:
// 1. Counter::new(value, places, style)   - every strip starts at rest
// 2. counter.set_value(v)                 - call whenever the value changes
// 3. counter.tick(dt) once per frame      - advances the springs
// 4. counter.frame()                      - offsets to draw for this frame
//
// Submodules:
// - place: place lists, derivation and validation
// - digit: per-place value and offset math
// - spring: the animated scalar
// - style: visual parameters and resolved style maps
// =============================================================================

mod digit;
mod place;
mod spring;
mod style;

pub use digit::{
    digit_offset, normalize_near_integer, strip_offsets, value_rounded_to_place, visible_digit,
};
pub use place::{derive_places, pow10, validate_places, Place, PlaceError};
pub use spring::{Spring, SpringConfig};
pub use style::{CounterStyle, ResolvedStyle, StyleMap};

use serde::Serialize;
use std::time::Duration;
use tracing::debug;

// One slot of a live counter
#[derive(Debug, Clone)]
enum Slot {
    Digit { place: f64, spring: Spring },
    Decimal,
}

/// What one slot shows in a frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotFrame {
    Digit {
        /// The slot's place weight
        place: f64,
        /// The strip's animated value (cumulative, not reduced mod 10)
        position: f64,
        /// Vertical offset of each digit 0-9
        offsets: [f64; 10],
        /// The digit nearest the window
        visible: u8,
    },
    Decimal,
}

/// Everything the host needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterFrame {
    pub value: f64,
    pub row_height: f64,
    pub slots: Vec<SlotFrame>,
}

impl CounterFrame {
    /// The frame as plain text: visible digits and the decimal point
    pub fn text(&self) -> String {
        self.slots
            .iter()
            .map(|slot| match slot {
                SlotFrame::Digit { visible, .. } => char::from(b'0' + visible),
                SlotFrame::Decimal => '.',
            })
            .collect()
    }
}

/// A rolling-digit counter
#[derive(Debug, Clone)]
pub struct Counter {
    value: f64,
    places: Vec<Place>,
    slots: Vec<Slot>,
    style: CounterStyle,
}

impl Counter {
    // Creates a counter showing `value` with no transition
    //
    // Without explicit places the list is derived from `value` once, here.
    // Later value changes never re-derive it.
    pub fn new(value: f64, places: Option<Vec<Place>>, style: CounterStyle) -> Self {
        let places = places.unwrap_or_else(|| derive_places(value));
        let slots = places.iter().map(|place| new_slot(*place, value)).collect();

        debug!(value, slots = places.len(), "counter created");

        Self {
            value,
            places,
            slots,
            style,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn style(&self) -> &CounterStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: CounterStyle) {
        self.style = style;
    }

    /// Height of one digit row
    pub fn row_height(&self) -> f64 {
        self.style.row_height()
    }

    // Points every strip at the new value; springs keep their momentum
    pub fn set_value(&mut self, value: f64) {
        self.value = value;

        for slot in &mut self.slots {
            if let Slot::Digit { place, spring } = slot {
                spring.set_target(value_rounded_to_place(value, *place));
            }
        }
    }

    // Replaces the place list
    //
    // A place that was already shown keeps its strip (and any motion in
    // progress). New places appear at rest on the current value.
    pub fn set_places(&mut self, places: Vec<Place>) {
        let mut old: Vec<Option<Slot>> = self.slots.drain(..).map(Some).collect();

        let slots = places
            .iter()
            .map(|place| {
                let reused = old.iter_mut().find_map(|candidate| {
                    let same = match candidate {
                        Some(Slot::Digit { place: p, .. }) => Some(*p) == place.weight(),
                        Some(Slot::Decimal) => place.is_decimal(),
                        None => false,
                    };
                    if same {
                        candidate.take()
                    } else {
                        None
                    }
                });
                reused.unwrap_or_else(|| new_slot(*place, self.value))
            })
            .collect();

        self.slots = slots;
        self.places = places;
    }

    // Advances every strip by one frame
    //
    // Returns true while any strip is still moving
    pub fn tick(&mut self, dt: Duration) -> bool {
        let mut moving = false;
        for slot in &mut self.slots {
            if let Slot::Digit { spring, .. } = slot {
                moving |= spring.step(dt);
            }
        }
        moving
    }

    /// True when every strip rests on its target
    pub fn is_settled(&self) -> bool {
        self.slots.iter().all(|slot| match slot {
            Slot::Digit { spring, .. } => spring.is_at_rest(),
            Slot::Decimal => true,
        })
    }

    /// Snapshot of what to draw right now
    pub fn frame(&self) -> CounterFrame {
        let row_height = self.row_height();

        let slots = self
            .slots
            .iter()
            .map(|slot| match slot {
                Slot::Digit { place, spring } => {
                    let position = spring.value();
                    SlotFrame::Digit {
                        place: *place,
                        position,
                        offsets: strip_offsets(position, row_height),
                        visible: visible_digit(position),
                    }
                }
                Slot::Decimal => SlotFrame::Decimal,
            })
            .collect();

        CounterFrame {
            value: self.value,
            row_height,
            slots,
        }
    }
}

fn new_slot(place: Place, value: f64) -> Slot {
    match place {
        Place::Weight(w) => Slot::Digit {
            place: w,
            spring: Spring::new(value_rounded_to_place(value, w)),
        },
        Place::Decimal => Slot::Decimal,
    }
}
