//! Pseudo-unique record identifiers.
//!
//! Identifiers look like UUIDs (`8-4-4-4-12` lowercase hex) but are just
//! eight independent 16-bit draws from a non-cryptographic RNG. They are
//! only used for records created without an id of their own.

use rand::Rng;

/// Length of a generated identifier.
pub const GENERATED_ID_LEN: usize = 36;

const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

/// Generate a fresh pseudo-GUID.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    let mut s4 = || format!("{:04x}", rng.gen::<u16>());

    format!(
        "{}{}-{}-{}-{}-{}{}{}",
        s4(),
        s4(),
        s4(),
        s4(),
        s4(),
        s4(),
        s4(),
        s4()
    )
}

/// Check whether `id` has the shape produced by [`generate_id`].
pub fn is_generated_id(id: &str) -> bool {
    if id.len() != GENERATED_ID_LEN {
        return false;
    }
    let groups: Vec<&str> = id.split('-').collect();
    groups.len() == GROUPS.len()
        && groups.iter().zip(GROUPS).all(|(group, len)| {
            group.len() == len
                && group
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        })
}
