//! Fixed given-name membership sets for the gender heuristic.
//!
//! Sorted ascending so lookups can binary-search. These lists are a
//! low-precision proxy and intentionally small; swap the whole
//! [`GenderInference`](super::GenderInference) strategy for anything better.

pub(crate) const FEMALE_GIVEN_NAMES: &[&str] = &[
    "aisha",
    "amelia",
    "anjali",
    "ava",
    "charlotte",
    "ella",
    "emily",
    "emma",
    "fatima",
    "gowthami",
    "grace",
    "hannah",
    "isabella",
    "jessica",
    "kavya",
    "layla",
    "mary",
    "maya",
    "mia",
    "olivia",
    "pallavi",
    "priya",
    "samantha",
    "sara",
    "sarah",
    "sita",
    "sofia",
    "sophia",
    "sudha",
];

pub(crate) const MALE_GIVEN_NAMES: &[&str] = &[
    "ahmed",
    "akhil",
    "akil",
    "alex",
    "ali",
    "benjamin",
    "chris",
    "david",
    "elijah",
    "henry",
    "james",
    "jay",
    "john",
    "liam",
    "lucas",
    "michael",
    "mike",
    "noah",
    "oliver",
    "prushotham",
    "rafi",
    "ram",
    "robert",
    "ryan",
    "suresh",
    "thomas",
    "vikram",
    "william",
];

/// Keywords that suggest a female candidate when found in the body text.
/// Checked before the male list; the leading spaces are intentional so
/// "her" does not fire inside e.g. "together".
pub(crate) const FEMALE_KEYWORDS: &[&str] = &[" she ", " her ", " ms ", " mrs ", " woman", " female"];

/// Male counterpart of [`FEMALE_KEYWORDS`].
pub(crate) const MALE_KEYWORDS: &[&str] = &[" he ", " him ", " mr ", " man ", " male"];

#[inline]
pub(crate) fn is_female_name(name: &str) -> bool {
    FEMALE_GIVEN_NAMES.binary_search(&name).is_ok()
}

#[inline]
pub(crate) fn is_male_name(name: &str) -> bool {
    MALE_GIVEN_NAMES.binary_search(&name).is_ok()
}
