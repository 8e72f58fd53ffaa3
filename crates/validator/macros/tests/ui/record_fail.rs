//! `#[derive(Record)]` inputs that must be rejected.

use tagval::Record;

// Tuple structs have no field names
#[derive(Record)]
pub struct Position(u32, u32);

// A skipped field cannot also declare rules
#[derive(Record)]
pub struct Session {
    #[validate("required")]
    #[validate(skip)]
    token: String,
}

fn main() {}
