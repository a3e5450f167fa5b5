//! Parser tests.
//!
//! - `parser`: productions and error reporting on fixed inputs
//! - `properties`: tree invariants over generated programs
