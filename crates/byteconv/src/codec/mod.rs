//! Fixed-width numeric decoding.
//!
//! The codec follows a layered structure:
//! - `layout`: widths and IEEE-754 format constants (source of truth)
//! - `reader`: bit assembly and the bounds policies (`Checked`, `Unchecked`)
//! - `ieee754`: arithmetic float reconstruction from raw bits
//! - `primitive`: per-type decoding of a validated window
//! - `parser`: generic decode entry points combining a type and a policy
//! - `error`: explicit, actionable errors
//!
//! A decode of an N-byte type at offset `o` reads exactly `[o, o + N)`. The
//! checked policy proves that span fits before any bit is touched.
//!
//! Version française (résumé):
//! Décodage des entiers et flottants à largeur fixe. Les largeurs sont dans
//! `layout`, l'assemblage des octets et la politique de bornes dans `reader`,
//! la reconstruction IEEE-754 dans `ieee754`.

pub mod error;
pub mod ieee754;
pub mod layout;
pub mod parser;
pub mod primitive;
pub mod reader;
pub mod value;
