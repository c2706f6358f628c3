//! Scoping and closure behaviour, evaluated end to end from source.
