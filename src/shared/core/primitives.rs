/// Identifier of an event in the catalog.
///
/// Registrations accept any id, including ones the catalog does not contain,
/// so this stays a plain integer rather than a checked handle.
pub type EventId = u32;
