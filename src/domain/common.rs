//! Shared behaviour traits implemented by the spending domain records.

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Anything carrying a monetary amount that contributes to a chart total.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}
