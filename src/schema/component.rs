use crate::schema::ComponentId;

/// A typed view over a component's schema data.
pub trait Component {
    /// The fixed component ID this view reads from and writes to.
    const COMPONENT_ID: ComponentId;
}
