use serde::Serialize;

/// A game system supported by the army builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}
