//! Closed entity-kind dispatch for the REST collaborator.
//!
//! The managed collections are a fixed set; routing them through an enum
//! with exhaustive matching means a misspelled or unhandled kind cannot
//! reach the network layer.

/// Every entity kind the administration screens manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Dojo,
    Sensei,
    Participante,
    Disciplina,
    RangoEdad,
    Categoria,
    Equipo,
    Configuracion,
}

/// All kinds, in tab order.
pub const ALL_ENTITY_KINDS: [EntityKind; 8] = [
    EntityKind::Dojo,
    EntityKind::Sensei,
    EntityKind::Participante,
    EntityKind::Disciplina,
    EntityKind::RangoEdad,
    EntityKind::Categoria,
    EntityKind::Equipo,
    EntityKind::Configuracion,
];

impl EntityKind {
    /// The REST collection segment, e.g. `participantes` for
    /// `GET /participantes`.
    pub fn collection_path(self) -> &'static str {
        match self {
            Self::Dojo => "dojos",
            Self::Sensei => "senseis",
            Self::Participante => "participantes",
            Self::Disciplina => "disciplinas",
            Self::RangoEdad => "rangos-edad",
            Self::Categoria => "categorias",
            Self::Equipo => "equipos",
            Self::Configuracion => "configuracion",
        }
    }

    /// The path for one record, e.g. `dojos/65f0…`.
    pub fn record_path(self, id: &str) -> String {
        format!("{}/{id}", self.collection_path())
    }
}
