use crate::{domain::category::entities::Category, entity::categories};

impl From<&categories::Model> for Category {
    fn from(model: &categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Self::from(&model)
    }
}
