use crate::{
    domain::{authentication::value_objects::Role, user::entities::User},
    entity::users,
};

impl From<&users::Model> for User {
    fn from(model: &users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            email: model.email.clone(),
            password_hash: model.password_hash.clone(),
            // unknown roles never gain privileges
            role: model.role.parse().unwrap_or(Role::User),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self::from(&model)
    }
}
