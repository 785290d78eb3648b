use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct UpdateCategoryInput {
    pub category_id: Uuid,
    pub name: String,
}
