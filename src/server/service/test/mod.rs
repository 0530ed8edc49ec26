use crate::server::{error::AppError, model::user::User};

mod appointment;

fn domain_user(model: entity::user::Model) -> User {
    User::from_entity(model).unwrap()
}
