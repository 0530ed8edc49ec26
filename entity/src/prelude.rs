pub use super::appointment::Entity as Appointment;
pub use super::hospital::Entity as Hospital;
pub use super::user::Entity as User;
