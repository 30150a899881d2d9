pub mod categories;
pub mod contact_info;
pub mod orders;
pub mod payment_methods;
pub mod services;
pub mod testimonials;
pub mod users;

pub use categories::Entity as Categories;
pub use contact_info::Entity as ContactInfos;
pub use orders::Entity as Orders;
pub use payment_methods::Entity as PaymentMethods;
pub use services::Entity as Services;
pub use testimonials::Entity as Testimonials;
pub use users::Entity as Users;
