//! Customer use cases.
//!
//! One handler per use case: create, update, list, detail. Handlers gate on
//! the acting user, delegate invariants to the aggregate, and go through the
//! repository and reader ports only.

mod create_customer;
mod errors;
mod get_customer_detail;
mod list_customers;
mod update_customer;
mod views;

pub use create_customer::{CreateCustomerCommand, CreateCustomerHandler};
pub use errors::CustomerError;
pub use get_customer_detail::GetCustomerDetailHandler;
pub use list_customers::{CustomerPage, ListCustomersHandler, ListCustomersQuery};
pub use update_customer::{UpdateCustomerCommand, UpdateCustomerHandler};
pub use views::CustomerView;
