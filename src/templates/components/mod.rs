pub mod card;
pub mod error;
pub mod volunteer_list;

pub use card::volunteer_card;
pub use error::error_page;
pub use volunteer_list::volunteer_list;
