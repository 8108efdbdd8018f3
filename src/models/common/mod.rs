pub mod belt;
pub mod pagination;
pub mod response;

pub use belt::Belt;
pub use pagination::{PaginationInfo, PaginationQuery};
pub use response::ApiResponse;
