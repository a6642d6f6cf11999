// Adapters layer: concrete registry backends behind MembershipGateway.

pub mod http;
pub mod static_list;

pub use http::HttpGateway;
pub use static_list::StaticListGateway;
